//! Text sanitization pipeline.
//!
//! Sanitization runs four stages in a fixed order, each taking and
//! returning an owned string:
//!
//! 1. **Case**: uppercase when requested or when case is not preserved
//! 2. **Filter**: drop punctuation (and digits when numbers are not kept)
//! 3. **Whitespace**: remove every whitespace character when requested
//! 4. **Trim**: strip leading and trailing whitespace
//!
//! A stage that its config does not enable returns the string unchanged.

use purify_model::SanitizeConfig;

type Stage = fn(String, &SanitizeConfig) -> String;

const STAGES: [Stage; 4] = [apply_case, filter_chars, strip_whitespace, trim_edges];

/// Produces sanitized text for a config.
///
/// The matcher and processor go through this seam so that a memoizing
/// cache can stand in for the plain pipeline.
pub trait Normalize {
    /// Sanitize `input` with `config`.
    fn normalize(&self, input: &str, config: &SanitizeConfig) -> String;
}

/// The uncached pipeline.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sanitizer;

impl Normalize for Sanitizer {
    fn normalize(&self, input: &str, config: &SanitizeConfig) -> String {
        sanitize(input, config)
    }
}

/// Sanitize `input` with `config`.
///
/// Absent and empty input both yield an empty string.
///
/// # Example
/// ```
/// use purify_model::SanitizeConfig;
/// use purify_normalization::sanitize;
///
/// assert_eq!(sanitize("O@!#R&*^A-N+GE CAT", &SanitizeConfig::default()), "ORANGE CAT");
/// assert_eq!(sanitize("orange cat", &SanitizeConfig::canonical()), "ORANGECAT");
/// assert_eq!(sanitize(None::<&str>, &SanitizeConfig::default()), "");
/// ```
pub fn sanitize<'a>(input: impl Into<Option<&'a str>>, config: &SanitizeConfig) -> String {
    match input.into() {
        Some(text) if !text.is_empty() => STAGES
            .iter()
            .fold(text.to_string(), |acc, stage| stage(acc, config)),
        _ => String::new(),
    }
}

fn apply_case(text: String, config: &SanitizeConfig) -> String {
    if config.uppercases() {
        text.to_uppercase()
    } else {
        text
    }
}

fn filter_chars(text: String, config: &SanitizeConfig) -> String {
    if !config.filters_chars() {
        return text;
    }
    text.chars().filter(|ch| keeps_char(*ch, config)).collect()
}

fn keeps_char(ch: char, config: &SanitizeConfig) -> bool {
    let strip_special = config.remove_special_chars;
    match ch {
        c if c.is_ascii_alphabetic() || c.is_whitespace() => true,
        c if c.is_ascii_digit() => config.preserve_numbers,
        '-' => !strip_special || config.preserve_hyphens,
        '_' => !strip_special || config.preserve_underscores,
        _ => !strip_special,
    }
}

fn strip_whitespace(text: String, config: &SanitizeConfig) -> String {
    if config.strips_whitespace() {
        text.chars().filter(|ch| !ch.is_whitespace()).collect()
    } else {
        text
    }
}

fn trim_edges(text: String, config: &SanitizeConfig) -> String {
    if !config.trim_edges {
        return text;
    }
    let trimmed = text.trim();
    if trimmed.len() == text.len() {
        text
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_sanitize(input: &str) -> String {
        sanitize(input, &SanitizeConfig::default())
    }

    #[test]
    fn default_strips_punctuation_keeps_case_and_spaces() {
        assert_eq!(default_sanitize("ORANGE%C_AT"), "ORANGECAT");
        assert_eq!(default_sanitize("O@!#R&*^A-N+GE CAT"), "ORANGE CAT");
        assert_eq!(default_sanitize("OrAnGe CaT"), "OrAnGe CaT");
        assert_eq!(default_sanitize("O R A N G E C A T"), "O R A N G E C A T");
    }

    #[test]
    fn default_trims_edges() {
        assert_eq!(default_sanitize("ORANGE CAT "), "ORANGE CAT");
        assert_eq!(default_sanitize("  \tcat\n"), "cat");
    }

    #[test]
    fn empty_and_absent_input() {
        assert_eq!(default_sanitize(""), "");
        assert_eq!(sanitize(None::<&str>, &SanitizeConfig::default()), "");
        assert_eq!(default_sanitize("!!!@@@###"), "");
    }

    #[test]
    fn uppercase_conversion() {
        let config = SanitizeConfig::default().with_upper_case(true);
        assert_eq!(sanitize("orange-cat", &config), "ORANGECAT");

        let config = SanitizeConfig::default().with_upper_case(false);
        assert_eq!(sanitize("orange-cat", &config), "orangecat");
    }

    #[test]
    fn uppercase_when_case_not_preserved() {
        let config = SanitizeConfig::default().with_case(false);
        assert_eq!(sanitize("Mixed", &config), "MIXED");
    }

    #[test]
    fn explicit_uppercase_beats_preserve_case() {
        let config = SanitizeConfig::default().with_case(true).with_upper_case(true);
        assert_eq!(sanitize("abc", &config), "ABC");
    }

    #[test]
    fn whitespace_removal() {
        let config = SanitizeConfig::default()
            .with_upper_case(true)
            .with_whitespace_removed(true);
        assert_eq!(sanitize("orange cat", &config), "ORANGECAT");

        let config = SanitizeConfig::default().with_spaces(false);
        assert_eq!(sanitize("a\tb\nc d", &config), "abcd");
    }

    #[test]
    fn special_chars_kept_when_disabled() {
        let config = SanitizeConfig::default()
            .with_upper_case(false)
            .with_special_chars_removed(false);
        assert_eq!(sanitize("orange-cat", &config), "orange-cat");
        assert_eq!(sanitize("a@b#c", &config), "a@b#c");
    }

    #[test]
    fn hyphen_and_underscore_combinations() {
        let input = "A-B_C.D";
        let base = SanitizeConfig::default();

        assert_eq!(sanitize(input, &base), "ABCD");
        assert_eq!(sanitize(input, &base.with_hyphens(true)), "A-BCD");
        assert_eq!(sanitize(input, &base.with_underscores(true)), "AB_CD");
        assert_eq!(
            sanitize(input, &base.with_hyphens(true).with_underscores(true)),
            "A-B_CD"
        );
    }

    #[test]
    fn digits_follow_preserve_numbers() {
        let base = SanitizeConfig::default();
        assert_eq!(sanitize("AB-12", &base), "AB12");
        assert_eq!(sanitize("AB-12", &base.with_numbers(false)), "AB");
        assert_eq!(
            sanitize("AB-12", &base.with_numbers(false).with_hyphens(true)),
            "AB-"
        );
    }

    #[test]
    fn dropping_numbers_without_stripping_punctuation() {
        let config = SanitizeConfig::default()
            .with_special_chars_removed(false)
            .with_numbers(false);
        assert_eq!(sanitize("BRK.B 2024", &config), "BRK.B");
    }

    #[test]
    fn non_ascii_letters_are_filtered() {
        assert_eq!(default_sanitize("café"), "caf");
        assert_eq!(
            sanitize("straße", &SanitizeConfig::canonical()),
            "STRASSE"
        );
    }

    #[test]
    fn no_trim_keeps_edges() {
        let config = SanitizeConfig::default().with_trimmed_edges(false);
        assert_eq!(sanitize(" a! ", &config), " a ");
    }

    #[test]
    fn sanitizer_matches_function() {
        let config = SanitizeConfig::canonical();
        assert_eq!(
            Sanitizer.normalize("o-range cat", &config),
            sanitize("o-range cat", &config)
        );
    }
}
