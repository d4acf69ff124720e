//! Configuration values for sanitization, matching, and processing.
//!
//! Every configuration type is an immutable value. Callers start from a
//! default (or the canonical profile) and derive new values with the
//! `with_*` builders or [`SanitizeOverrides`]; nothing is mutated after
//! construction. All types deserialize with `#[serde(default)]`, so a
//! partial JSON object merges onto the defaults.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::DEFAULT_NO_MATCH_MESSAGE;

/// Toggles controlling the sanitization pipeline.
///
/// The toggles are resolved in a fixed order, independent of how they were
/// set: case conversion, character filtering, whitespace removal, edge trim.
/// When a conversion toggle and a preserve-flag disagree, the conversion
/// toggle wins (`convert_to_upper_case` beats `preserve_case`,
/// `remove_whitespace` beats `preserve_spaces`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct SanitizeConfig {
    /// Strip characters that are not ASCII alphanumerics or whitespace.
    pub remove_special_chars: bool,
    /// Force the whole string to uppercase.
    pub convert_to_upper_case: bool,
    /// Remove every whitespace character.
    pub remove_whitespace: bool,
    /// Keep digits. When cleared, digits are always stripped.
    pub preserve_numbers: bool,
    /// Trim leading and trailing whitespace.
    pub trim_edges: bool,
    /// Leave character case untouched unless uppercase is requested.
    pub preserve_case: bool,
    /// Keep whitespace unless removal is requested.
    pub preserve_spaces: bool,
    /// Keep `-` when special characters are stripped.
    pub preserve_hyphens: bool,
    /// Keep `_` when special characters are stripped.
    pub preserve_underscores: bool,
}

impl Default for SanitizeConfig {
    fn default() -> Self {
        Self {
            remove_special_chars: true,
            convert_to_upper_case: false,
            remove_whitespace: false,
            preserve_numbers: true,
            trim_edges: true,
            preserve_case: true,
            preserve_spaces: true,
            preserve_hyphens: false,
            preserve_underscores: false,
        }
    }
}

impl SanitizeConfig {
    /// Default profile: strip punctuation, keep case and spaces, trim edges.
    pub fn new() -> Self {
        Self::default()
    }

    /// Canonical identifier profile: uppercase, no punctuation, no whitespace,
    /// digits kept.
    pub fn canonical() -> Self {
        Self {
            convert_to_upper_case: true,
            remove_whitespace: true,
            preserve_case: false,
            preserve_spaces: false,
            ..Self::default()
        }
    }

    /// Resolved: the case stage uppercases the input.
    pub fn uppercases(&self) -> bool {
        self.convert_to_upper_case || !self.preserve_case
    }

    /// Resolved: the whitespace stage removes all whitespace.
    pub fn strips_whitespace(&self) -> bool {
        self.remove_whitespace || !self.preserve_spaces
    }

    /// Resolved: the character-filter stage runs.
    pub fn filters_chars(&self) -> bool {
        self.remove_special_chars || !self.preserve_numbers
    }

    /// Merge the set fields of `overrides` onto this config.
    pub fn with_overrides(self, overrides: &SanitizeOverrides) -> Self {
        Self {
            remove_special_chars: overrides
                .remove_special_chars
                .unwrap_or(self.remove_special_chars),
            convert_to_upper_case: overrides
                .convert_to_upper_case
                .unwrap_or(self.convert_to_upper_case),
            remove_whitespace: overrides
                .remove_whitespace
                .unwrap_or(self.remove_whitespace),
            preserve_numbers: overrides.preserve_numbers.unwrap_or(self.preserve_numbers),
            trim_edges: overrides.trim_edges.unwrap_or(self.trim_edges),
            preserve_case: overrides.preserve_case.unwrap_or(self.preserve_case),
            preserve_spaces: overrides.preserve_spaces.unwrap_or(self.preserve_spaces),
            preserve_hyphens: overrides.preserve_hyphens.unwrap_or(self.preserve_hyphens),
            preserve_underscores: overrides
                .preserve_underscores
                .unwrap_or(self.preserve_underscores),
        }
    }

    pub fn with_special_chars_removed(mut self, enable: bool) -> Self {
        self.remove_special_chars = enable;
        self
    }

    pub fn with_upper_case(mut self, enable: bool) -> Self {
        self.convert_to_upper_case = enable;
        self
    }

    pub fn with_whitespace_removed(mut self, enable: bool) -> Self {
        self.remove_whitespace = enable;
        self
    }

    pub fn with_numbers(mut self, enable: bool) -> Self {
        self.preserve_numbers = enable;
        self
    }

    pub fn with_trimmed_edges(mut self, enable: bool) -> Self {
        self.trim_edges = enable;
        self
    }

    pub fn with_case(mut self, enable: bool) -> Self {
        self.preserve_case = enable;
        self
    }

    pub fn with_spaces(mut self, enable: bool) -> Self {
        self.preserve_spaces = enable;
        self
    }

    pub fn with_hyphens(mut self, enable: bool) -> Self {
        self.preserve_hyphens = enable;
        self
    }

    pub fn with_underscores(mut self, enable: bool) -> Self {
        self.preserve_underscores = enable;
        self
    }
}

/// Partial sanitization settings supplied by a caller.
///
/// Unset fields fall back to whatever base config the overrides are merged
/// onto (see [`SanitizeConfig::with_overrides`]).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SanitizeOverrides {
    pub remove_special_chars: Option<bool>,
    pub convert_to_upper_case: Option<bool>,
    pub remove_whitespace: Option<bool>,
    pub preserve_numbers: Option<bool>,
    pub trim_edges: Option<bool>,
    pub preserve_case: Option<bool>,
    pub preserve_spaces: Option<bool>,
    pub preserve_hyphens: Option<bool>,
    pub preserve_underscores: Option<bool>,
}

impl SanitizeOverrides {
    /// Resolve against the default profile.
    pub fn resolve(&self) -> SanitizeConfig {
        SanitizeConfig::default().with_overrides(self)
    }
}

impl From<SanitizeOverrides> for SanitizeConfig {
    fn from(overrides: SanitizeOverrides) -> Self {
        overrides.resolve()
    }
}

/// Nested profiles default to canonical, so a partial object only changes
/// the fields it names.
fn canonical_with_overrides<'de, D>(deserializer: D) -> Result<SanitizeConfig, D::Error>
where
    D: Deserializer<'de>,
{
    let overrides = SanitizeOverrides::deserialize(deserializer)?;
    Ok(SanitizeConfig::canonical().with_overrides(&overrides))
}

/// Options for comparing an input against a candidate set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Exact, case-sensitive comparison of the raw strings.
    ///
    /// When set, `compare` is ignored.
    pub strict_matching: bool,
    /// Profile applied to both the input and every candidate in
    /// non-strict mode.
    #[serde(deserialize_with = "canonical_with_overrides")]
    pub compare: SanitizeConfig,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            strict_matching: true,
            compare: SanitizeConfig::canonical(),
        }
    }
}

impl MatchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Non-strict matching with the canonical comparison profile.
    pub fn normalized() -> Self {
        Self {
            strict_matching: false,
            ..Self::default()
        }
    }

    pub fn with_strict_matching(mut self, enable: bool) -> Self {
        self.strict_matching = enable;
        self
    }

    pub fn with_compare(mut self, compare: SanitizeConfig) -> Self {
        self.compare = compare;
        self
    }
}

/// Options for the process-then-match operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessConfig {
    /// Profile used to produce the returned (output) string.
    #[serde(deserialize_with = "canonical_with_overrides")]
    pub output: SanitizeConfig,
    /// How the input is compared against candidates.
    #[serde(flatten)]
    pub matching: MatchConfig,
    /// Report a missing match as an error instead of an absent value.
    pub throw_on_no_match: bool,
    /// Message carried by the no-match error. `None` uses the default text.
    pub error_message: Option<String>,
}

impl Default for ProcessConfig {
    fn default() -> Self {
        Self {
            output: SanitizeConfig::canonical(),
            matching: MatchConfig::default(),
            throw_on_no_match: true,
            error_message: None,
        }
    }
}

impl ProcessConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Message used when no candidate matches.
    pub fn no_match_message(&self) -> &str {
        self.error_message
            .as_deref()
            .unwrap_or(DEFAULT_NO_MATCH_MESSAGE)
    }

    pub fn with_output(mut self, output: SanitizeConfig) -> Self {
        self.output = output;
        self
    }

    pub fn with_matching(mut self, matching: MatchConfig) -> Self {
        self.matching = matching;
        self
    }

    pub fn with_strict_matching(mut self, enable: bool) -> Self {
        self.matching.strict_matching = enable;
        self
    }

    pub fn with_throw_on_no_match(mut self, enable: bool) -> Self {
        self.throw_on_no_match = enable;
        self
    }

    pub fn with_error_message(mut self, message: impl Into<String>) -> Self {
        self.error_message = Some(message.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversion_toggles_win_over_preserve_flags() {
        let config = SanitizeConfig::default().with_upper_case(true);
        assert!(config.preserve_case);
        assert!(config.uppercases());

        let config = SanitizeConfig::default().with_whitespace_removed(true);
        assert!(config.preserve_spaces);
        assert!(config.strips_whitespace());
    }

    #[test]
    fn filter_stage_runs_when_numbers_are_dropped() {
        let config = SanitizeConfig::default()
            .with_special_chars_removed(false)
            .with_numbers(false);
        assert!(config.filters_chars());

        let config = SanitizeConfig::default().with_special_chars_removed(false);
        assert!(!config.filters_chars());
    }

    #[test]
    fn overrides_only_touch_set_fields() {
        let overrides = SanitizeOverrides {
            preserve_hyphens: Some(true),
            ..SanitizeOverrides::default()
        };
        let config = SanitizeConfig::canonical().with_overrides(&overrides);
        assert!(config.preserve_hyphens);
        assert!(config.convert_to_upper_case);
        assert!(config.remove_whitespace);
    }

    #[test]
    fn process_defaults() {
        let config = ProcessConfig::default();
        assert!(config.throw_on_no_match);
        assert!(config.matching.strict_matching);
        assert_eq!(config.output, SanitizeConfig::canonical());
        assert_eq!(config.no_match_message(), DEFAULT_NO_MATCH_MESSAGE);
    }
}
