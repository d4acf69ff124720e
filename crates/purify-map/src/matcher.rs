//! Matching an input against a candidate set.
//!
//! Strict mode compares the raw strings ordinally. Normalized mode runs the
//! input and every candidate through the comparison profile and compares the
//! results, so `"orange-cat"` matches `"ORANGE CAT"`.

use purify_model::MatchConfig;
use purify_normalization::{Normalize, Sanitizer};
use tracing::trace;

/// Find the candidate matching `input`, returned exactly as supplied.
///
/// Empty input or an empty candidate set never matches.
pub fn find_match<'c, S: AsRef<str>>(
    input: &str,
    candidates: &'c [S],
    config: &MatchConfig,
) -> Option<&'c str> {
    find_match_with(&Sanitizer, input, candidates, config)
}

/// [`find_match`] using `normalizer` for the comparison forms.
pub fn find_match_with<'c, N, S>(
    normalizer: &N,
    input: &str,
    candidates: &'c [S],
    config: &MatchConfig,
) -> Option<&'c str>
where
    N: Normalize + ?Sized,
    S: AsRef<str>,
{
    if input.is_empty() || candidates.is_empty() {
        return None;
    }

    trace!(
        strict = config.strict_matching,
        candidates = candidates.len(),
        "matching input against candidates"
    );

    if config.strict_matching {
        return candidates
            .iter()
            .map(AsRef::as_ref)
            .find(|candidate| *candidate == input);
    }

    let key = normalizer.normalize(input, &config.compare);
    if key.is_empty() {
        return None;
    }
    candidates
        .iter()
        .map(AsRef::as_ref)
        .find(|candidate| normalizer.normalize(candidate, &config.compare) == key)
}

/// Check whether `input` matches any candidate.
///
/// Absent input is passed as an empty string, an absent candidate set as an
/// empty slice; both yield `false`.
///
/// # Example
/// ```
/// use purify_map::match_value;
/// use purify_model::MatchConfig;
///
/// assert!(!match_value("ORANGECAT", &["orangecat"], &MatchConfig::default()));
/// assert!(match_value("ORANGECAT", &["orangecat"], &MatchConfig::normalized()));
/// ```
pub fn match_value<S: AsRef<str>>(input: &str, candidates: &[S], config: &MatchConfig) -> bool {
    find_match(input, candidates, config).is_some()
}

/// [`match_value`] using `normalizer` for the comparison forms.
pub fn match_value_with<N, S>(
    normalizer: &N,
    input: &str,
    candidates: &[S],
    config: &MatchConfig,
) -> bool
where
    N: Normalize + ?Sized,
    S: AsRef<str>,
{
    find_match_with(normalizer, input, candidates, config).is_some()
}

/// Match every input independently, preserving order.
pub fn match_batch<I, S>(inputs: &[I], candidates: &[S], config: &MatchConfig) -> Vec<bool>
where
    I: AsRef<str>,
    S: AsRef<str>,
{
    match_batch_with(&Sanitizer, inputs, candidates, config)
}

/// [`match_batch`] using `normalizer` for the comparison forms.
pub fn match_batch_with<N, I, S>(
    normalizer: &N,
    inputs: &[I],
    candidates: &[S],
    config: &MatchConfig,
) -> Vec<bool>
where
    N: Normalize + ?Sized,
    I: AsRef<str>,
    S: AsRef<str>,
{
    inputs
        .iter()
        .map(|input| match_value_with(normalizer, input.as_ref(), candidates, config))
        .collect()
}

#[cfg(test)]
mod tests {
    use purify_model::SanitizeConfig;
    use purify_normalization::SanitizeCache;

    use super::*;

    const CATS: [&str; 3] = ["BLACKCAT", "ORANGECAT", "WHITECAT"];

    fn strict() -> MatchConfig {
        MatchConfig::default()
    }

    fn normalized() -> MatchConfig {
        MatchConfig::normalized()
    }

    #[test]
    fn strict_is_exact_and_case_sensitive() {
        assert!(match_value("ORANGECAT", &CATS, &strict()));
        assert!(!match_value("YELLOWCAT", &CATS, &strict()));
        assert!(!match_value("ORANGECAT", &["orangecat"], &strict()));
        assert!(!match_value("ORANGECAT", &["ORANGE CAT"], &strict()));
        assert!(!match_value("ORANGECAT", &["ORANGE%C_AT"], &strict()));
    }

    #[test]
    fn strict_ignores_compare_profile() {
        let config = strict().with_compare(SanitizeConfig::canonical());
        assert!(!match_value("ORANGECAT", &["orange-CAT"], &config));
    }

    #[test]
    fn normalized_sanitizes_both_sides() {
        assert!(match_value("ORANGECAT", &["orangecat", "whitecat"], &normalized()));
        assert!(match_value("ORANGECAT", &["OrAnGeCaT"], &normalized()));
        assert!(match_value("ORANGECAT", &["ORANGE%C_AT", "WHITECAT"], &normalized()));
        assert!(match_value("ORANGECAT", &["O R A N G E C A T"], &normalized()));
        assert!(match_value("orange cat", &CATS, &normalized()));
        assert!(match_value("ORANGECAT", &["orange-CAT"], &normalized()));
    }

    #[test]
    fn normalized_does_not_repair_substituted_letters() {
        // "O@RANGE-C@T!" sanitizes to "ORANGECT".
        assert!(!match_value("ORANGECAT", &["O@RANGE-C@T!"], &normalized()));
        assert!(!match_value("ORANGECAT", &["BLACKCAT", "WHITECAT"], &normalized()));
    }

    #[test]
    fn empty_inputs_never_match() {
        let none: [&str; 0] = [];
        assert!(!match_value("", &["ORANGECAT"], &strict()));
        assert!(!match_value("", &["ORANGECAT"], &normalized()));
        assert!(!match_value("ORANGECAT", &none, &strict()));
        assert!(!match_value("ORANGECAT", &none, &normalized()));
    }

    #[test]
    fn punctuation_only_input_does_not_match_blank_candidate() {
        assert!(!match_value("!!!", &["@@@"], &normalized()));
    }

    #[test]
    fn find_match_returns_original_candidate() {
        let candidates = vec!["orange-cat".to_string(), "BLACKCAT".to_string()];
        assert_eq!(
            find_match("ORANGE CAT", &candidates, &normalized()),
            Some("orange-cat")
        );
        assert_eq!(find_match("ORANGE CAT", &candidates, &strict()), None);
    }

    #[test]
    fn batch_preserves_order_and_length() {
        let inputs = ["ORANGECAT", "orange-cat", "BLACKCAT", "YELLOWCAT"];
        assert_eq!(
            match_batch(&inputs, &CATS, &strict()),
            vec![true, false, true, false]
        );
        assert_eq!(
            match_batch(&inputs, &CATS, &normalized()),
            vec![true, true, true, false]
        );
    }

    #[test]
    fn cached_normalizer_gives_same_answers() {
        let cache = SanitizeCache::new();
        let inputs = ["ORANGECAT", "orange-cat", "YELLOWCAT"];
        assert_eq!(
            match_batch_with(&cache, &inputs, &CATS, &normalized()),
            match_batch(&inputs, &CATS, &normalized())
        );
        assert!(!cache.is_empty());
    }
}
