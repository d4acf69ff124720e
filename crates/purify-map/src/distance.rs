//! Bounded edit distance and near-miss suggestions.
//!
//! Nothing here takes part in [`match_value`](crate::match_value); callers use
//! it to offer "did you mean" hints after a miss.

use std::cmp::Ordering;

use purify_model::{PurifyError, Result, SanitizeConfig};
use purify_normalization::{Normalize, Sanitizer};
use rapidfuzz::distance::jaro_winkler;

/// Longest operand accepted by [`levenshtein`].
pub const MAX_DISTANCE_INPUT_LEN: usize = 1_000;

/// Levenshtein distance between two sequences.
///
/// Insertions, deletions, and substitutions each cost 1.
///
/// # Errors
///
/// Returns [`PurifyError::SizeLimitExceeded`] if either operand is longer
/// than [`MAX_DISTANCE_INPUT_LEN`].
pub fn levenshtein<T: PartialEq>(a: &[T], b: &[T]) -> Result<usize> {
    for len in [a.len(), b.len()] {
        if len > MAX_DISTANCE_INPUT_LEN {
            return Err(PurifyError::SizeLimitExceeded {
                length: len,
                max: MAX_DISTANCE_INPUT_LEN,
            });
        }
    }

    if a.is_empty() {
        return Ok(b.len());
    }
    if b.is_empty() {
        return Ok(a.len());
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0usize; b.len() + 1];

    for (i, a_item) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, b_item) in b.iter().enumerate() {
            let cost = usize::from(a_item != b_item);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    Ok(prev[b.len()])
}

/// [`levenshtein`] over the characters of two strings.
pub fn levenshtein_str(a: &str, b: &str) -> Result<usize> {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    levenshtein(&a, &b)
}

/// A candidate within edit distance of an input.
#[derive(Debug, Clone, PartialEq)]
pub struct NearMatch<'c> {
    /// Candidate exactly as supplied.
    pub candidate: &'c str,
    /// Edit distance between the sanitized forms.
    pub distance: usize,
    /// Jaro-Winkler similarity between the sanitized forms (0.0 to 1.0).
    pub similarity: f64,
}

/// Candidates whose sanitized form is within `max_distance` edits of the
/// sanitized input.
///
/// Results are ordered by distance, then by similarity (highest first), then
/// by position in `candidates`. An empty input yields no suggestions.
///
/// # Errors
///
/// Returns [`PurifyError::SizeLimitExceeded`] if a sanitized operand is too
/// long to compare.
pub fn closest_candidates<'c, S: AsRef<str>>(
    input: &str,
    candidates: &'c [S],
    max_distance: usize,
    compare: &SanitizeConfig,
) -> Result<Vec<NearMatch<'c>>> {
    closest_candidates_with(&Sanitizer, input, candidates, max_distance, compare)
}

/// [`closest_candidates`] using `normalizer` for the sanitized forms.
pub fn closest_candidates_with<'c, N, S>(
    normalizer: &N,
    input: &str,
    candidates: &'c [S],
    max_distance: usize,
    compare: &SanitizeConfig,
) -> Result<Vec<NearMatch<'c>>>
where
    N: Normalize + ?Sized,
    S: AsRef<str>,
{
    let key = normalizer.normalize(input, compare);
    if key.is_empty() {
        return Ok(Vec::new());
    }
    let key_chars: Vec<char> = key.chars().collect();

    let mut matches = Vec::new();
    for candidate in candidates.iter().map(AsRef::as_ref) {
        let normalized = normalizer.normalize(candidate, compare);
        let chars: Vec<char> = normalized.chars().collect();
        let distance = levenshtein(&key_chars, &chars)?;
        if distance <= max_distance {
            matches.push(NearMatch {
                candidate,
                distance,
                similarity: jaro_winkler::similarity(key.chars(), normalized.chars()),
            });
        }
    }

    // Stable sort keeps candidate order for full ties.
    matches.sort_by(|a, b| {
        a.distance.cmp(&b.distance).then_with(|| {
            b.similarity
                .partial_cmp(&a.similarity)
                .unwrap_or(Ordering::Equal)
        })
    });
    Ok(matches)
}
