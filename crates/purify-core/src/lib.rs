//! Identifier sanitization and candidate matching.
//!
//! The entry point is [`Processor`], which sanitizes an input with an output
//! profile and checks it against a caller-supplied candidate set. The free
//! functions below use an uncached processor; construct
//! [`Processor::with_cache`] to share a [`SanitizeCache`] between calls.
//!
//! # Example
//!
//! ```
//! use purify_core::{ProcessConfig, process, process_detailed};
//!
//! let accepted = ["ORANGECAT", "BLACKCAT"];
//! let config = ProcessConfig::default().with_strict_matching(false);
//!
//! assert_eq!(
//!     process("orange-cat", &accepted, &config).unwrap(),
//!     Some("ORANGECAT".to_string())
//! );
//!
//! let result = process_detailed("black cat", &accepted, &config).unwrap();
//! assert_eq!(result.matched_with.as_deref(), Some("BLACKCAT"));
//!
//! let err = process("DOG", &accepted, &config).unwrap_err();
//! assert_eq!(err.to_string(), "No match found in the provided array.");
//! ```

pub mod processor;

pub use processor::Processor;
pub use purify_map::{
    NearMatch, closest_candidates, find_match, levenshtein_str, match_batch, match_value,
};
pub use purify_model::{
    DEFAULT_NO_MATCH_MESSAGE, MatchConfig, ProcessConfig, ProcessResult, PurifyError, Result,
    SanitizeConfig, SanitizeOverrides,
};
pub use purify_normalization::{
    DEFAULT_CACHE_CAPACITY, SanitizeCache, clear_cache, memoized_sanitize, sanitize,
};

/// Sanitize `input` and check it against `candidates`.
///
/// See [`Processor::process`].
///
/// # Errors
///
/// [`PurifyError::InvalidArgument`] for empty input, [`PurifyError::NoMatch`]
/// for a miss when `config.throw_on_no_match` is set.
pub fn process<S: AsRef<str>>(
    input: &str,
    candidates: &[S],
    config: &ProcessConfig,
) -> Result<Option<String>> {
    Processor::new().process(input, candidates, config)
}

/// Sanitize `input` with the output profile of `config`, with no candidate
/// set to check against.
///
/// # Errors
///
/// Returns [`PurifyError::InvalidArgument`] for empty input.
pub fn process_unchecked(input: &str, config: &ProcessConfig) -> Result<String> {
    Processor::new().process_unchecked(input, config)
}

/// Like [`process`], but a miss is always `None`.
///
/// # Errors
///
/// Returns [`PurifyError::InvalidArgument`] for empty input.
pub fn process_or_null<S: AsRef<str>>(
    input: &str,
    candidates: &[S],
    config: &ProcessConfig,
) -> Result<Option<String>> {
    Processor::new().process_or_null(input, candidates, config)
}

/// Full outcome of processing `input`.
///
/// # Errors
///
/// Returns [`PurifyError::InvalidArgument`] for empty input.
pub fn process_detailed<S: AsRef<str>>(
    input: &str,
    candidates: &[S],
    config: &ProcessConfig,
) -> Result<ProcessResult> {
    Processor::new().process_detailed(input, candidates, config)
}

/// [`process`] over every input, preserving order.
///
/// # Errors
///
/// Returns the first error encountered.
pub fn process_batch<I, S>(
    inputs: &[I],
    candidates: &[S],
    config: &ProcessConfig,
) -> Result<Vec<Option<String>>>
where
    I: AsRef<str>,
    S: AsRef<str>,
{
    Processor::new().process_batch(inputs, candidates, config)
}

/// [`process_detailed`] over every input, preserving order.
///
/// # Errors
///
/// Returns the first error encountered.
pub fn process_batch_detailed<I, S>(
    inputs: &[I],
    candidates: &[S],
    config: &ProcessConfig,
) -> Result<Vec<ProcessResult>>
where
    I: AsRef<str>,
    S: AsRef<str>,
{
    Processor::new().process_batch_detailed(inputs, candidates, config)
}
