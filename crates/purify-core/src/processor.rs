//! Sanitize-then-match orchestration.

use std::sync::Arc;

use purify_map::find_match_with;
use purify_model::{ProcessConfig, ProcessResult, PurifyError, Result, SanitizeConfig};
use purify_normalization::{Normalize, SanitizeCache, sanitize};
use tracing::debug;

/// Sanitizes inputs and checks them against candidate sets.
///
/// A processor built with [`Processor::with_cache`] routes every
/// sanitization (output and comparison forms) through the shared cache.
/// Results are identical either way.
#[derive(Debug, Clone, Default)]
pub struct Processor {
    cache: Option<Arc<SanitizeCache>>,
}

impl Processor {
    /// Create an uncached processor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a processor backed by `cache`.
    pub fn with_cache(cache: Arc<SanitizeCache>) -> Self {
        Self { cache: Some(cache) }
    }

    /// Cache used by this processor, if any.
    pub fn cache(&self) -> Option<&Arc<SanitizeCache>> {
        self.cache.as_ref()
    }

    /// Sanitize `input` and check it against `candidates`.
    ///
    /// Returns the sanitized input on a match, or when `candidates` is empty.
    /// On a miss returns `Ok(None)` unless `throw_on_no_match` is set.
    ///
    /// # Errors
    ///
    /// - [`PurifyError::InvalidArgument`] if `input` is empty.
    /// - [`PurifyError::NoMatch`] if nothing matched and
    ///   `config.throw_on_no_match` is set.
    pub fn process<S: AsRef<str>>(
        &self,
        input: &str,
        candidates: &[S],
        config: &ProcessConfig,
    ) -> Result<Option<String>> {
        let result = self.process_detailed(input, candidates, config)?;
        if !result.matched {
            debug!(
                input = %result.original,
                candidates = candidates.len(),
                strict = config.matching.strict_matching,
                "no candidate matched"
            );
        }
        result.into_output(config)
    }

    /// Sanitize `input` with the output profile, without a candidate set.
    ///
    /// # Errors
    ///
    /// Returns [`PurifyError::InvalidArgument`] if `input` is empty.
    pub fn process_unchecked(&self, input: &str, config: &ProcessConfig) -> Result<String> {
        let none: [&str; 0] = [];
        self.process_detailed(input, &none, config)
            .map(|result| result.sanitized)
    }

    /// [`process`](Self::process) that reports a miss as `None` regardless of
    /// `throw_on_no_match`.
    ///
    /// # Errors
    ///
    /// Returns [`PurifyError::InvalidArgument`] if `input` is empty.
    pub fn process_or_null<S: AsRef<str>>(
        &self,
        input: &str,
        candidates: &[S],
        config: &ProcessConfig,
    ) -> Result<Option<String>> {
        let config = config.clone().with_throw_on_no_match(false);
        self.process(input, candidates, &config)
    }

    /// Full outcome of processing `input`. A miss is reported in the result,
    /// never as an error.
    ///
    /// # Errors
    ///
    /// Returns [`PurifyError::InvalidArgument`] if `input` is empty.
    pub fn process_detailed<S: AsRef<str>>(
        &self,
        input: &str,
        candidates: &[S],
        config: &ProcessConfig,
    ) -> Result<ProcessResult> {
        if input.is_empty() {
            return Err(PurifyError::invalid_argument("input must be a non-empty string"));
        }

        let sanitized = self.normalize(input, &config.output);
        if candidates.is_empty() {
            return Ok(ProcessResult::unchecked(input, sanitized));
        }

        let matched_with = find_match_with(self, input, candidates, &config.matching);
        Ok(ProcessResult {
            sanitized,
            matched: matched_with.is_some(),
            original: input.to_string(),
            matched_with: matched_with.map(str::to_string),
        })
    }

    /// [`process`](Self::process) over every input, preserving order.
    ///
    /// # Errors
    ///
    /// Stops at the first input that fails and returns its error.
    pub fn process_batch<I, S>(
        &self,
        inputs: &[I],
        candidates: &[S],
        config: &ProcessConfig,
    ) -> Result<Vec<Option<String>>>
    where
        I: AsRef<str>,
        S: AsRef<str>,
    {
        inputs
            .iter()
            .map(|input| self.process(input.as_ref(), candidates, config))
            .collect()
    }

    /// [`process_detailed`](Self::process_detailed) over every input,
    /// preserving order.
    ///
    /// # Errors
    ///
    /// Stops at the first empty input.
    pub fn process_batch_detailed<I, S>(
        &self,
        inputs: &[I],
        candidates: &[S],
        config: &ProcessConfig,
    ) -> Result<Vec<ProcessResult>>
    where
        I: AsRef<str>,
        S: AsRef<str>,
    {
        inputs
            .iter()
            .map(|input| self.process_detailed(input.as_ref(), candidates, config))
            .collect()
    }
}

impl Normalize for Processor {
    fn normalize(&self, input: &str, config: &SanitizeConfig) -> String {
        match &self.cache {
            Some(cache) => cache.sanitize(input, config),
            None => sanitize(input, config),
        }
    }
}
