//! Outcome of a single process call.

use serde::{Deserialize, Serialize};

use crate::error::{PurifyError, Result};
use crate::options::ProcessConfig;

/// Detailed outcome of processing one input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessResult {
    /// Input sanitized with the output profile.
    pub sanitized: String,
    /// Whether a candidate matched. Always true when no candidates were given.
    pub matched: bool,
    /// The input exactly as supplied.
    pub original: String,
    /// The candidate that matched, as supplied by the caller (not sanitized).
    pub matched_with: Option<String>,
}

impl ProcessResult {
    /// Result for an input processed without a candidate set.
    pub fn unchecked(original: impl Into<String>, sanitized: String) -> Self {
        Self {
            sanitized,
            matched: true,
            original: original.into(),
            matched_with: None,
        }
    }

    /// Apply the no-match policy of `config`.
    ///
    /// A match yields the sanitized string. A miss yields the configured
    /// [`PurifyError::NoMatch`] when `throw_on_no_match` is set, otherwise
    /// `None`.
    pub fn into_output(self, config: &ProcessConfig) -> Result<Option<String>> {
        if self.matched {
            Ok(Some(self.sanitized))
        } else if config.throw_on_no_match {
            Err(PurifyError::no_match(config))
        } else {
            Ok(None)
        }
    }
}
