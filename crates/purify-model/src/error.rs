//! Error types shared by every purify crate.

use thiserror::Error;

use crate::options::ProcessConfig;

/// Message used when no candidate matches and no custom message is set.
pub const DEFAULT_NO_MATCH_MESSAGE: &str = "No match found in the provided array.";

/// Errors raised by sanitization, matching, and processing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PurifyError {
    /// Required input was empty or absent.
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// What was wrong with the argument.
        message: String,
    },

    /// Candidates were supplied but none matched the input.
    #[error("{message}")]
    NoMatch {
        /// Caller-configured or default message.
        message: String,
    },

    /// An edit-distance operand exceeded the supported length.
    #[error("Input length {length} exceeds the maximum of {max}")]
    SizeLimitExceeded {
        /// Length of the offending operand.
        length: usize,
        /// Maximum supported length.
        max: usize,
    },
}

/// Result type for purify operations.
pub type Result<T> = std::result::Result<T, PurifyError>;

impl PurifyError {
    /// Create an invalid-argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create the no-match error configured by `config`.
    pub fn no_match(config: &ProcessConfig) -> Self {
        Self::NoMatch {
            message: config.no_match_message().to_string(),
        }
    }

    /// Check if this is a no-match condition.
    pub fn is_no_match(&self) -> bool {
        matches!(self, Self::NoMatch { .. })
    }

    /// Get a user-friendly suggestion for fixing this error.
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::InvalidArgument { .. } => Some("Provide a non-empty input string."),
            Self::NoMatch { .. } => Some(
                "Check the input against the accepted values, or disable strict matching to compare normalized forms.",
            ),
            Self::SizeLimitExceeded { .. } => {
                Some("Shorten the compared values before computing edit distance.")
            }
        }
    }
}
