//! Shared model for the purify crates.
//!
//! - **Options** (`options`): sanitize, match, and process configuration
//! - **Result** (`result`): the detailed per-input outcome
//! - **Error** (`error`): the unified error type built with `thiserror`

pub mod error;
pub mod options;
pub mod result;

pub use error::{DEFAULT_NO_MATCH_MESSAGE, PurifyError, Result};
pub use options::{MatchConfig, ProcessConfig, SanitizeConfig, SanitizeOverrides};
pub use result::ProcessResult;
