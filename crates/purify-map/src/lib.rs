//! Candidate matching for sanitized identifiers.
//!
//! - **Matching** (`matcher`): strict (raw, ordinal) or normalized (both
//!   sides sanitized with a comparison profile) membership checks, single and
//!   batch
//! - **Distance** (`distance`): bounded Levenshtein distance and ranked
//!   near-miss suggestions using Jaro-Winkler similarity as a tie-breaker
//!
//! # Example
//!
//! ```
//! use purify_map::{find_match, match_batch};
//! use purify_model::MatchConfig;
//!
//! let accepted = ["ORANGECAT", "BLACKCAT"];
//! let config = MatchConfig::normalized();
//!
//! assert_eq!(find_match("orange cat", &accepted, &config), Some("ORANGECAT"));
//! assert_eq!(match_batch(&["black-cat", "dog"], &accepted, &config), vec![true, false]);
//! ```

pub mod distance;
pub mod matcher;

pub use distance::{
    MAX_DISTANCE_INPUT_LEN, NearMatch, closest_candidates, closest_candidates_with, levenshtein,
    levenshtein_str,
};
pub use matcher::{
    find_match, find_match_with, match_batch, match_batch_with, match_value, match_value_with,
};
