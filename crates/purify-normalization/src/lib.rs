//! Text sanitization for identifier cleanup.
//!
//! This crate provides:
//! - **Sanitization** (`sanitize`): a fixed-order pipeline of pure stages
//!   driven by [`SanitizeConfig`](purify_model::SanitizeConfig)
//! - **Memoization** (`cache`): an injectable, bounded cache that returns the
//!   same output as the plain pipeline
//!
//! Both implement the [`Normalize`] trait, which is the seam used by the
//! matcher and the processor.

pub mod cache;
pub mod sanitize;

pub use cache::{DEFAULT_CACHE_CAPACITY, SanitizeCache, clear_cache, memoized_sanitize};
pub use sanitize::{Normalize, Sanitizer, sanitize};
