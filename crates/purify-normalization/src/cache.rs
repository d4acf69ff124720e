//! Memoized sanitization.
//!
//! [`SanitizeCache`] stores sanitized strings keyed by the raw input and the
//! config that produced them. Entries are never evicted one by one: once the
//! cache holds `capacity` entries, further results are computed and returned
//! but not stored, until [`SanitizeCache::clear`] empties it.

use std::collections::HashMap;
use std::sync::{OnceLock, RwLock};

use purify_model::SanitizeConfig;
use tracing::{debug, warn};

use crate::sanitize::{Normalize, sanitize};

/// Default number of entries a cache holds before it stops storing results.
pub const DEFAULT_CACHE_CAPACITY: usize = 10_000;

type CacheKey = (String, SanitizeConfig);

/// Thread-safe memoization table for [`sanitize`].
#[derive(Debug)]
pub struct SanitizeCache {
    entries: RwLock<HashMap<CacheKey, String>>,
    capacity: usize,
}

impl Default for SanitizeCache {
    fn default() -> Self {
        Self::new()
    }
}

impl SanitizeCache {
    /// Create an empty cache with [`DEFAULT_CACHE_CAPACITY`].
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CACHE_CAPACITY)
    }

    /// Create an empty cache that stores at most `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            capacity,
        }
    }

    /// Sanitize through the cache. Same output as [`sanitize`], including
    /// for absent input.
    pub fn sanitize<'a>(
        &self,
        input: impl Into<Option<&'a str>>,
        config: &SanitizeConfig,
    ) -> String {
        let Some(input) = input.into().filter(|text| !text.is_empty()) else {
            return String::new();
        };

        let key = (input.to_string(), *config);
        match self.entries.read() {
            Ok(entries) => {
                if let Some(hit) = entries.get(&key) {
                    return hit.clone();
                }
            }
            Err(_) => {
                warn!("sanitize cache lock poisoned; bypassing cache");
                return sanitize(input, config);
            }
        }

        let value = sanitize(input, config);
        if let Ok(mut entries) = self.entries.write() {
            if entries.len() < self.capacity {
                entries.insert(key, value.clone());
            } else if !entries.contains_key(&key) {
                debug!(capacity = self.capacity, "sanitize cache full; result not stored");
            }
        }
        value
    }

    /// Remove every entry.
    pub fn clear(&self) {
        if let Ok(mut entries) = self.entries.write() {
            debug!(entries = entries.len(), "clearing sanitize cache");
            entries.clear();
        }
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.read().map(|e| e.len()).unwrap_or(0)
    }

    /// Check if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Maximum number of stored entries.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Process-wide cache backing [`memoized_sanitize`] and [`clear_cache`].
    pub fn global() -> &'static SanitizeCache {
        static GLOBAL_CACHE: OnceLock<SanitizeCache> = OnceLock::new();
        GLOBAL_CACHE.get_or_init(SanitizeCache::new)
    }
}

impl Normalize for SanitizeCache {
    fn normalize(&self, input: &str, config: &SanitizeConfig) -> String {
        self.sanitize(input, config)
    }
}

/// Sanitize through the process-wide cache.
pub fn memoized_sanitize<'a>(
    input: impl Into<Option<&'a str>>,
    config: &SanitizeConfig,
) -> String {
    SanitizeCache::global().sanitize(input, config)
}

/// Empty the process-wide cache.
pub fn clear_cache() {
    SanitizeCache::global().clear();
}
