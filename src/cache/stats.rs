//! Cache Statistics Module
//!
//! Tracks cache effectiveness: hits, misses, and why entries were evicted.

use serde::Serialize;

// == Cache Stats ==
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    /// Reads answered from the cache
    pub hits: u64,
    /// Reads that found nothing usable (absent, stale, or corrupt)
    pub misses: u64,
    /// Entries removed because they outlived the expiration window
    pub stale_evictions: u64,
    /// Entries removed because their blob could not be parsed
    pub corrupt_evictions: u64,
    /// Successful writes
    pub writes: u64,
    /// Writes or removals the backing store rejected
    pub storage_failures: u64,
}

impl CacheStats {
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// Returns hits / (hits + misses), or 0.0 if nothing has been read.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    pub fn record_stale(&mut self) {
        self.stale_evictions += 1;
        self.misses += 1;
    }

    pub fn record_corrupt(&mut self) {
        self.corrupt_evictions += 1;
        self.misses += 1;
    }

    pub fn record_write(&mut self) {
        self.writes += 1;
    }

    pub fn record_storage_failure(&mut self) {
        self.storage_failures += 1;
    }
}
