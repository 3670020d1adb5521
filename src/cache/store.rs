//! Expiring Cache Module
//!
//! Cache engine over a [`KeyValueStore`]: each entry is a JSON blob holding
//! the payload and the time it was stored. Staleness is only discovered when
//! an entry is read; there is no background sweep and no capacity bound.

use std::marker::PhantomData;

use chrono::Duration;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::cache::{CacheEntry, CacheStats, Clock, SystemClock, KEY_PREFIX};
use crate::storage::KeyValueStore;

// == Expiring Cache ==
/// Time-bounded cache keyed by trimmed city name.
///
/// Every failure of the backing store or of a stored blob is absorbed here:
/// reads degrade to a miss and writes are logged and dropped.
#[derive(Debug)]
pub struct ExpiringCache<T, S, C = SystemClock> {
    store: S,
    clock: C,
    window: Duration,
    stats: CacheStats,
    _payload: PhantomData<fn() -> T>,
}

impl<T, S, C> ExpiringCache<T, S, C>
where
    T: Serialize + DeserializeOwned,
    S: KeyValueStore,
    C: Clock,
{
    // == Constructor ==
    /// Creates a cache over `store` whose entries expire after `window`.
    pub fn new(store: S, clock: C, window: Duration) -> Self {
        Self {
            store,
            clock,
            window,
            stats: CacheStats::new(),
            _payload: PhantomData,
        }
    }

    // == Get ==
    /// Returns the payload cached for `key` if it is still fresh.
    ///
    /// A stale or unparsable entry is evicted before returning `None`, so a
    /// later read cannot resurrect it.
    pub fn get(&mut self, key: &str) -> Option<T> {
        let key = key.trim();
        let storage_key = storage_key(key);

        let Some(raw) = self.store.read(&storage_key) else {
            debug!(key, "cache miss");
            self.stats.record_miss();
            return None;
        };

        let entry = match serde_json::from_str::<CacheEntry<T>>(&raw) {
            Ok(entry) if entry.key == key => entry,
            Ok(entry) => {
                debug!(key, stored_key = %entry.key, "cache entry belongs to another key, evicting");
                self.stats.record_corrupt();
                self.evict(&storage_key);
                return None;
            }
            Err(e) => {
                debug!(key, error = %e, "corrupt cache entry, evicting");
                self.stats.record_corrupt();
                self.evict(&storage_key);
                return None;
            }
        };

        let now = self.clock.now();
        if entry.is_stale(now, self.window) {
            debug!(key, age_secs = entry.age(now).num_seconds(), "stale cache entry, evicting");
            self.stats.record_stale();
            self.evict(&storage_key);
            return None;
        }

        debug!(key, "cache hit");
        self.stats.record_hit();
        Some(entry.payload)
    }

    // == Put ==
    /// Stores `payload` under `key` stamped with the current time, replacing
    /// whatever was there.
    pub fn put(&mut self, key: &str, payload: &T) {
        let key = key.trim();
        let entry = CacheEntry::new(key, payload, self.clock.now());

        let raw = match serde_json::to_string(&entry) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(key, error = %e, "could not serialize cache entry");
                self.stats.record_storage_failure();
                return;
            }
        };

        match self.store.write(&storage_key(key), &raw) {
            Ok(()) => self.stats.record_write(),
            Err(e) => {
                warn!(key, error = %e, "could not write cache entry");
                self.stats.record_storage_failure();
            }
        }
    }

    // == Invalidate ==
    /// Drops the entry for `key`, fresh or not.
    pub fn invalidate(&mut self, key: &str) {
        self.evict(&storage_key(key.trim()));
    }

    // == Stats ==
    pub fn stats(&self) -> CacheStats {
        self.stats.clone()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn evict(&mut self, storage_key: &str) {
        if let Err(e) = self.store.remove(storage_key) {
            warn!(storage_key, error = %e, "could not evict cache entry");
            self.stats.record_storage_failure();
        }
    }
}

/// Backing-store key for a trimmed city name.
pub(crate) fn storage_key(key: &str) -> String {
    format!("{KEY_PREFIX}{key}")
}
