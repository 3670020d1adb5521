//! Cache Entry Module
//!
//! Defines the serialized form of one cached record.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

// == Cache Entry ==
/// A cached payload together with the city-name key and the time it was stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheEntry<T> {
    /// Trimmed city name the entry belongs to
    pub key: String,
    /// The stored payload
    pub payload: T,
    /// When the payload was stored
    pub stored_at: DateTime<Utc>,
}

impl<T> CacheEntry<T> {
    // == Constructor ==
    pub fn new(key: impl Into<String>, payload: T, stored_at: DateTime<Utc>) -> Self {
        Self {
            key: key.into(),
            payload,
            stored_at,
        }
    }

    // == Age ==
    /// Time elapsed since the entry was stored, as seen at `now`.
    ///
    /// Negative when `stored_at` lies in the future of `now`.
    pub fn age(&self, now: DateTime<Utc>) -> Duration {
        now - self.stored_at
    }

    // == Is Stale ==
    /// Checks if the entry has outlived `window`.
    ///
    /// Boundary condition: an entry whose age equals the window is already
    /// stale.
    pub fn is_stale(&self, now: DateTime<Utc>, window: Duration) -> bool {
        self.age(now) >= window
    }
}
