//! Cache Module
//!
//! Time-bounded local cache of weather records keyed by city name, with lazy
//! expiration on read.

mod clock;
mod entry;
mod stats;
mod store;


// Re-export public types
pub use clock::{Clock, ManualClock, SystemClock};
pub use entry::CacheEntry;
pub use stats::CacheStats;
pub use store::ExpiringCache;

// == Public Constants ==
/// Default expiration window in seconds (30 minutes)
pub const DEFAULT_EXPIRATION_SECS: i64 = 30 * 60;

/// Prefix of every cache key in the backing store
pub const KEY_PREFIX: &str = "weather:";
