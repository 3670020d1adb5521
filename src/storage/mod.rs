//! Storage Module
//!
//! String-keyed persistent store capability backing the expiring cache.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::error::StorageError;

// == Key Value Store ==
/// Minimal capability of a scoped, string-keyed store.
///
/// Reads are infallible: a value that cannot be produced is simply absent.
pub trait KeyValueStore {
    /// Returns the blob stored under `key`, if any.
    fn read(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, replacing any previous blob.
    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removes `key`. Removing a missing key is not an error.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}
