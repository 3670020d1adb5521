//! In-memory store, used by tests and as a fallback when no file is usable.

use std::collections::HashMap;

use crate::error::StorageError;
use crate::storage::KeyValueStore;

#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_write_read() {
        let mut store = MemoryStore::new();
        store.write("a", "1").unwrap();
        assert_eq!(store.read("a").as_deref(), Some("1"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_memory_store_overwrite() {
        let mut store = MemoryStore::new();
        store.write("a", "1").unwrap();
        store.write("a", "2").unwrap();
        assert_eq!(store.read("a").as_deref(), Some("2"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_memory_store_remove_missing_is_ok() {
        let mut store = MemoryStore::new();
        assert!(store.remove("missing").is_ok());
        assert!(store.is_empty());
    }
}
