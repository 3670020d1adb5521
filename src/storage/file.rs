//! File Store Module
//!
//! Persists all keys of one scope as a single JSON object on disk, loaded once
//! at open and rewritten after every mutation.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::error::StorageError;
use crate::storage::KeyValueStore;

// == File Store ==
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    // == Open ==
    /// Opens the store at `path`.
    ///
    /// A missing file starts an empty store. An unreadable or malformed file
    /// is logged and replaced on the next write.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                warn!("Discarding malformed store file {}: {}", path.display(), e);
                BTreeMap::new()
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                warn!("Could not read store file {}: {}", path.display(), e);
                BTreeMap::new()
            }
        };

        Self { path, entries }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Puts the in-memory map back the way it was before a failed flush, so
    /// it never holds anything the file does not.
    fn restore(&mut self, key: &str, previous: Option<String>) {
        match previous {
            Some(value) => self.entries.insert(key.to_string(), value),
            None => self.entries.remove(key),
        };
    }

    // == Flush ==
    fn flush(&self) -> Result<(), StorageError> {
        let raw = serde_json::to_string_pretty(&self.entries)?;
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let previous = self.entries.insert(key.to_string(), value.to_string());
        if let Err(e) = self.flush() {
            self.restore(key, previous);
            return Err(e);
        }
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        let Some(previous) = self.entries.remove(key) else {
            return Ok(());
        };
        if let Err(e) = self.flush() {
            self.restore(key, Some(previous));
            return Err(e);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_store_persists_across_open() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("store.json");

        let mut store = FileStore::open(&path);
        store.write("weather:Paris", "{}").unwrap();
        drop(store);

        let reopened = FileStore::open(&path);
        assert_eq!(reopened.read("weather:Paris").as_deref(), Some("{}"));
    }

    #[test]
    fn test_file_store_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::open(dir.path().join("absent.json"));
        assert!(store.read("anything").is_none());
    }

    #[test]
    fn test_file_store_malformed_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("store.json");
        fs::write(&path, "not json at all").unwrap();

        let mut store = FileStore::open(&path);
        assert!(store.read("weather:Paris").is_none());

        store.write("k", "v").unwrap();
        assert_eq!(FileStore::open(&path).read("k").as_deref(), Some("v"));
    }

    #[test]
    fn test_file_store_failed_write_is_rolled_back() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "").unwrap();

        let mut store = FileStore::open(blocker.join("store.json"));
        assert!(store.write("weather:Paris", "{}").is_err());
        assert!(store.read("weather:Paris").is_none());
    }

    #[test]
    fn test_file_store_failed_remove_keeps_value() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("store.json");
        let mut store = FileStore::open(&path);
        store.write("k", "v").unwrap();

        // A directory in place of the file makes the next flush fail
        fs::remove_file(&path).unwrap();
        fs::create_dir(&path).unwrap();

        assert!(store.remove("k").is_err());
        assert_eq!(store.read("k").as_deref(), Some("v"));
    }

    #[test]
    fn test_file_store_remove() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("store.json");

        let mut store = FileStore::open(&path);
        store.write("k", "v").unwrap();
        store.remove("k").unwrap();

        assert!(FileStore::open(&path).read("k").is_none());
        assert_eq!(store.path(), path.as_path());
    }
}
