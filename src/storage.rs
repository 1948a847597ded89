//! Storage substrate for the ledger
//!
//! The ledger persists through a minimal key-value surface: get a string,
//! set a string. [`FileStorage`] is the durable implementation;
//! [`MemoryStorage`] backs tests and ephemeral use.

use crate::error::Result;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Key-value persistence surface
pub trait Storage {
    /// Read the value stored under `key`, if any
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// File-backed storage: each key lives in `<dir>/<key>.json`
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Open a storage directory, creating it if needed
    pub fn open<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(&path)?))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        fs::write(self.key_path(key), value)?;
        Ok(())
    }
}

/// In-memory storage for tests and ephemeral ledgers
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_file_storage_get_absent_key() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::open(dir.path()).unwrap();
        assert_eq!(storage.get("missing").unwrap(), None);
    }

    #[test]
    fn test_file_storage_set_then_get() {
        let dir = tempdir().unwrap();
        let mut storage = FileStorage::open(dir.path()).unwrap();
        storage.set("clef", "valeur").unwrap();
        assert_eq!(storage.get("clef").unwrap().as_deref(), Some("valeur"));
    }

    #[test]
    fn test_file_storage_set_replaces_previous_value() {
        let dir = tempdir().unwrap();
        let mut storage = FileStorage::open(dir.path()).unwrap();
        storage.set("clef", "un").unwrap();
        storage.set("clef", "deux").unwrap();
        assert_eq!(storage.get("clef").unwrap().as_deref(), Some("deux"));
    }

    #[test]
    fn test_file_storage_creates_missing_directory() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        let storage = FileStorage::open(&nested).unwrap();
        assert!(nested.is_dir());
        assert_eq!(storage.get("x").unwrap(), None);
    }

    #[test]
    fn test_memory_storage_round_trip() {
        let mut storage = MemoryStorage::new();
        assert_eq!(storage.get("k").unwrap(), None);
        storage.set("k", "v").unwrap();
        assert_eq!(storage.get("k").unwrap().as_deref(), Some("v"));
        storage.set("k", "w").unwrap();
        assert_eq!(storage.get("k").unwrap().as_deref(), Some("w"));
    }
}
