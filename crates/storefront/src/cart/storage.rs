//! Durable key-value storage for cart state.
//!
//! The cart persists as a string value under a single key. [`FileStorage`]
//! keeps one file per key under a data directory; [`MemoryStorage`] backs
//! tests and ephemeral sessions. A missing key always reads as `None`.

use std::collections::HashMap;
use std::io;
use std::path::PathBuf;

/// Errors raised by a storage backend.
#[derive(thiserror::Error, Debug)]
pub enum StorageError {
    /// Reading a stored value failed.
    #[error("failed to read {path}: {source}")]
    Read {
        /// Path of the value that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
    /// Writing a value failed.
    #[error("failed to write {path}: {source}")]
    Write {
        /// Path of the value that could not be written.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
}

/// Synchronous key-value storage scoped to one storefront session.
pub trait CartStorage {
    /// Read the value stored under `key`, or `None` if absent.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`, replacing any previous value.
    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-memory storage; state dies with the process.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    /// Create an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a stored value directly.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl CartStorage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// File-backed storage: one `<key>.json` file per key under a directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Open a storage directory, creating it if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir).map_err(|source| StorageError::Write {
            path: dir.clone(),
            source,
        })?;
        Ok(Self { dir })
    }

    /// Path of the file backing `key`.
    #[must_use]
    pub fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl CartStorage for FileStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.key_path(key);
        match std::fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Read { path, source }),
        }
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.key_path(key);
        std::fs::write(&path, value).map_err(|source| StorageError::Write { path, source })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_missing_key_reads_none() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.read("cart").unwrap(), None);
    }

    #[test]
    fn test_memory_write_then_read() {
        let mut storage = MemoryStorage::new();
        storage.write("cart", "[]").unwrap();
        assert_eq!(storage.read("cart").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_file_missing_key_reads_none() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::open(dir.path()).unwrap();
        assert_eq!(storage.read("cart").unwrap(), None);
    }

    #[test]
    fn test_file_write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = FileStorage::open(dir.path()).unwrap();
        storage.write("cart", "[{\"name\":\"x\"}]").unwrap();
        assert_eq!(
            storage.read("cart").unwrap().as_deref(),
            Some("[{\"name\":\"x\"}]")
        );
        assert!(storage.key_path("cart").exists());
    }

    #[test]
    fn test_file_open_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("data").join("store");
        let storage = FileStorage::open(&nested).unwrap();
        assert!(nested.is_dir());
        assert_eq!(storage.read("cart").unwrap(), None);
    }

    #[test]
    fn test_file_write_replaces_previous_value() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = FileStorage::open(dir.path()).unwrap();
        storage.write("cart", "old").unwrap();
        storage.write("cart", "new").unwrap();
        assert_eq!(storage.read("cart").unwrap().as_deref(), Some("new"));
    }
}
