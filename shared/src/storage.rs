//! Durable storage for the item list
//!
//! Storage holds a single record: the latest snapshot, overwritten on every
//! change.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::config::data_dir;

/// Key of the item list record
pub const DEFAULT_STORAGE_KEY: &str = "wheel_items";

/// Error type for storage operations
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("could not determine data directory")]
    NoDataDir,
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// A single-record key-value store
pub trait ItemStorage {
    /// Read the record, `None` if nothing was ever written
    fn read(&self) -> Result<Option<String>, StorageError>;

    /// Replace the record
    fn write(&mut self, contents: &str) -> Result<(), StorageError>;
}

/// Record kept as `<key>.json` on disk
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    /// Storage under the platform data directory
    pub fn open(key: &str) -> Result<Self, StorageError> {
        let dir = data_dir().ok_or(StorageError::NoDataDir)?;
        Ok(Self::in_dir(&dir, key))
    }

    pub fn in_dir(dir: &Path, key: &str) -> Self {
        Self {
            path: dir.join(format!("{}.json", key)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ItemStorage for FileStorage {
    fn read(&self) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&mut self, contents: &str) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, contents)?;
        Ok(())
    }
}

/// In-memory record, counts writes
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    record: Option<String>,
    writes: usize,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_record(record: &str) -> Self {
        Self {
            record: Some(record.to_string()),
            writes: 0,
        }
    }

    pub fn record(&self) -> Option<&str> {
        self.record.as_deref()
    }

    pub fn write_count(&self) -> usize {
        self.writes
    }
}

impl ItemStorage for MemoryStorage {
    fn read(&self) -> Result<Option<String>, StorageError> {
        Ok(self.record.clone())
    }

    fn write(&mut self, contents: &str) -> Result<(), StorageError> {
        self.record = Some(contents.to_string());
        self.writes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "picker-wheel-storage-{}-{}",
            name,
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_memory_storage() {
        let mut storage = MemoryStorage::new();
        assert_eq!(storage.read().unwrap(), None);
        storage.write("[\"A\"]").unwrap();
        storage.write("[\"B\"]").unwrap();
        assert_eq!(storage.record(), Some("[\"B\"]"));
        assert_eq!(storage.write_count(), 2);
    }

    #[test]
    fn test_file_storage_missing_record() {
        let dir = scratch_dir("missing");
        let storage = FileStorage::in_dir(&dir, DEFAULT_STORAGE_KEY);
        assert_eq!(storage.read().unwrap(), None);
    }

    #[test]
    fn test_file_storage_overwrites() {
        let dir = scratch_dir("overwrite");
        let mut storage = FileStorage::in_dir(&dir, DEFAULT_STORAGE_KEY);
        assert!(storage.path().ends_with("wheel_items.json"));

        storage.write("[\"A\",\"B\"]").unwrap();
        storage.write("[\"C\"]").unwrap();
        assert_eq!(storage.read().unwrap().as_deref(), Some("[\"C\"]"));

        let _ = fs::remove_dir_all(&dir);
    }
}
