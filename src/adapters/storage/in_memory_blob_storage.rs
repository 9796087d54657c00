//! In-Memory Blob Storage Adapter
//!
//! Stores blobs in a process-local map.
//! Useful for testing and development.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::ports::{BlobStorage, BlobStorageError};

/// In-memory storage for text blobs
#[derive(Debug, Clone, Default)]
pub struct InMemoryBlobStorage {
    blobs: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryBlobStorage {
    /// Create a new, empty in-memory storage
    pub fn new() -> Self {
        Self::default()
    }

    /// Create storage pre-seeded with one blob (useful for tests)
    pub fn with_blob(key: impl Into<String>, value: impl Into<String>) -> Self {
        let storage = Self::new();
        if let Ok(mut blobs) = storage.blobs.write() {
            blobs.insert(key.into(), value.into());
        }
        storage
    }

    /// Check whether a blob is stored under `key`
    pub fn contains(&self, key: &str) -> bool {
        self.blobs
            .read()
            .map(|blobs| blobs.contains_key(key))
            .unwrap_or(false)
    }

    /// Get the number of stored blobs
    pub fn len(&self) -> usize {
        self.blobs.read().map(|blobs| blobs.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl BlobStorage for InMemoryBlobStorage {
    fn read(&self, key: &str) -> Result<Option<String>, BlobStorageError> {
        let blobs = self.blobs.read().map_err(|_| BlobStorageError::Poisoned)?;
        Ok(blobs.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), BlobStorageError> {
        let mut blobs = self.blobs.write().map_err(|_| BlobStorageError::Poisoned)?;
        blobs.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), BlobStorageError> {
        let mut blobs = self.blobs.write().map_err(|_| BlobStorageError::Poisoned)?;
        blobs.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage_write_and_read() {
        let storage = InMemoryBlobStorage::new();

        storage.write("account", "blob").unwrap();

        assert_eq!(storage.read("account").unwrap(), Some("blob".to_string()));
        assert!(storage.contains("account"));
    }

    #[test]
    fn test_memory_storage_read_missing_key() {
        let storage = InMemoryBlobStorage::new();
        assert_eq!(storage.read("account").unwrap(), None);
        assert!(storage.is_empty());
    }

    #[test]
    fn test_memory_storage_write_overwrites() {
        let storage = InMemoryBlobStorage::with_blob("account", "old");

        storage.write("account", "new").unwrap();

        assert_eq!(storage.read("account").unwrap(), Some("new".to_string()));
        assert_eq!(storage.len(), 1);
    }

    #[test]
    fn test_memory_storage_remove() {
        let storage = InMemoryBlobStorage::with_blob("account", "blob");

        storage.remove("account").unwrap();
        storage.remove("account").unwrap();

        assert!(!storage.contains("account"));
    }

    #[test]
    fn test_memory_storage_clones_share_state() {
        let storage = InMemoryBlobStorage::new();
        let handle = storage.clone();

        handle.write("account", "shared").unwrap();

        assert!(storage.contains("account"));
    }
}
