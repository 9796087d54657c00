//! Blob Storage Port - Key-value slot holding persisted text blobs.
//!
//! The profile store keeps the whole user account in one slot. Adapters
//! decide where the slot lives (memory, disk).

use thiserror::Error;

/// Errors that can occur during blob storage operations
#[derive(Debug, Error)]
pub enum BlobStorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("Storage lock poisoned")]
    Poisoned,
}

/// Port for reading and writing a text blob by key
pub trait BlobStorage: Send + Sync {
    /// Read the blob stored under `key`
    ///
    /// # Returns
    /// `None` if nothing is stored under the key
    fn read(&self, key: &str) -> Result<Option<String>, BlobStorageError>;

    /// Replace the blob stored under `key`
    fn write(&self, key: &str, value: &str) -> Result<(), BlobStorageError>;

    /// Remove the blob stored under `key`; removing a missing key is not an error
    fn remove(&self, key: &str) -> Result<(), BlobStorageError>;
}
