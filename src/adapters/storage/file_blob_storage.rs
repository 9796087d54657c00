//! File-based Blob Storage Adapter
//!
//! Stores each blob as a file named after its key under a base directory.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::ports::{BlobStorage, BlobStorageError};

/// File-based storage for text blobs
#[derive(Debug, Clone)]
pub struct FileBlobStorage {
    base_path: PathBuf,
}

impl FileBlobStorage {
    /// Create a new file storage with a base directory
    ///
    /// # Example
    /// ```ignore
    /// let storage = FileBlobStorage::new("./data");
    /// ```
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    /// Get the file path for a key
    ///
    /// Keys are restricted to a single safe path component.
    fn blob_path(&self, key: &str) -> Result<PathBuf, BlobStorageError> {
        let valid = !key.is_empty()
            && key != "."
            && key != ".."
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
        if !valid {
            return Err(BlobStorageError::InvalidKey(key.to_string()));
        }
        Ok(self.base_path.join(format!("{}.blob", key)))
    }
}

impl BlobStorage for FileBlobStorage {
    fn read(&self, key: &str) -> Result<Option<String>, BlobStorageError> {
        let path = self.blob_path(key)?;
        match fs::read(&path) {
            Ok(bytes) => {
                tracing::debug!("Read blob {} from {}", key, path.display());
                // Non-UTF-8 bytes are handed on lossily so decoding rejects them
                Ok(Some(String::from_utf8_lossy(&bytes).into_owned()))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), BlobStorageError> {
        let path = self.blob_path(key)?;
        fs::create_dir_all(&self.base_path)?;

        // Write to a sibling temp file, then rename over the target
        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, value)?;
        fs::rename(&temp_path, &path)?;

        tracing::debug!("Wrote blob {} to {}", key, path.display());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), BlobStorageError> {
        let path = self.blob_path(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_storage_write_and_read() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileBlobStorage::new(temp_dir.path());

        storage.write("account", "blob").unwrap();

        assert_eq!(storage.read("account").unwrap(), Some("blob".to_string()));
        assert!(temp_dir.path().join("account.blob").exists());
        assert!(!temp_dir.path().join("account.tmp").exists());
    }

    #[test]
    fn test_file_storage_read_missing_key() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileBlobStorage::new(temp_dir.path());

        assert_eq!(storage.read("account").unwrap(), None);
    }

    #[test]
    fn test_file_storage_creates_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileBlobStorage::new(temp_dir.path().join("nested").join("data"));

        storage.write("account", "blob").unwrap();

        assert_eq!(storage.read("account").unwrap(), Some("blob".to_string()));
    }

    #[test]
    fn test_file_storage_reads_non_utf8_bytes_lossily() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileBlobStorage::new(temp_dir.path());
        fs::write(temp_dir.path().join("account.blob"), [0xffu8, 0xfe, 0x00]).unwrap();

        let contents = storage.read("account").unwrap().unwrap();

        assert!(contents.contains('\u{FFFD}'));
    }

    #[test]
    fn test_file_storage_remove() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileBlobStorage::new(temp_dir.path());

        storage.write("account", "blob").unwrap();
        storage.remove("account").unwrap();
        storage.remove("account").unwrap();

        assert_eq!(storage.read("account").unwrap(), None);
    }

    #[test]
    fn test_file_storage_rejects_path_keys() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileBlobStorage::new(temp_dir.path());

        assert!(matches!(
            storage.write("../escape", "x"),
            Err(BlobStorageError::InvalidKey(_))
        ));
        assert!(matches!(
            storage.read(""),
            Err(BlobStorageError::InvalidKey(_))
        ));
    }
}
