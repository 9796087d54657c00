//! Storage configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Where the account blob is kept
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Storage backend to use
    #[serde(default)]
    pub backend: StorageBackend,

    /// Directory holding blob files (file backend only)
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Key the account blob is stored under
    #[serde(default = "default_account_key")]
    pub account_key: String,
}

/// Available storage backends
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    Memory,
    #[default]
    File,
}

impl StorageConfig {
    /// Validate storage configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.account_key.trim().is_empty() {
            return Err(ValidationError::MissingRequired("storage.account_key"));
        }
        if self.backend == StorageBackend::File && self.data_dir.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("storage.data_dir"));
        }
        Ok(())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            data_dir: default_data_dir(),
            account_key: default_account_key(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./data")
}

fn default_account_key() -> String {
    crate::application::DEFAULT_ACCOUNT_KEY.to_string()
}
