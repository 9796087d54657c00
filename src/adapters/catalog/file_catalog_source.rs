//! File-based Catalog Source
//!
//! Reads the card catalog from a JSON or YAML file.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::catalog::CreditCardDatabase;
use crate::ports::{CatalogError, CatalogSource};

/// Serialization format of a catalog file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Json,
    Yaml,
}

impl CatalogFormat {
    /// Guess the format from a file extension; anything but `.yaml`/`.yml` is JSON
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("yaml") | Some("yml") => CatalogFormat::Yaml,
            _ => CatalogFormat::Json,
        }
    }

    /// Decode a catalog buffer in this format
    pub fn decode(&self, bytes: &[u8]) -> Result<CreditCardDatabase, CatalogError> {
        match self {
            CatalogFormat::Json => Ok(serde_json::from_slice(bytes)?),
            CatalogFormat::Yaml => Ok(serde_yaml::from_slice(bytes)?),
        }
    }
}

/// Catalog source backed by a file on disk
#[derive(Debug, Clone)]
pub struct FileCatalogSource {
    path: PathBuf,
}

impl FileCatalogSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogSource for FileCatalogSource {
    fn load(&self) -> Result<CreditCardDatabase, CatalogError> {
        let bytes = fs::read(&self.path)?;
        let catalog = CatalogFormat::from_path(&self.path).decode(&bytes)?;
        tracing::debug!(
            "Loaded {} cards from {}",
            catalog.len(),
            self.path.display()
        );
        Ok(catalog)
    }
}
