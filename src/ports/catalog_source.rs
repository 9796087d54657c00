//! Catalog Source Port - Loads the card catalog.
//!
//! The engine receives the catalog already decoded and treats it as
//! trusted and immutable.

use thiserror::Error;

use crate::domain::catalog::CreditCardDatabase;

/// Errors that can occur while loading the catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON catalog: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid YAML catalog: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Port for loading the card catalog
pub trait CatalogSource: Send + Sync {
    fn load(&self) -> Result<CreditCardDatabase, CatalogError>;
}
