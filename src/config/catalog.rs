//! Catalog configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Location of the card catalog
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    /// JSON or YAML file, chosen by extension
    #[serde(default = "default_catalog_path")]
    pub path: PathBuf,
}

impl CatalogConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.path.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("catalog.path"));
        }
        Ok(())
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: default_catalog_path(),
        }
    }
}

fn default_catalog_path() -> PathBuf {
    PathBuf::from("./catalog.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_config_defaults() {
        let config = CatalogConfig::default();
        assert_eq!(config.path, PathBuf::from("./catalog.json"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_path_rejected() {
        let config = CatalogConfig {
            path: PathBuf::new(),
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::MissingRequired("catalog.path"))
        );
    }
}
