//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `CARD_VALUATION` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use card_valuation::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Catalog at {}", config.catalog.path.display());
//! ```

mod catalog;
mod error;
mod logging;
mod storage;

pub use catalog::CatalogConfig;
pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;
pub use storage::{StorageBackend, StorageConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a usable config.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Account blob storage (backend, directory, key)
    #[serde(default)]
    pub storage: StorageConfig,

    /// Card catalog location
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Log level and format
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `CARD_VALUATION` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `CARD_VALUATION__STORAGE__BACKEND=memory` -> `storage.backend = memory`
    /// - `CARD_VALUATION__CATALOG__PATH=cards.yaml` -> `catalog.path = cards.yaml`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("CARD_VALUATION")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for empty keys or paths and unknown log levels.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.storage.validate()?;
        self.catalog.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}
