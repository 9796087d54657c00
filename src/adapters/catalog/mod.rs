//! Catalog Adapters
//!
//! Implementations of the CatalogSource port.

mod file_catalog_source;

pub use file_catalog_source::{CatalogFormat, FileCatalogSource};
