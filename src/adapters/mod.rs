//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `storage` - Blob storage (in-memory, filesystem)
//! - `catalog` - Catalog loading from JSON/YAML files
//! - `clock` - System and fixed clocks

pub mod catalog;
pub mod clock;
pub mod storage;

pub use catalog::{CatalogFormat, FileCatalogSource};
pub use clock::{FixedClock, SystemClock};
pub use storage::{FileBlobStorage, InMemoryBlobStorage};
