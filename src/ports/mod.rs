//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `BlobStorage` - Keyed text slot holding the persisted account
//! - `Clock` - Current time for profile timestamps
//! - `CatalogSource` - Card catalog loading

mod blob_storage;
mod catalog_source;
mod clock;

pub use blob_storage::{BlobStorage, BlobStorageError};
pub use catalog_source::{CatalogError, CatalogSource};
pub use clock::Clock;
