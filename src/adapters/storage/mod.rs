//! Storage Adapters
//!
//! Implementations of the BlobStorage port for persisting the user account.
//!
//! ## Available Adapters
//!
//! - **FileBlobStorage** - Stores each blob as a file on disk
//! - **InMemoryBlobStorage** - Stores blobs in memory (testing/development)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{FileBlobStorage, InMemoryBlobStorage};
//!
//! // Production: file-based storage
//! let storage = FileBlobStorage::new("./data");
//!
//! // Testing: in-memory storage
//! let storage = InMemoryBlobStorage::new();
//! ```

mod file_blob_storage;
mod in_memory_blob_storage;

pub use file_blob_storage::FileBlobStorage;
pub use in_memory_blob_storage::InMemoryBlobStorage;
