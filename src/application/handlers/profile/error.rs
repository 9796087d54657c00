//! Errors surfaced by the profile store.

use thiserror::Error;

use crate::domain::foundation::{ErrorCode, ValidationError};
use crate::domain::valuation::CodecError;
use crate::ports::BlobStorageError;

/// Errors that can occur while saving a profile
#[derive(Debug, Error)]
pub enum ProfileStoreError {
    #[error("Invalid profile: {0}")]
    Validation(#[from] ValidationError),

    #[error("Stored account could not be decoded: {0}")]
    Decode(#[source] CodecError),

    #[error("Account could not be encoded: {0}")]
    Encode(#[source] CodecError),

    #[error("Storage failure: {0}")]
    Storage(#[from] BlobStorageError),
}

impl ProfileStoreError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ProfileStoreError::Validation(e) => ErrorCode::from(e),
            ProfileStoreError::Decode(_) => ErrorCode::DecodeFailed,
            ProfileStoreError::Encode(_) => ErrorCode::EncodeFailed,
            ProfileStoreError::Storage(_) => ErrorCode::StorageError,
        }
    }
}
