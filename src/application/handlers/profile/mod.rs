//! Profile handlers - Persisting and loading valuation profiles.
//!
//! All profiles live in one encoded blob under a single storage key.

mod error;
mod load_active_profile;
mod upsert_profile;

pub use error::ProfileStoreError;
pub use load_active_profile::LoadActiveProfileHandler;
pub use upsert_profile::{UpsertProfileCommand, UpsertProfileHandler, UpsertProfileResult};

/// Storage key the account blob is kept under unless configured otherwise.
pub const DEFAULT_ACCOUNT_KEY: &str = "card-valuation.user-account";
