//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod profile;
pub mod valuation;

pub use profile::{
    LoadActiveProfileHandler, ProfileStoreError, UpsertProfileCommand, UpsertProfileHandler,
    UpsertProfileResult, DEFAULT_ACCOUNT_KEY,
};
pub use valuation::{CardSummariesView, GetCardSummariesHandler, GetCardSummariesQuery};
