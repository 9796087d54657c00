//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handlers write the account blob; query handlers only read it.

pub mod handlers;

pub use handlers::{
    // Profile handlers
    LoadActiveProfileHandler, ProfileStoreError, UpsertProfileCommand, UpsertProfileHandler,
    UpsertProfileResult, DEFAULT_ACCOUNT_KEY,
    // Valuation handlers
    CardSummariesView, GetCardSummariesHandler, GetCardSummariesQuery,
};
