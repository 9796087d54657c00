//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, cent arithmetic, and error types
//! that form the vocabulary of the valuation domain.

mod errors;
mod money;
mod timestamp;

pub use errors::{ErrorCode, ValidationError};
pub use money::{format_cents, round_half_up, scale_cents};
pub use timestamp::Timestamp;
