//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (timestamps, cent math, errors)
//! - `catalog` - Immutable card, credit, and benefit definitions
//! - `valuation` - User overrides, value resolution, classification, and net worth

pub mod catalog;
pub mod foundation;
pub mod valuation;
