//! Card Valuation - Credit-card benefit valuation engine
//!
//! Computes what each card's credits and perks are worth to a user, given a
//! static catalog and the user's own overrides, and persists those overrides
//! as named profiles in a single encoded blob.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
