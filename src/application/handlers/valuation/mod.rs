//! Valuation handlers - Read-side queries over the catalog and active profile.

mod get_card_summaries;

pub use get_card_summaries::{CardSummariesView, GetCardSummariesHandler, GetCardSummariesQuery};
