//! GetCardSummaries - Query handler for per-card valuation summaries.

use std::sync::Arc;

use crate::domain::catalog::CreditCardDatabase;
use crate::domain::valuation::CardValuationSummary;

use super::super::profile::LoadActiveProfileHandler;

/// Query for card summaries. `None` summarizes the whole catalog.
#[derive(Debug, Clone, Default)]
pub struct GetCardSummariesQuery {
    pub card_id: Option<String>,
}

impl GetCardSummariesQuery {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn for_card(card_id: impl Into<String>) -> Self {
        Self {
            card_id: Some(card_id.into()),
        }
    }
}

/// Summaries computed against the active profile.
#[derive(Debug, Clone, PartialEq)]
pub struct CardSummariesView {
    /// Profile the user valuations came from, if any.
    pub profile_id: Option<String>,
    pub summaries: Vec<CardValuationSummary>,
}

/// Handler for building card summaries.
pub struct GetCardSummariesHandler {
    catalog: Arc<CreditCardDatabase>,
    profiles: Arc<LoadActiveProfileHandler>,
}

impl GetCardSummariesHandler {
    pub fn new(catalog: Arc<CreditCardDatabase>, profiles: Arc<LoadActiveProfileHandler>) -> Self {
        Self { catalog, profiles }
    }

    /// An unknown `card_id` yields an empty list.
    pub fn handle(&self, query: GetCardSummariesQuery) -> CardSummariesView {
        let profile = self.profiles.handle();

        let summaries = self
            .catalog
            .iter()
            .filter(|card| match &query.card_id {
                Some(id) => &card.card_id == id,
                None => true,
            })
            .map(|card| {
                let valuation = profile
                    .as_ref()
                    .and_then(|p| p.card_valuation(&card.card_id));
                CardValuationSummary::build(card, valuation)
            })
            .collect();

        CardSummariesView {
            profile_id: profile.map(|p| p.profile_id),
            summaries,
        }
    }
}
