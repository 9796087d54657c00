//! Card records and the catalog aggregate.

use serde::{Deserialize, Serialize};

use super::{Credit, OtherBenefit};

/// A credit card with its annual fee, credits, and benefits.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreditCard {
    pub card_id: String,
    pub name: String,
    pub annual_fee_cents: i64,
    pub credits: Vec<Credit>,
    pub other_benefits: Vec<OtherBenefit>,
}

impl CreditCard {
    pub fn new(card_id: impl Into<String>, annual_fee_cents: i64) -> Self {
        Self {
            card_id: card_id.into(),
            annual_fee_cents,
            ..Default::default()
        }
    }

    pub fn with_credit(mut self, credit: Credit) -> Self {
        self.credits.push(credit);
        self
    }

    pub fn with_benefit(mut self, benefit: OtherBenefit) -> Self {
        self.other_benefits.push(benefit);
        self
    }

    /// Name for display, falling back to the card id.
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            &self.card_id
        } else {
            &self.name
        }
    }
}

/// The full card catalog, loaded once and treated as read-only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreditCardDatabase {
    pub cards: Vec<CreditCard>,
}

impl CreditCardDatabase {
    pub fn new(cards: Vec<CreditCard>) -> Self {
        Self { cards }
    }

    /// Looks up a card by id.
    pub fn card(&self, card_id: &str) -> Option<&CreditCard> {
        self.cards.iter().find(|c| c.card_id == card_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CreditCard> {
        self.cards.iter()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
