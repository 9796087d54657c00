//! Named override collections and the persisted account aggregate.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::foundation::Timestamp;

use super::UserCardValuation;

/// A named collection of a user's overrides across all cards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ValuationProfile {
    pub profile_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub card_valuations: BTreeMap<String, UserCardValuation>,
    /// Fixed at the first save.
    pub created_at: Option<Timestamp>,
    /// Refreshed on every save.
    pub updated_at: Option<Timestamp>,
}

impl ValuationProfile {
    pub fn new(profile_id: impl Into<String>) -> Self {
        Self {
            profile_id: profile_id.into(),
            ..Default::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_card_valuation(
        mut self,
        card_id: impl Into<String>,
        valuation: UserCardValuation,
    ) -> Self {
        self.card_valuations.insert(card_id.into(), valuation);
        self
    }

    pub fn card_valuation(&self, card_id: &str) -> Option<&UserCardValuation> {
        self.card_valuations.get(card_id)
    }
}

/// Every saved profile plus the id of the one last written.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserAccountData {
    pub profiles: BTreeMap<String, ValuationProfile>,
    pub active_profile_id: String,
}

impl UserAccountData {
    pub fn profile(&self, profile_id: &str) -> Option<&ValuationProfile> {
        self.profiles.get(profile_id)
    }

    /// The first profile in key order.
    ///
    /// This does not consult `active_profile_id`.
    pub fn first_profile(&self) -> Option<&ValuationProfile> {
        self.profiles.values().next()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}
