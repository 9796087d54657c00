//! LoadActiveProfile - Query handler for the profile the app should use.
//!
//! Never fails. Missing, unreadable, or empty storage all yield `None`.
//! An undecodable blob is deleted so the next save starts fresh.

use std::sync::Arc;

use crate::domain::valuation::{decode_account, ValuationProfile};
use crate::ports::BlobStorage;

/// Handler for loading the active profile.
pub struct LoadActiveProfileHandler {
    storage: Arc<dyn BlobStorage>,
    storage_key: String,
}

impl LoadActiveProfileHandler {
    pub fn new(storage: Arc<dyn BlobStorage>, storage_key: impl Into<String>) -> Self {
        Self {
            storage,
            storage_key: storage_key.into(),
        }
    }

    /// Returns the first profile in key order.
    ///
    /// `active_profile_id` is not consulted.
    pub fn handle(&self) -> Option<ValuationProfile> {
        let blob = match self.storage.read(&self.storage_key) {
            Ok(Some(blob)) => blob,
            Ok(None) => return None,
            Err(e) => {
                tracing::warn!("Failed to read stored account: {}", e);
                return None;
            }
        };

        let account = match decode_account(&blob) {
            Ok(account) => account,
            Err(e) => {
                tracing::warn!("Discarding unreadable stored account: {}", e);
                if let Err(e) = self.storage.remove(&self.storage_key) {
                    tracing::warn!("Failed to remove unreadable account: {}", e);
                }
                return None;
            }
        };

        let profile = account.first_profile().cloned();
        match &profile {
            Some(p) => tracing::debug!(profile_id = %p.profile_id, "Loaded active profile"),
            None => tracing::debug!("Stored account has no profiles"),
        }
        profile
    }
}
