//! UpsertProfile - Command handler for saving a valuation profile.
//!
//! Read-modify-write over the single account blob. There is no locking:
//! two concurrent upserts both read the same prior state and the later
//! write wins.

use std::sync::Arc;

use crate::domain::foundation::{Timestamp, ValidationError};
use crate::domain::valuation::{decode_account, encode_account, UserAccountData, ValuationProfile};
use crate::ports::{BlobStorage, Clock};

use super::ProfileStoreError;

/// Command to create or update a profile.
#[derive(Debug, Clone)]
pub struct UpsertProfileCommand {
    pub profile: ValuationProfile,
}

/// Result of a successful upsert.
#[derive(Debug, Clone)]
pub struct UpsertProfileResult {
    /// The profile as stored.
    pub profile: ValuationProfile,
    /// True when no profile with this id existed before.
    pub created: bool,
}

/// Handler for saving profiles.
pub struct UpsertProfileHandler {
    storage: Arc<dyn BlobStorage>,
    clock: Arc<dyn Clock>,
    storage_key: String,
}

impl UpsertProfileHandler {
    pub fn new(
        storage: Arc<dyn BlobStorage>,
        clock: Arc<dyn Clock>,
        storage_key: impl Into<String>,
    ) -> Self {
        Self {
            storage,
            clock,
            storage_key: storage_key.into(),
        }
    }

    pub fn handle(&self, cmd: UpsertProfileCommand) -> Result<UpsertProfileResult, ProfileStoreError> {
        let incoming = cmd.profile;

        // 1. Reject before touching storage
        if incoming.profile_id.trim().is_empty() {
            return Err(ValidationError::empty_field("profile_id").into());
        }

        // 2. Load the current account, or start empty
        let mut account = match self.storage.read(&self.storage_key)? {
            Some(blob) => decode_account(&blob).map_err(|e| {
                tracing::warn!("Aborting profile save, stored account is unreadable: {}", e);
                ProfileStoreError::Decode(e)
            })?,
            None => UserAccountData::default(),
        };

        // 3. Merge over the existing entry
        let profile_id = incoming.profile_id.clone();
        let existing = account.profiles.remove(&profile_id);
        let created = existing.is_none();
        let merged = merge_profile(existing, incoming, self.clock.now());

        account.profiles.insert(profile_id.clone(), merged.clone());
        account.active_profile_id = profile_id.clone();

        // 4. Replace the blob in a single write
        let blob = encode_account(&account).map_err(ProfileStoreError::Encode)?;
        self.storage.write(&self.storage_key, &blob)?;

        tracing::info!(
            profile_id = %profile_id,
            created,
            cards = merged.card_valuations.len(),
            "Saved valuation profile"
        );

        Ok(UpsertProfileResult {
            profile: merged,
            created,
        })
    }
}

/// Overlays `incoming` on `existing`.
///
/// `updated_at` is always `now`. `created_at` keeps the existing value,
/// else the incoming one, else `now`.
fn merge_profile(
    existing: Option<ValuationProfile>,
    incoming: ValuationProfile,
    now: Timestamp,
) -> ValuationProfile {
    let (existing_name, existing_created) = match existing {
        Some(p) => (p.name, p.created_at),
        None => (None, None),
    };

    ValuationProfile {
        profile_id: incoming.profile_id,
        name: incoming.name.or(existing_name),
        card_valuations: incoming.card_valuations,
        created_at: Some(existing_created.or(incoming.created_at).unwrap_or(now)),
        updated_at: Some(now),
    }
}
