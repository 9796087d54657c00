//! Text encoding of the persisted account blob.
//!
//! The account is serialized to JSON bytes (fields tagged by name, unknown
//! fields ignored, missing fields defaulted) and wrapped in standard base64
//! so it fits a string storage slot.

use base64::{engine::general_purpose::STANDARD as Base64, Engine as _};
use thiserror::Error;

use super::UserAccountData;

/// Errors raised while encoding or decoding the account blob.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("Blob is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("Blob does not match the account schema: {0}")]
    Json(#[from] serde_json::Error),
}

/// Encodes account data for storage.
pub fn encode_account(account: &UserAccountData) -> Result<String, CodecError> {
    let bytes = serde_json::to_vec(account)?;
    Ok(Base64.encode(bytes))
}

/// Decodes account data previously produced by [`encode_account`].
pub fn decode_account(blob: &str) -> Result<UserAccountData, CodecError> {
    let bytes = Base64.decode(blob.trim())?;
    Ok(serde_json::from_slice(&bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::Frequency;
    use crate::domain::foundation::Timestamp;
    use crate::domain::valuation::{
        CustomAdjustment, UserCardValuation, ValuationOverride, ValuationProfile,
    };
    use proptest::prelude::*;

    fn sample_account() -> UserAccountData {
        let mut profile = ValuationProfile::new("default")
            .with_name("Me")
            .with_card_valuation(
                "gold",
                UserCardValuation::new()
                    .with_credit("dining", ValuationOverride::proportion(0.75))
                    .with_benefit(
                        "bags",
                        ValuationOverride::cents(3500).with_explanation("Two trips"),
                    )
                    .with_adjustment(CustomAdjustment::new(-200, Frequency::Quarterly)),
            );
        profile.created_at = Some(Timestamp::from_unix_secs(1_700_000_000));
        profile.updated_at = Some(Timestamp::from_unix_secs(1_700_000_500));

        let mut account = UserAccountData::default();
        account.profiles.insert("default".to_string(), profile);
        account.active_profile_id = "default".to_string();
        account
    }

    #[test]
    fn encoded_blob_round_trips() {
        let account = sample_account();
        let blob = encode_account(&account).unwrap();
        assert_eq!(decode_account(&blob).unwrap(), account);
    }

    #[test]
    fn decode_rejects_non_base64() {
        assert!(matches!(
            decode_account("not base64 at all!"),
            Err(CodecError::Base64(_))
        ));
    }

    #[test]
    fn decode_rejects_wrong_shape() {
        let blob = Base64.encode(br#"{"profiles": 12}"#);
        assert!(matches!(decode_account(&blob), Err(CodecError::Json(_))));
    }

    #[test]
    fn decode_tolerates_unknown_and_missing_fields() {
        let blob = Base64.encode(br#"{"schemaRevision": 9}"#);
        let account = decode_account(&blob).unwrap();
        assert!(account.is_empty());
        assert_eq!(account.active_profile_id, "");
    }

    proptest! {
        #[test]
        fn proportions_survive_encoding(proportion in 0.0f64..=1.0, cents in any::<i64>()) {
            let mut account = UserAccountData::default();
            account.profiles.insert(
                "p".to_string(),
                ValuationProfile::new("p").with_card_valuation(
                    "card",
                    UserCardValuation::new()
                        .with_credit("a", ValuationOverride::proportion(proportion))
                        .with_credit("b", ValuationOverride::cents(cents)),
                ),
            );

            let decoded = decode_account(&encode_account(&account).unwrap()).unwrap();
            prop_assert_eq!(decoded, account);
        }
    }
}
