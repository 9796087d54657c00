//! Valuation Module - Resolution and aggregation of card value.
//!
//! Turns a catalog record plus an optional user override into an effective
//! value, a tier, and an explanation, and sums a card's net worth.
//!
//! # Components
//!
//! - `raw_annual_cents` - Undiscounted annual face value of a credit
//! - `effective_credit_cents` / `effective_benefit_cents` - Realized value
//! - `net_worth_cents` - Credits plus adjustments minus annual fee
//! - `classify` / `credit_explanation` / `benefit_explanation` - Tier and tooltip
//! - `is_visible` - Benefit list filter
//! - `CardValuationSummary` - Everything above for one card
//! - `encode_account` / `decode_account` - Persisted blob encoding
//!
//! All functions except the codec are pure and cannot fail.

mod classification;
mod codec;
mod effective_value;
mod explanation;
mod net_worth;
mod overrides;
mod precedence;
mod profile;
mod raw_value;
mod summary;
mod visibility;

pub use classification::{
    classify, classify_adjustment, ValueTier, ValuedItem, SUCCESS_RATIO, WARNING_RATIO,
};
pub use codec::{decode_account, encode_account, CodecError};
pub use effective_value::{effective_benefit_cents, effective_credit_cents};
pub use explanation::{benefit_explanation, credit_explanation, describe_variant};
pub use net_worth::{net_worth_cents, profile_net_worth_cents};
pub use overrides::{
    BenefitValuationOverride, CreditValuationOverride, CustomAdjustment, UserCardValuation,
    ValuationOverride,
};
pub use precedence::{
    resolve_cents, resolve_explanation, SourceChain, ValuationSource, CUSTOM_VALUATION_LABEL,
};
pub use profile::{UserAccountData, ValuationProfile};
pub use raw_value::raw_annual_cents;
pub use summary::{AdjustmentLine, BenefitLine, CardValuationSummary, CreditLine};
pub use visibility::is_visible;
