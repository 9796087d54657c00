//! Non-recurring or qualitative card perks.
//!
//! Each benefit carries exactly one variant payload. The variant is a sum
//! type so that visibility and description rules match on it exhaustively.

use serde::{Deserialize, Serialize};

/// Kind of elite status conferred by a travel-status benefit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TravelStatusType {
    HotelEliteStatus,
    AirlineEliteStatus,
    CarRentalEliteStatus,
    #[default]
    Other,
}

/// Complimentary status with a travel loyalty program.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TravelStatus {
    pub program: String,
    pub status_type: TravelStatusType,
    pub tier: String,
}

/// Points-earning perk surfaced outside the benefit list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PointPerk {
    pub description: String,
}

/// Whether rental insurance pays before or after the renter's own policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoverageLevel {
    Primary,
    #[default]
    Secondary,
}

/// Collision damage coverage on rental cars.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CarRentalInsurance {
    pub coverage: CoverageLevel,
    pub notes: String,
}

/// Airport lounge network membership.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoungeAccess {
    pub network: String,
    /// Complimentary guests per visit.
    pub guest_count: u32,
}

/// Statement credit for a trusted-traveler or similar application fee.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FeeReimbursement {
    pub program: String,
}

/// Free checked bags on a partner airline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BaggageAllowance {
    pub airline: String,
    pub free_checked_bags: u32,
}

/// The single populated payload of a benefit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BenefitVariant {
    TravelStatus(TravelStatus),
    PointPerk(PointPerk),
    CarRentalInsurance(CarRentalInsurance),
    LoungeAccess(LoungeAccess),
    FeeReimbursement(FeeReimbursement),
    Baggage(BaggageAllowance),
    Description(String),
}

impl Default for BenefitVariant {
    fn default() -> Self {
        BenefitVariant::Description(String::new())
    }
}

/// A catalog-defined perk attached to a card.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OtherBenefit {
    pub benefit_id: String,
    pub variant: BenefitVariant,
    pub default_effective_value_cents: Option<i64>,
    pub default_effective_value_proportion: Option<f64>,
    pub default_effective_value_explanation: Option<String>,
}

impl OtherBenefit {
    pub fn new(benefit_id: impl Into<String>, variant: BenefitVariant) -> Self {
        Self {
            benefit_id: benefit_id.into(),
            variant,
            ..Default::default()
        }
    }

    pub fn with_default_cents(mut self, cents: i64) -> Self {
        self.default_effective_value_cents = Some(cents);
        self
    }

    pub fn with_default_proportion(mut self, proportion: f64) -> Self {
        self.default_effective_value_proportion = Some(proportion);
        self
    }

    pub fn with_default_explanation(mut self, explanation: impl Into<String>) -> Self {
        self.default_effective_value_explanation = Some(explanation.into());
        self
    }
}
