//! Catalog module - Immutable card, credit, and benefit definitions.

mod benefit;
mod card;
mod credit;
mod frequency;

pub use benefit::{
    BaggageAllowance, BenefitVariant, CarRentalInsurance, CoverageLevel, FeeReimbursement,
    LoungeAccess, OtherBenefit, PointPerk, TravelStatus, TravelStatusType,
};
pub use card::{CreditCard, CreditCardDatabase};
pub use credit::{Credit, PeriodOverride};
pub use frequency::Frequency;
