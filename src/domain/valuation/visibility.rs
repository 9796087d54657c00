//! Which benefits belong in the benefit list.

use crate::domain::catalog::{BenefitVariant, CoverageLevel, OtherBenefit, TravelStatusType};

/// Fee reimbursements and point perks are shown elsewhere and never listed.
/// Travel status is listed only for hotel elite status. Rental insurance is
/// listed when primary, or when secondary with notes.
pub fn is_visible(benefit: &OtherBenefit) -> bool {
    match &benefit.variant {
        BenefitVariant::FeeReimbursement(_) | BenefitVariant::PointPerk(_) => false,
        BenefitVariant::TravelStatus(status) => {
            status.status_type == TravelStatusType::HotelEliteStatus
        }
        BenefitVariant::CarRentalInsurance(insurance) => match insurance.coverage {
            CoverageLevel::Primary => true,
            CoverageLevel::Secondary => !insurance.notes.trim().is_empty(),
        },
        BenefitVariant::LoungeAccess(_)
        | BenefitVariant::Baggage(_)
        | BenefitVariant::Description(_) => true,
    }
}
