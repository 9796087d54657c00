//! Tooltip text explaining where a value came from.
//!
//! Order: the user's own text, then a fixed label if the user set a value
//! silently, then the catalog explanation, then a description built from
//! the benefit variant (credits have none and get an empty string).

use crate::domain::catalog::{
    BaggageAllowance, BenefitVariant, CarRentalInsurance, CoverageLevel, Credit,
    FeeReimbursement, LoungeAccess, OtherBenefit, TravelStatus,
};

use super::effective_value::{benefit_chain, credit_chain};
use super::precedence::resolve_explanation;
use super::{BenefitValuationOverride, CreditValuationOverride};

pub fn credit_explanation(credit: &Credit, user: Option<&CreditValuationOverride>) -> String {
    resolve_explanation(&credit_chain(credit, user), String::new)
}

pub fn benefit_explanation(
    benefit: &OtherBenefit,
    user: Option<&BenefitValuationOverride>,
) -> String {
    resolve_explanation(&benefit_chain(benefit, user), || {
        describe_variant(&benefit.variant)
    })
}

/// Plain-language description of a benefit payload.
pub fn describe_variant(variant: &BenefitVariant) -> String {
    match variant {
        BenefitVariant::TravelStatus(status) => describe_travel_status(status),
        BenefitVariant::PointPerk(perk) => perk.description.trim().to_string(),
        BenefitVariant::CarRentalInsurance(insurance) => describe_car_rental(insurance),
        BenefitVariant::LoungeAccess(lounge) => describe_lounge(lounge),
        BenefitVariant::FeeReimbursement(fee) => describe_fee_reimbursement(fee),
        BenefitVariant::Baggage(baggage) => describe_baggage(baggage),
        BenefitVariant::Description(text) => text.trim().to_string(),
    }
}

fn describe_travel_status(status: &TravelStatus) -> String {
    match (status.tier.trim(), status.program.trim()) {
        ("", "") => "Complimentary elite status".to_string(),
        ("", program) => format!("Complimentary elite status with {}", program),
        (tier, "") => format!("Complimentary {} status", tier),
        (tier, program) => format!("Complimentary {} status with {}", tier, program),
    }
}

fn describe_car_rental(insurance: &CarRentalInsurance) -> String {
    let coverage = match insurance.coverage {
        CoverageLevel::Primary => "Primary",
        CoverageLevel::Secondary => "Secondary",
    };
    let base = format!("{} rental car collision coverage", coverage);
    match insurance.notes.trim() {
        "" => base,
        notes => format!("{} ({})", base, notes),
    }
}

fn describe_lounge(lounge: &LoungeAccess) -> String {
    let network = match lounge.network.trim() {
        "" => "airport".to_string(),
        name => name.to_string(),
    };
    match lounge.guest_count {
        0 => format!("Access to {} lounges for the cardholder only", network),
        1 => format!("Access to {} lounges plus 1 guest", network),
        n => format!("Access to {} lounges plus up to {} guests", network, n),
    }
}

fn describe_fee_reimbursement(fee: &FeeReimbursement) -> String {
    match fee.program.trim() {
        "" => "Application fee reimbursement".to_string(),
        program => format!("Reimbursement of the {} application fee", program),
    }
}

fn describe_baggage(baggage: &BaggageAllowance) -> String {
    let bags = match baggage.free_checked_bags {
        0 => return "No free checked bags".to_string(),
        1 => "First checked bag free".to_string(),
        n => format!("First {} checked bags free", n),
    };
    match baggage.airline.trim() {
        "" => bags,
        airline => format!("{} on {}", bags, airline),
    }
}
