//! Realized annual value after user overrides and catalog defaults.
//!
//! Precedence for both credits and benefits: user cents, user proportion,
//! catalog cents, catalog proportion, then 0. Credits scale proportions
//! against their raw annual value; benefits have no period structure and
//! scale against their catalog default cents instead.

use crate::domain::catalog::{Credit, OtherBenefit};

use super::precedence::{resolve_cents, ValuationSource};
use super::{raw_annual_cents, BenefitValuationOverride, CreditValuationOverride};

/// Fallback chain for a credit: user override, then catalog.
pub(crate) fn credit_chain<'a>(
    credit: &'a Credit,
    user: Option<&'a CreditValuationOverride>,
) -> [Option<&'a dyn ValuationSource>; 2] {
    [user.map(|u| u as &dyn ValuationSource), Some(credit as &dyn ValuationSource)]
}

/// Fallback chain for a benefit: user override, then catalog.
pub(crate) fn benefit_chain<'a>(
    benefit: &'a OtherBenefit,
    user: Option<&'a BenefitValuationOverride>,
) -> [Option<&'a dyn ValuationSource>; 2] {
    [user.map(|u| u as &dyn ValuationSource), Some(benefit as &dyn ValuationSource)]
}

/// Value a user actually extracts from a credit in a year.
pub fn effective_credit_cents(credit: &Credit, user: Option<&CreditValuationOverride>) -> i64 {
    resolve_cents(&credit_chain(credit, user), Some(raw_annual_cents(credit)))
}

/// Value a user assigns to a benefit.
pub fn effective_benefit_cents(
    benefit: &OtherBenefit,
    user: Option<&BenefitValuationOverride>,
) -> i64 {
    resolve_cents(
        &benefit_chain(benefit, user),
        benefit.default_effective_value_cents,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{BenefitVariant, Frequency, LoungeAccess};
    use crate::domain::valuation::ValuationOverride;

    fn streaming_credit() -> Credit {
        // raw = 12 * 100 = 1200
        Credit::new("streaming", Frequency::Monthly, 100)
    }

    fn lounge() -> OtherBenefit {
        OtherBenefit::new(
            "lounge",
            BenefitVariant::LoungeAccess(LoungeAccess {
                network: "Priority Pass".to_string(),
                guest_count: 2,
            }),
        )
    }

    #[test]
    fn catalog_cents_beats_catalog_proportion() {
        let credit = streaming_credit()
            .with_default_cents(500)
            .with_default_proportion(0.5);
        assert_eq!(effective_credit_cents(&credit, None), 500);
    }

    #[test]
    fn user_proportion_scales_raw_value() {
        let credit = streaming_credit();
        let user = ValuationOverride::proportion(0.25);
        assert_eq!(effective_credit_cents(&credit, Some(&user)), 300);
    }

    #[test]
    fn user_cents_returned_verbatim() {
        let credit = streaming_credit().with_default_cents(500);
        let user = ValuationOverride::cents(1234);
        assert_eq!(effective_credit_cents(&credit, Some(&user)), 1234);
    }

    #[test]
    fn user_cents_beats_user_proportion() {
        let credit = streaming_credit();
        let user = ValuationOverride {
            cents: Some(10),
            proportion: Some(0.9),
            explanation: None,
        };
        assert_eq!(effective_credit_cents(&credit, Some(&user)), 10);
    }

    #[test]
    fn catalog_proportion_rounds_half_up() {
        // raw = 4 * 125 = 500; 500 * 0.125 = 62.5 -> 63
        let credit = Credit::new("q", Frequency::Quarterly, 125).with_default_proportion(0.125);
        assert_eq!(effective_credit_cents(&credit, None), 63);
    }

    #[test]
    fn credit_without_any_default_is_zero() {
        assert_eq!(effective_credit_cents(&streaming_credit(), None), 0);
    }

    #[test]
    fn benefit_proportion_scales_default_cents() {
        let benefit = lounge().with_default_cents(40000);
        let user = ValuationOverride::proportion(0.25);
        assert_eq!(effective_benefit_cents(&benefit, Some(&user)), 10000);
    }

    #[test]
    fn benefit_proportion_without_default_cents_is_zero() {
        let benefit = lounge().with_default_proportion(0.5);
        let user = ValuationOverride::proportion(0.25);
        assert_eq!(effective_benefit_cents(&benefit, Some(&user)), 0);
        assert_eq!(effective_benefit_cents(&benefit, None), 0);
    }

    #[test]
    fn benefit_falls_back_to_default_cents() {
        let benefit = lounge().with_default_cents(40000);
        assert_eq!(effective_benefit_cents(&benefit, None), 40000);
    }
}
