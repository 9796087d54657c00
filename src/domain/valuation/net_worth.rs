//! Headline net worth of holding a card.

use crate::domain::catalog::CreditCard;

use super::{effective_credit_cents, UserCardValuation, ValuationProfile};

/// Effective credit value plus annualized custom adjustments, minus the
/// annual fee.
///
/// Benefits are not summed. A missing valuation means no overrides: credits
/// fall back to catalog defaults and there are no adjustments.
pub fn net_worth_cents(card: &CreditCard, valuation: Option<&UserCardValuation>) -> i64 {
    let credits: i64 = card
        .credits
        .iter()
        .map(|credit| {
            let user = valuation.and_then(|v| v.credit_override(&credit.credit_id));
            effective_credit_cents(credit, user)
        })
        .fold(0, i64::saturating_add);

    let adjustments = valuation
        .map(|v| {
            v.custom_adjustments
                .iter()
                .map(|a| a.annual_cents())
                .fold(0, i64::saturating_add)
        })
        .unwrap_or(0);

    credits
        .saturating_add(adjustments)
        .saturating_sub(card.annual_fee_cents)
}

/// Net worth using the card's valuation from a profile, if any.
pub fn profile_net_worth_cents(card: &CreditCard, profile: Option<&ValuationProfile>) -> i64 {
    net_worth_cents(card, profile.and_then(|p| p.card_valuation(&card.card_id)))
}
