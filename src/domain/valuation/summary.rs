//! Per-card valuation breakdown consumed by presentation.

use serde::{Deserialize, Serialize};

use crate::domain::catalog::CreditCard;

use super::{
    benefit_explanation, classify, classify_adjustment, credit_explanation,
    effective_benefit_cents, effective_credit_cents, is_visible, net_worth_cents,
    raw_annual_cents, UserCardValuation, ValueTier, ValuedItem,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditLine {
    pub credit_id: String,
    pub raw_cents: i64,
    pub effective_cents: i64,
    pub tier: ValueTier,
    pub explanation: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenefitLine {
    pub benefit_id: String,
    pub effective_cents: i64,
    pub tier: ValueTier,
    pub explanation: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjustmentLine {
    pub description: String,
    pub annual_cents: i64,
    pub tier: ValueTier,
}

/// Net worth of one card with the lines that produce it.
///
/// Credit and benefit lines are sorted by tier, most fully realized first;
/// ties keep catalog order. Hidden benefits are left out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardValuationSummary {
    pub card_id: String,
    pub card_name: String,
    pub annual_fee_cents: i64,
    pub net_worth_cents: i64,
    pub credits: Vec<CreditLine>,
    pub benefits: Vec<BenefitLine>,
    pub adjustments: Vec<AdjustmentLine>,
}

impl CardValuationSummary {
    pub fn build(card: &CreditCard, valuation: Option<&UserCardValuation>) -> Self {
        let mut credits: Vec<CreditLine> = card
            .credits
            .iter()
            .map(|credit| {
                let user = valuation.and_then(|v| v.credit_override(&credit.credit_id));
                let raw_cents = raw_annual_cents(credit);
                let effective_cents = effective_credit_cents(credit, user);
                CreditLine {
                    credit_id: credit.credit_id.clone(),
                    raw_cents,
                    effective_cents,
                    tier: classify(ValuedItem::Credit, effective_cents, raw_cents),
                    explanation: credit_explanation(credit, user),
                }
            })
            .collect();

        let mut benefits: Vec<BenefitLine> = card
            .other_benefits
            .iter()
            .filter(|benefit| is_visible(benefit))
            .map(|benefit| {
                let user = valuation.and_then(|v| v.benefit_override(&benefit.benefit_id));
                let effective_cents = effective_benefit_cents(benefit, user);
                let base_cents = benefit.default_effective_value_cents.unwrap_or(0);
                BenefitLine {
                    benefit_id: benefit.benefit_id.clone(),
                    effective_cents,
                    tier: classify(ValuedItem::Benefit, effective_cents, base_cents),
                    explanation: benefit_explanation(benefit, user),
                }
            })
            .collect();

        // Stable sort keeps catalog order within a tier.
        credits.sort_by(|a, b| b.tier.cmp(&a.tier));
        benefits.sort_by(|a, b| b.tier.cmp(&a.tier));

        let adjustments = valuation
            .map(|v| {
                v.custom_adjustments
                    .iter()
                    .map(|adjustment| {
                        let annual_cents = adjustment.annual_cents();
                        AdjustmentLine {
                            description: adjustment.description.clone(),
                            annual_cents,
                            tier: classify_adjustment(annual_cents),
                        }
                    })
                    .collect()
            })
            .unwrap_or_default();

        Self {
            card_id: card.card_id.clone(),
            card_name: card.display_name().to_string(),
            annual_fee_cents: card.annual_fee_cents,
            net_worth_cents: net_worth_cents(card, valuation),
            credits,
            benefits,
            adjustments,
        }
    }
}
