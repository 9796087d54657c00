//! User-supplied valuation records scoped to one card.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::catalog::Frequency;

/// A user's replacement for a catalog default.
///
/// When both `cents` and `proportion` are set, `cents` wins.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ValuationOverride {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cents: Option<i64>,
    /// Fraction of the raw or base value, 0.0 to 1.0.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proportion: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

impl ValuationOverride {
    pub fn cents(cents: i64) -> Self {
        Self {
            cents: Some(cents),
            ..Default::default()
        }
    }

    pub fn proportion(proportion: f64) -> Self {
        Self {
            proportion: Some(proportion),
            ..Default::default()
        }
    }

    pub fn with_explanation(mut self, explanation: impl Into<String>) -> Self {
        self.explanation = Some(explanation.into());
        self
    }

    /// True when the override carries an amount or a proportion.
    pub fn has_value(&self) -> bool {
        self.cents.is_some() || self.proportion.is_some()
    }
}

pub type CreditValuationOverride = ValuationOverride;
pub type BenefitValuationOverride = ValuationOverride;

/// A manual line item added to a card's net worth.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomAdjustment {
    /// Signed amount per period.
    pub value_cents: i64,
    pub frequency: Frequency,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
}

impl CustomAdjustment {
    pub fn new(value_cents: i64, frequency: Frequency) -> Self {
        Self {
            value_cents,
            frequency,
            description: String::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Amount per period times periods per year.
    pub fn annual_cents(&self) -> i64 {
        self.value_cents
            .saturating_mul(i64::from(self.frequency.periods_per_year()))
    }
}

/// All of a user's overrides for a single card.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserCardValuation {
    pub credit_valuations: BTreeMap<String, CreditValuationOverride>,
    pub benefit_valuations: BTreeMap<String, BenefitValuationOverride>,
    pub custom_adjustments: Vec<CustomAdjustment>,
}

impl UserCardValuation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_credit(mut self, credit_id: impl Into<String>, value: ValuationOverride) -> Self {
        self.credit_valuations.insert(credit_id.into(), value);
        self
    }

    pub fn with_benefit(mut self, benefit_id: impl Into<String>, value: ValuationOverride) -> Self {
        self.benefit_valuations.insert(benefit_id.into(), value);
        self
    }

    pub fn with_adjustment(mut self, adjustment: CustomAdjustment) -> Self {
        self.custom_adjustments.push(adjustment);
        self
    }

    pub fn credit_override(&self, credit_id: &str) -> Option<&CreditValuationOverride> {
        self.credit_valuations.get(credit_id)
    }

    pub fn benefit_override(&self, benefit_id: &str) -> Option<&BenefitValuationOverride> {
        self.benefit_valuations.get(benefit_id)
    }
}
