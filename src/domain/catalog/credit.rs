//! Recurring statement credits defined by the catalog.

use serde::{Deserialize, Serialize};

use super::Frequency;

/// Replacement face value for a single billing period.
///
/// Either field may be missing in a hand-edited catalog; such entries are
/// ignored rather than treated as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PeriodOverride {
    /// 1-based period index within the year.
    pub period: Option<u32>,
    pub value_cents: Option<i64>,
}

impl PeriodOverride {
    pub fn new(period: u32, value_cents: i64) -> Self {
        Self {
            period: Some(period),
            value_cents: Some(value_cents),
        }
    }
}

/// A catalog-defined recurring reimbursement tied to a card.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Credit {
    pub credit_id: String,
    pub frequency: Frequency,
    /// Face value paid in each billing period.
    pub default_period_value_cents: i64,
    /// Applied in order; a later entry for the same period wins.
    pub overrides: Vec<PeriodOverride>,
    pub default_effective_value_cents: Option<i64>,
    pub default_effective_value_proportion: Option<f64>,
    pub default_effective_value_explanation: Option<String>,
}

impl Credit {
    /// Creates a credit with no period overrides or realism defaults.
    pub fn new(
        credit_id: impl Into<String>,
        frequency: Frequency,
        default_period_value_cents: i64,
    ) -> Self {
        Self {
            credit_id: credit_id.into(),
            frequency,
            default_period_value_cents,
            ..Default::default()
        }
    }

    pub fn with_override(mut self, period: u32, value_cents: i64) -> Self {
        self.overrides.push(PeriodOverride::new(period, value_cents));
        self
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
