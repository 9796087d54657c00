//! Qualitative tiers used to color-code realized value.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Effective value at or above this share of raw value is fully realized.
pub const SUCCESS_RATIO: f64 = 0.8;

/// Effective value at or above this share of raw value is partly realized.
pub const WARNING_RATIO: f64 = 0.2;

/// How fully an item's value is realized.
///
/// Ordered by [`ValueTier::rank`]: success > warning > error > primary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueTier {
    Success,
    Warning,
    Error,
    /// Neutral; nothing to realize.
    Primary,
}

impl ValueTier {
    /// Sort key, higher meaning more fully realized value.
    pub fn rank(&self) -> u8 {
        match self {
            ValueTier::Success => 3,
            ValueTier::Warning => 2,
            ValueTier::Error => 1,
            ValueTier::Primary => 0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ValueTier::Success => "success",
            ValueTier::Warning => "warning",
            ValueTier::Error => "error",
            ValueTier::Primary => "primary",
        }
    }
}

impl PartialOrd for ValueTier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ValueTier {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl fmt::Display for ValueTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// What is being classified. Zero value means different things for each.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValuedItem {
    /// Zero value is wasted.
    Credit,
    /// Zero value is not applicable.
    Benefit,
}

/// Classifies effective value against its raw (or base) value.
pub fn classify(item: ValuedItem, effective_cents: i64, raw_cents: i64) -> ValueTier {
    if effective_cents == 0 {
        return match item {
            ValuedItem::Credit => ValueTier::Error,
            ValuedItem::Benefit => ValueTier::Primary,
        };
    }

    if raw_cents == 0 {
        return if effective_cents > 0 {
            ValueTier::Success
        } else {
            ValueTier::Error
        };
    }

    let ratio = effective_cents as f64 / raw_cents as f64;
    if ratio >= SUCCESS_RATIO {
        ValueTier::Success
    } else if ratio >= WARNING_RATIO {
        ValueTier::Warning
    } else {
        ValueTier::Error
    }
}

/// Classifies a custom adjustment by its sign.
pub fn classify_adjustment(value_cents: i64) -> ValueTier {
    match value_cents.cmp(&0) {
        Ordering::Greater => ValueTier::Success,
        Ordering::Less => ValueTier::Error,
        Ordering::Equal => ValueTier::Primary,
    }
}
