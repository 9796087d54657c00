//! Billing frequency of a recurring credit or adjustment.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How often a credit or custom adjustment pays out within a year.
///
/// Unrecognized or null catalog values decode as `Unspecified`, which
/// contributes no periods.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "String")]
pub enum Frequency {
    #[default]
    Unspecified,
    Annual,
    SemiAnnual,
    Quarterly,
    Monthly,
}

impl Frequency {
    /// Number of billing periods in one year.
    pub fn periods_per_year(&self) -> u32 {
        match self {
            Frequency::Unspecified => 0,
            Frequency::Annual => 1,
            Frequency::SemiAnnual => 2,
            Frequency::Quarterly => 4,
            Frequency::Monthly => 12,
        }
    }

    /// Wire name used in catalogs and persisted profiles.
    pub fn as_str(&self) -> &'static str {
        match self {
            Frequency::Unspecified => "unspecified",
            Frequency::Annual => "annual",
            Frequency::SemiAnnual => "semi_annual",
            Frequency::Quarterly => "quarterly",
            Frequency::Monthly => "monthly",
        }
    }
}

impl From<String> for Frequency {
    fn from(value: String) -> Self {
        match value.to_ascii_lowercase().replace('-', "_").as_str() {
            "annual" => Frequency::Annual,
            "semi_annual" | "semiannual" => Frequency::SemiAnnual,
            "quarterly" => Frequency::Quarterly,
            "monthly" => Frequency::Monthly,
            _ => Frequency::Unspecified,
        }
    }
}

impl From<Option<String>> for Frequency {
    fn from(value: Option<String>) -> Self {
        value.map(Frequency::from).unwrap_or_default()
    }
}

impl From<Frequency> for String {
    fn from(value: Frequency) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn periods_per_year_matches_table() {
        assert_eq!(Frequency::Unspecified.periods_per_year(), 0);
        assert_eq!(Frequency::Annual.periods_per_year(), 1);
        assert_eq!(Frequency::SemiAnnual.periods_per_year(), 2);
        assert_eq!(Frequency::Quarterly.periods_per_year(), 4);
        assert_eq!(Frequency::Monthly.periods_per_year(), 12);
    }

    #[test]
    fn unknown_frequency_decodes_as_unspecified() {
        let freq: Frequency = serde_json::from_str("\"fortnightly\"").unwrap();
        assert_eq!(freq, Frequency::Unspecified);
        assert_eq!(freq.periods_per_year(), 0);
    }

    #[test]
    fn null_frequency_decodes_as_unspecified() {
        let freq: Frequency = serde_json::from_str("null").unwrap();
        assert_eq!(freq, Frequency::Unspecified);
    }

    #[test]
    fn frequency_accepts_hyphenated_and_camel_forms() {
        let hyphen: Frequency = serde_json::from_str("\"semi-annual\"").unwrap();
        let camel: Frequency = serde_json::from_str("\"semiAnnual\"").unwrap();
        assert_eq!(hyphen, Frequency::SemiAnnual);
        assert_eq!(camel, Frequency::SemiAnnual);
    }

    #[test]
    fn frequency_serializes_to_wire_name() {
        let json = serde_json::to_string(&Frequency::Quarterly).unwrap();
        assert_eq!(json, "\"quarterly\"");
    }
}
