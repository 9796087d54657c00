//! Ordered fallback over valuation sources.
//!
//! A chain lists the sources for one credit or benefit, highest priority
//! first: the user's override, then the catalog defaults. Value and
//! explanation resolution both walk the same chain, so credits and benefits
//! cannot drift apart.

use crate::domain::catalog::{Credit, OtherBenefit};
use crate::domain::foundation::scale_cents;

use super::ValuationOverride;

/// Shown when a user sets a value without giving a reason.
pub const CUSTOM_VALUATION_LABEL: &str = "Custom valuation (no reason given)";

/// One tier of the fallback chain.
pub trait ValuationSource {
    /// Absolute annual value; beats `proportion` when both are set.
    fn cents(&self) -> Option<i64>;

    /// Fraction of the base value.
    fn proportion(&self) -> Option<f64>;

    fn explanation(&self) -> Option<&str>;

    /// Text to show when this source sets a value but has no explanation.
    fn unexplained_label(&self) -> Option<&'static str> {
        None
    }
}

/// Sources for one item, highest priority first. Absent tiers are `None`.
pub type SourceChain<'a> = [Option<&'a dyn ValuationSource>];

impl ValuationSource for ValuationOverride {
    fn cents(&self) -> Option<i64> {
        self.cents
    }

    fn proportion(&self) -> Option<f64> {
        self.proportion
    }

    fn explanation(&self) -> Option<&str> {
        self.explanation.as_deref()
    }

    fn unexplained_label(&self) -> Option<&'static str> {
        self.has_value().then_some(CUSTOM_VALUATION_LABEL)
    }
}

impl ValuationSource for Credit {
    fn cents(&self) -> Option<i64> {
        self.default_effective_value_cents
    }

    fn proportion(&self) -> Option<f64> {
        self.default_effective_value_proportion
    }

    fn explanation(&self) -> Option<&str> {
        self.default_effective_value_explanation.as_deref()
    }
}

impl ValuationSource for OtherBenefit {
    fn cents(&self) -> Option<i64> {
        self.default_effective_value_cents
    }

    fn proportion(&self) -> Option<f64> {
        self.default_effective_value_proportion
    }

    fn explanation(&self) -> Option<&str> {
        self.default_effective_value_explanation.as_deref()
    }
}

/// Returns the value of the first source that sets one.
///
/// A proportion scales `base_cents`; with no base it resolves to 0.
/// When no source sets anything the result is 0.
pub fn resolve_cents(chain: &SourceChain<'_>, base_cents: Option<i64>) -> i64 {
    chain
        .iter()
        .flatten()
        .find_map(|source| {
            source.cents().or_else(|| {
                source
                    .proportion()
                    .map(|p| base_cents.map_or(0, |base| scale_cents(base, p)))
            })
        })
        .unwrap_or(0)
}

/// Returns the first non-blank explanation in the chain.
///
/// A source that sets a value without explaining it stops the walk with its
/// label. `generated` runs only when every source is silent.
pub fn resolve_explanation<F>(chain: &SourceChain<'_>, generated: F) -> String
where
    F: FnOnce() -> String,
{
    for source in chain.iter().flatten() {
        if let Some(text) = source
            .explanation()
            .map(str::trim)
            .filter(|t| !t.is_empty())
        {
            return text.to_string();
        }
        if let Some(label) = source.unexplained_label() {
            return label.to_string();
        }
    }
    generated()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::Frequency;

    fn credit() -> Credit {
        Credit::new("c", Frequency::Monthly, 100)
    }

    #[test]
    fn first_source_with_cents_wins() {
        let user = ValuationOverride::cents(42);
        let catalog = credit().with_default_cents(500);
        let chain: [Option<&dyn ValuationSource>; 2] = [Some(&user), Some(&catalog)];

        assert_eq!(resolve_cents(&chain, Some(1200)), 42);
    }

    #[test]
    fn cents_beats_proportion_within_a_source() {
        let catalog = credit().with_default_cents(500).with_default_proportion(0.5);
        let chain: [Option<&dyn ValuationSource>; 2] = [None, Some(&catalog)];

        assert_eq!(resolve_cents(&chain, Some(1200)), 500);
    }

    #[test]
    fn proportion_without_base_resolves_to_zero() {
        let user = ValuationOverride::proportion(0.5);
        let catalog = credit().with_default_cents(500);
        let chain: [Option<&dyn ValuationSource>; 2] = [Some(&user), Some(&catalog)];

        assert_eq!(resolve_cents(&chain, None), 0);
    }

    #[test]
    fn empty_chain_resolves_to_zero() {
        let catalog = credit();
        let chain: [Option<&dyn ValuationSource>; 2] = [None, Some(&catalog)];

        assert_eq!(resolve_cents(&chain, Some(1200)), 0);
    }

    #[test]
    fn override_without_value_falls_through() {
        let user = ValuationOverride::default().with_explanation("noted");
        let catalog = credit().with_default_proportion(0.25);
        let chain: [Option<&dyn ValuationSource>; 2] = [Some(&user), Some(&catalog)];

        assert_eq!(resolve_cents(&chain, Some(1200)), 300);
    }

    #[test]
    fn explanation_prefers_trimmed_user_text() {
        let user = ValuationOverride::cents(1).with_explanation("  only use it twice  ");
        let catalog = credit().with_default_explanation("catalog");
        let chain: [Option<&dyn ValuationSource>; 2] = [Some(&user), Some(&catalog)];

        assert_eq!(
            resolve_explanation(&chain, || "generated".to_string()),
            "only use it twice"
        );
    }

    #[test]
    fn blank_user_text_with_value_yields_label() {
        let user = ValuationOverride::proportion(0.5).with_explanation("   ");
        let catalog = credit().with_default_explanation("catalog");
        let chain: [Option<&dyn ValuationSource>; 2] = [Some(&user), Some(&catalog)];

        assert_eq!(
            resolve_explanation(&chain, String::new),
            CUSTOM_VALUATION_LABEL
        );
    }

    #[test]
    fn catalog_value_without_text_does_not_yield_label() {
        let catalog = credit().with_default_cents(500);
        let chain: [Option<&dyn ValuationSource>; 2] = [None, Some(&catalog)];

        assert_eq!(
            resolve_explanation(&chain, || "generated".to_string()),
            "generated"
        );
    }
}
