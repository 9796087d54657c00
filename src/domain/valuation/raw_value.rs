//! Undiscounted annual face value of a credit.

use std::collections::HashMap;

use crate::domain::catalog::Credit;

/// Sums the face value of every billing period in a year.
///
/// Each period uses its override when one exists (the last entry for a
/// repeated period wins) and `default_period_value_cents` otherwise.
/// Override entries with a missing period or value are skipped. A credit
/// with no periods per year has no raw value.
pub fn raw_annual_cents(credit: &Credit) -> i64 {
    let periods = credit.frequency.periods_per_year();
    if periods == 0 {
        return 0;
    }

    let by_period: HashMap<u32, i64> = credit
        .overrides
        .iter()
        .filter_map(|o| Some((o.period?, o.value_cents?)))
        .collect();

    (1..=periods)
        .map(|period| {
            by_period
                .get(&period)
                .copied()
                .unwrap_or(credit.default_period_value_cents)
        })
        .fold(0, i64::saturating_add)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{Frequency, PeriodOverride};
    use proptest::prelude::*;

    #[test]
    fn monthly_credit_without_overrides() {
        let credit = Credit::new("uber", Frequency::Monthly, 1500);
        assert_eq!(raw_annual_cents(&credit), 18000);
    }

    #[test]
    fn overrides_replace_their_period() {
        let credit = Credit::new("uber", Frequency::Monthly, 1500).with_override(12, 3500);
        assert_eq!(raw_annual_cents(&credit), 11 * 1500 + 3500);
    }

    #[test]
    fn later_override_for_same_period_wins() {
        let credit = Credit::new("hotel", Frequency::SemiAnnual, 5000)
            .with_override(2, 1)
            .with_override(2, 7000);
        assert_eq!(raw_annual_cents(&credit), 12000);
    }

    #[test]
    fn overrides_outside_the_year_are_ignored() {
        let credit = Credit::new("airline", Frequency::Annual, 20000).with_override(3, 99999);
        assert_eq!(raw_annual_cents(&credit), 20000);
    }

    #[test]
    fn incomplete_override_entries_are_skipped_not_zeroed() {
        let mut credit = Credit::new("saks", Frequency::SemiAnnual, 5000);
        credit.overrides.push(PeriodOverride {
            period: Some(1),
            value_cents: None,
        });
        credit.overrides.push(PeriodOverride {
            period: None,
            value_cents: Some(0),
        });
        assert_eq!(raw_annual_cents(&credit), 10000);
    }

    #[test]
    fn unspecified_frequency_has_no_raw_value() {
        let credit = Credit::new("mystery", Frequency::Unspecified, 5000).with_override(1, 100);
        assert_eq!(raw_annual_cents(&credit), 0);
    }

    #[test]
    fn huge_period_values_saturate() {
        let credit = Credit::new("huge", Frequency::Monthly, i64::MAX / 4);
        assert_eq!(raw_annual_cents(&credit), i64::MAX);
    }

    fn frequency_strategy() -> impl Strategy<Value = Frequency> {
        prop_oneof![
            Just(Frequency::Unspecified),
            Just(Frequency::Annual),
            Just(Frequency::SemiAnnual),
            Just(Frequency::Quarterly),
            Just(Frequency::Monthly),
        ]
    }

    proptest! {
        #[test]
        fn raw_value_is_sum_over_periods(
            frequency in frequency_strategy(),
            default_value in 0i64..100_000,
            overrides in proptest::collection::vec((1u32..=14, 0i64..100_000), 0..10),
        ) {
            let mut credit = Credit::new("p", frequency, default_value);
            for (period, value) in &overrides {
                credit = credit.with_override(*period, *value);
            }

            let periods = frequency.periods_per_year();
            let expected: i64 = (1..=periods)
                .map(|p| {
                    overrides
                        .iter()
                        .rev()
                        .find(|(period, _)| *period == p)
                        .map(|(_, v)| *v)
                        .unwrap_or(default_value)
                })
                .sum();

            prop_assert_eq!(raw_annual_cents(&credit), expected);
        }

        #[test]
        fn unspecified_frequency_is_always_zero(
            default_value in any::<i32>(),
            overrides in proptest::collection::vec((1u32..=12, any::<i32>()), 0..6),
        ) {
            let mut credit = Credit::new("p", Frequency::Unspecified, i64::from(default_value));
            for (period, value) in overrides {
                credit = credit.with_override(period, i64::from(value));
            }
            prop_assert_eq!(raw_annual_cents(&credit), 0);
        }
    }
}
