//! Integer-cent arithmetic helpers.

/// Rounds to the nearest integer, with exact halves rounding up toward
/// positive infinity.
pub fn round_half_up(value: f64) -> i64 {
    if !value.is_finite() {
        return 0;
    }
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor as i64 + 1
    } else {
        floor as i64
    }
}

/// Scales a cent amount by a fraction and rounds to whole cents.
pub fn scale_cents(cents: i64, proportion: f64) -> i64 {
    round_half_up(cents as f64 * proportion)
}

/// Formats cents as a signed dollar amount, e.g. `-$23.00`.
pub fn format_cents(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    format!("{}${}.{:02}", sign, abs / 100, abs % 100)
}
