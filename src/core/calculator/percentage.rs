//! Two-decimal, half-up rounding used by every percentage in the crate.

/// Rounds to 2 decimals, half-up.
///
/// The shift is done on the decimal representation rather than by
/// multiplying, so values such as `1.005` round to `1.01` instead of
/// falling prey to `1.005 * 100.0 == 100.49999...`.
pub fn round2(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }

    let shifted: f64 = format!("{value}e2").parse().unwrap_or(value * 100.0);
    let rounded = (shifted + 0.5).floor();

    format!("{rounded}e-2").parse().unwrap_or(rounded / 100.0)
}

/// Share of `total` already spent, in percent.
/// An empty schedule (`total == 0`) is considered fully completed.
pub fn percentage_completed(spent: f64, total: f64) -> f64 {
    if total == 0.0 {
        return 100.0;
    }
    round2(spent * 100.0 / total)
}
