//! Formatting utilities used for CLI and export outputs.

/// Minutes rendered as `"<hours>h<minutes>"`, e.g. `125.0` → `"2h05"`.
///
/// Whole hours drop the minute part (`120.0` → `"2h"`). Fractions of a
/// minute are truncated. Negative input is not special-cased.
pub fn min_to_str_hours(min: f64) -> String {
    let hours = (min / 60.0).floor() as i64;
    let minutes = (min % 60.0).floor() as i64;

    if minutes > 0 {
        format!("{hours}h{minutes:02}")
    } else {
        format!("{hours}h")
    }
}

/// `"2h05 / 3h"` style pair for spent vs total.
pub fn spent_of_total(spent: f64, total: f64) -> String {
    format!("{} / {}", min_to_str_hours(spent), min_to_str_hours(total))
}

/// Percentage with at most two decimals and no trailing zeros (`66.67%`, `100%`).
pub fn percent(value: f64) -> String {
    let s = format!("{value:.2}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    format!("{s}%")
}
