//! Time utilities: minute arithmetic between instants, "now" comparisons and
//! the daily cutoff instant.

use chrono::{DateTime, Local, NaiveDateTime, NaiveTime, TimeDelta};

/// Signed, fractional minutes from `start` to `end` (millisecond precision).
pub fn minutes_between(start: &DateTime<Local>, end: &DateTime<Local>) -> f64 {
    (*end - *start).num_milliseconds() as f64 / 60_000.0
}

/// Exclusive on both sides.
pub fn is_strictly_between(
    instant: &DateTime<Local>,
    start: &DateTime<Local>,
    end: &DateTime<Local>,
) -> bool {
    start < instant && instant < end
}

/// Portion of `[start, end]` already elapsed at `now`.
///
/// - finished intervals count in full (negative if inverted)
/// - running intervals count up to `now`
/// - future intervals count zero
pub fn spent_minutes(start: &DateTime<Local>, end: &DateTime<Local>, now: &DateTime<Local>) -> f64 {
    if end < now {
        minutes_between(start, end)
    } else if is_strictly_between(now, start, end) {
        minutes_between(start, now)
    } else {
        0.0
    }
}

/// `limit_hour:00:00.000` on the local calendar day of `end`.
/// Hours past 23 roll over into the following days; `None` only when the
/// result leaves chrono's representable range.
pub fn cutoff_on_day_of(end: &DateTime<Local>, limit_hour: u32) -> Option<NaiveDateTime> {
    let midnight = end.date_naive().and_time(NaiveTime::MIN);
    midnight.checked_add_signed(TimeDelta::try_hours(i64::from(limit_hour))?)
}

/// True when `end` falls strictly after the cutoff hour of its own day.
pub fn ends_after_hour(end: &DateTime<Local>, limit_hour: u32) -> bool {
    cutoff_on_day_of(end, limit_hour).is_some_and(|cutoff| cutoff < end.naive_local())
}
