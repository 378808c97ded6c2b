use crate::errors::{AppError, AppResult};
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use serde::{Deserialize, Deserializer};
use std::fmt::Write;

/// Accepts RFC 3339, `YYYY-MM-DD HH:MM[:SS]` (local) or `YYYY-MM-DD`
/// (local midnight).
pub fn parse_datetime(s: &str) -> AppResult<DateTime<Local>> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Local));
    }

    let naive = [
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%d %H:%M",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
    ]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .map(|d| d.and_time(NaiveTime::MIN))
        })
        .ok_or_else(|| AppError::InvalidDate(s.to_string()))?;

    // DST gaps have no local representation; ambiguous times take the earlier one.
    Local
        .from_local_datetime(&naive)
        .earliest()
        .ok_or_else(|| AppError::InvalidDate(s.to_string()))
}

pub fn parse_optional_datetime(input: Option<&str>) -> AppResult<Option<DateTime<Local>>> {
    input.map(parse_datetime).transpose()
}

/// Serde adapter for input timestamps: same forms as [`parse_datetime`],
/// so offset-less values are read as local time.
pub fn deserialize_local<'de, D>(deserializer: D) -> Result<DateTime<Local>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_datetime(&raw).map_err(serde::de::Error::custom)
}

/// Rejects strftime strings chrono cannot render (e.g. `%Q`).
pub fn validate_format(fmt: &str) -> AppResult<()> {
    if StrftimeItems::new(fmt).any(|item| matches!(item, Item::Error)) {
        return Err(AppError::InvalidDate(format!("unsupported datetime format '{fmt}'")));
    }
    Ok(())
}

/// Falls back to RFC 3339 when `fmt` cannot be rendered.
pub fn format_datetime(dt: &DateTime<Local>, fmt: &str) -> String {
    let mut out = String::new();
    match write!(out, "{}", dt.format(fmt)) {
        Ok(()) => out,
        Err(_) => dt.to_rfc3339(),
    }
}
