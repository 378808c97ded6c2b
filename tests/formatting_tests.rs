use chrono::{Local, TimeZone};
use schedstats::core::calculator::percentage::round2;
use schedstats::errors::AppError;
use schedstats::min_to_str_hours;
use schedstats::models::event::Event;
use schedstats::models::status::StatusSample;
use schedstats::utils::date::{format_datetime, parse_datetime, validate_format};
use schedstats::utils::formatting::{percent, spent_of_total};
use schedstats::utils::table::{Column, Table};

#[test]
fn test_min_to_str_hours() {
    assert_eq!(min_to_str_hours(125.0), "2h05");
    assert_eq!(min_to_str_hours(120.0), "2h");
    assert_eq!(min_to_str_hours(59.0), "0h59");
    assert_eq!(min_to_str_hours(0.0), "0h");
    assert_eq!(min_to_str_hours(61.0), "1h01");
    assert_eq!(min_to_str_hours(600.0), "10h");
}

#[test]
fn test_min_to_str_hours_truncates_fractions() {
    assert_eq!(min_to_str_hours(90.9), "1h30");
    assert_eq!(min_to_str_hours(60.5), "1h");
}

#[test]
fn test_round2_half_up() {
    assert_eq!(round2(1.005), 1.01);
    assert_eq!(round2(2.675), 2.68);
    assert_eq!(round2(33.333), 33.33);
    assert_eq!(round2(66.666_666_666_666_67), 66.67);
    assert_eq!(round2(0.125), 0.13);
    assert_eq!(round2(100.0), 100.0);
}

#[test]
fn test_round2_keeps_non_finite() {
    assert!(round2(f64::NAN).is_nan());
    assert_eq!(round2(f64::INFINITY), f64::INFINITY);
}

#[test]
fn test_percent_and_spent_of_total() {
    assert_eq!(percent(100.0), "100%");
    assert_eq!(percent(66.67), "66.67%");
    assert_eq!(percent(12.5), "12.5%");
    assert_eq!(percent(0.0), "0%");
    assert_eq!(spent_of_total(90.0, 125.0), "1h30 / 2h05");
}

#[test]
fn test_parse_datetime_formats() {
    let expected = Local.with_ymd_and_hms(2024, 1, 15, 9, 30, 0).unwrap();
    assert_eq!(parse_datetime("2024-01-15 09:30").unwrap(), expected);
    assert_eq!(parse_datetime("2024-01-15 09:30:00").unwrap(), expected);
    assert_eq!(parse_datetime("2024-01-15T09:30").unwrap(), expected);

    let midnight = Local.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap();
    assert_eq!(parse_datetime("2024-01-15").unwrap(), midnight);

    let utc = parse_datetime("2024-01-15T09:30:00+00:00").unwrap();
    assert_eq!(utc.timestamp(), 1_705_311_000);
}

#[test]
fn test_parse_datetime_rejects_garbage() {
    match parse_datetime("next tuesday") {
        Err(AppError::InvalidDate(s)) => assert_eq!(s, "next tuesday"),
        other => panic!("unexpected: {other:?}"),
    }
}

#[test]
fn test_table_aligns_wide_characters() {
    let mut t = Table::new(vec![Column::left("Teacher"), Column::right("Total")]);
    t.add_row(vec!["Müller".into(), "2h".into()]);
    t.add_row(vec!["Li".into(), "10h05".into()]);

    let out = t.render();
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[0], "Teacher Total");
    assert_eq!(lines[2], "Müller     2h");
    assert_eq!(lines[3], "Li      10h05");
}

#[test]
fn test_format_datetime_never_panics() {
    let dt = Local.with_ymd_and_hms(2024, 1, 15, 9, 30, 0).unwrap();
    assert_eq!(format_datetime(&dt, "%d/%m %H:%M"), "15/01 09:30");
    assert_eq!(format_datetime(&dt, "%Q"), dt.to_rfc3339());

    assert!(validate_format("%Y-%m-%d %H:%M").is_ok());
    assert!(validate_format("%Q").is_err());
}

#[test]
fn test_offsetless_timestamps_are_local() {
    let json = r#"{"name": "Math", "type": "Lecture", "teacher": "Smith", "location": "A101",
        "start": "2024-01-15T09:00:00", "end": "2024-01-15 10:30"}"#;
    let ev: Event = serde_json::from_str(json).unwrap();

    assert_eq!(ev.start, Local.with_ymd_and_hms(2024, 1, 15, 9, 0, 0).unwrap());
    assert_eq!(ev.end, Local.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap());

    let s: StatusSample = serde_json::from_str(r#"{"date": "2024-01-15T12:00:00.250Z", "alive": true}"#).unwrap();
    assert_eq!(s.date.timestamp_millis(), 1_705_320_000_250);

    assert!(serde_json::from_str::<StatusSample>(r#"{"date": "yesterday", "alive": true}"#).is_err());
}
