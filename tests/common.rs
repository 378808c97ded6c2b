#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{DateTime, Duration, Local, TimeZone};
use schedstats::models::event::Event;
use schedstats::models::status::StatusSample;
use std::fs;
use std::path::{Path, PathBuf};

pub fn sst() -> Command {
    cargo_bin_cmd!("schedstats")
}

/// CLI isolated from the user's configuration: `--config` points inside `dir`.
pub fn sst_in(dir: &Path) -> Command {
    let mut cmd = sst();
    cmd.arg("--config").arg(dir.join("schedstats.conf"));
    cmd.arg("--no-color");
    cmd
}

/// Local wall-clock instant (January dates avoid DST transitions).
pub fn at(day: u32, hour: u32, min: u32) -> DateTime<Local> {
    Local
        .with_ymd_and_hms(2024, 1, day, hour, min, 0)
        .single()
        .expect("unambiguous local time")
}

pub fn mins(m: i64) -> Duration {
    Duration::minutes(m)
}

pub fn class(name: &str, start: DateTime<Local>, end: DateTime<Local>) -> Event {
    Event::new(name, "Lecture", "Smith", "A101", start, end)
}

pub fn sample(minute: u32, alive: bool) -> StatusSample {
    StatusSample::new(at(15, 12, minute), alive)
}

/// A small week of classes used by several tests.
pub fn timetable() -> Vec<Event> {
    vec![
        Event::new("Math", "Lecture", "Smith", "A101", at(15, 9, 0), at(15, 10, 0)),
        Event::new("Physics", "Lab", "Jones", "B202", at(15, 10, 0), at(15, 12, 0)),
        Event::new("Math", "Tutorial", "Brown", "A101", at(16, 9, 0), at(16, 9, 30)),
        Event::new("Chemistry", "Lecture", "Smith", "C303", at(16, 17, 0), at(16, 19, 0)),
    ]
}

pub fn write_fixture(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("write fixture");
    path
}

pub const EVENTS_JSON: &str = r#"[
  {"name": "Math", "type": "Lecture", "teacher": "Smith", "location": "A101",
   "start": "2024-01-15T09:00:00+00:00", "end": "2024-01-15T10:00:00+00:00"},
  {"name": "Math", "type": "Lecture", "teacher": "Smith", "location": "A101",
   "start": "2024-01-15T11:00:00+00:00", "end": "2024-01-15T11:30:00+00:00"},
  {"name": "Physics", "type": "Lab", "teacher": "Jones", "location": "B202",
   "start": "2024-01-16T13:00:00+00:00", "end": "2024-01-16T15:00:00+00:00"}
]"#;

pub const EVENTS_CSV: &str = "name,type,teacher,location,start,end
Math,Lecture,Smith,A101,2024-01-15T09:00:00+00:00,2024-01-15T10:00:00+00:00
Math,Lecture,Smith,A101,2024-01-15T11:00:00+00:00,2024-01-15T11:30:00+00:00
Physics,Lab,Jones,B202,2024-01-16T13:00:00+00:00,2024-01-16T15:00:00+00:00
";

pub const STATUS_JSON: &str = r#"[
  {"date": "2024-01-15T12:00:00+00:00", "alive": true},
  {"date": "2024-01-15T12:05:00+00:00", "alive": false},
  {"date": "2024-01-15T12:10:00+00:00", "alive": true}
]"#;

pub const STATUS_CSV: &str = "date,alive
2024-01-15T12:00:00+00:00,true
2024-01-15T12:05:00+00:00,false
2024-01-15T12:10:00+00:00,false
2024-01-15T12:15:00+00:00,true
";
