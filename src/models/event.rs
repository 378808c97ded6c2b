use crate::utils::date::deserialize_local;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// A scheduled class as read from a timetable export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub name: String, // subject
    #[serde(rename = "type")]
    pub kind: String, // lecture, lab, tutorial, ...
    pub teacher: String,
    pub location: String,
    #[serde(deserialize_with = "deserialize_local")]
    pub start: DateTime<Local>,
    #[serde(deserialize_with = "deserialize_local")]
    pub end: DateTime<Local>,
}

impl Event {
    pub fn new(
        name: &str,
        kind: &str,
        teacher: &str,
        location: &str,
        start: DateTime<Local>,
        end: DateTime<Local>,
    ) -> Self {
        Self {
            name: name.to_string(),
            kind: kind.to_string(),
            teacher: teacher.to_string(),
            location: location.to_string(),
            start,
            end,
        }
    }
}
