use crate::utils::date::deserialize_local;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// One heartbeat: whether the watched service answered at `date`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatusSample {
    #[serde(deserialize_with = "deserialize_local")]
    pub date: DateTime<Local>,
    pub alive: bool,
}

impl StatusSample {
    pub fn new(date: DateTime<Local>, alive: bool) -> Self {
        Self { date, alive }
    }
}
