// src/export/model.rs

use crate::models::stats::StatusStats;
use serde::Serialize;

/// Flat CSV row for a status summary.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct StatusRow {
    pub percentage: f64,
    pub alive_times: usize,
    pub currently_alive: bool,
    pub first_update: String,
    pub last_update: String,
    pub num_of_updates: usize,
}

impl From<&StatusStats> for StatusRow {
    fn from(s: &StatusStats) -> Self {
        Self {
            percentage: s.percentage,
            alive_times: s.alive_times,
            currently_alive: s.currently_alive,
            first_update: s.first_update.to_rfc3339(),
            last_update: s.last_update.to_rfc3339(),
            num_of_updates: s.num_of_updates,
        }
    }
}
