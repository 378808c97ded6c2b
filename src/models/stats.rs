use super::group_record::GroupRecord;
use chrono::{DateTime, Local};
use serde::Serialize;

/// Aggregated view of a timetable, relative to the clock's "now".
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleStats {
    pub percentage: f64,
    pub min_total: f64,
    pub min_spent: f64,
    pub min_by_subjects: Vec<GroupRecord>,
    pub min_by_type: Vec<GroupRecord>,
    pub min_by_teachers: Vec<GroupRecord>,
    pub min_by_locations: Vec<GroupRecord>,
    pub num_of_class_after: usize,
}

/// Uptime summary of a heartbeat series.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusStats {
    pub percentage: f64,
    pub alive_times: usize,
    pub currently_alive: bool,
    pub first_update: DateTime<Local>,
    pub last_update: DateTime<Local>,
    pub num_of_updates: usize,
}
