use crate::core::calculator::percentage::percentage_completed;
use crate::core::calculator::schedule::{self, GroupBy};
use crate::core::calculator::status;
use crate::core::clock::Clock;
use crate::models::date_range::DateRange;
use crate::models::event::Event;
use crate::models::group_record::GroupRecord;
use crate::models::stats::{ScheduleStats, StatusStats};
use crate::models::status::StatusSample;
use serde::Serialize;

/// One line of a breakdown, flattened for tables and CSV.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupRow {
    pub group: String,
    pub key: String,
    pub spent_minutes: f64,
    pub total_minutes: f64,
    pub percentage: f64,
}

impl GroupRow {
    fn from_record(group: GroupBy, rec: &GroupRecord) -> Self {
        Self {
            group: group.label().to_string(),
            key: rec.key.clone(),
            spent_minutes: rec.spent,
            total_minutes: rec.total,
            percentage: percentage_completed(rec.spent, rec.total),
        }
    }
}

/// Entry points used by the CLI: the statistics bound to one clock.
pub struct Core<'a> {
    clock: &'a dyn Clock,
}

impl<'a> Core<'a> {
    pub fn new(clock: &'a dyn Clock) -> Self {
        Self { clock }
    }

    pub fn schedule(&self, events: &[Event], range: &DateRange, limit_hour: u32) -> Option<ScheduleStats> {
        schedule::get_schedule_stats(Some(events), range, limit_hour, self.clock)
    }

    pub fn status(&self, samples: &[StatusSample]) -> Option<StatusStats> {
        status::get_status_stats(Some(samples))
    }

    /// Breakdown of one field of `stats`.
    pub fn records_for(stats: &ScheduleStats, group: GroupBy) -> &[GroupRecord] {
        match group {
            GroupBy::Subject => &stats.min_by_subjects,
            GroupBy::Type => &stats.min_by_type,
            GroupBy::Teacher => &stats.min_by_teachers,
            GroupBy::Location => &stats.min_by_locations,
        }
    }

    pub fn group_rows_for(stats: &ScheduleStats, group: GroupBy) -> Vec<GroupRow> {
        Self::records_for(stats, group)
            .iter()
            .map(|rec| GroupRow::from_record(group, rec))
            .collect()
    }

    /// All four breakdowns as flat rows, in `GroupBy::ALL` order.
    pub fn group_rows(stats: &ScheduleStats) -> Vec<GroupRow> {
        GroupBy::ALL
            .iter()
            .flat_map(|&group| Self::group_rows_for(stats, group))
            .collect()
    }
}
