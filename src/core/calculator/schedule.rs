//! Timetable statistics: global completion, the four per-field breakdowns and
//! the late-class counter.

use crate::core::calculator::minute_counter::MinuteCounter;
use crate::core::calculator::percentage::percentage_completed;
use crate::core::clock::Clock;
use crate::models::date_range::DateRange;
use crate::models::event::Event;
use crate::models::group_record::GroupRecord;
use crate::models::stats::ScheduleStats;
use crate::utils::time::{ends_after_hour, minutes_between, spent_minutes};
use tracing::debug;

/// Event field used as grouping key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupBy {
    Subject,
    Type,
    Teacher,
    Location,
}

impl GroupBy {
    pub const ALL: [GroupBy; 4] = [
        GroupBy::Subject,
        GroupBy::Type,
        GroupBy::Teacher,
        GroupBy::Location,
    ];

    pub fn key_of<'a>(&self, event: &'a Event) -> &'a str {
        match self {
            GroupBy::Subject => &event.name,
            GroupBy::Type => &event.kind,
            GroupBy::Teacher => &event.teacher,
            GroupBy::Location => &event.location,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GroupBy::Subject => "subject",
            GroupBy::Type => "type",
            GroupBy::Teacher => "teacher",
            GroupBy::Location => "location",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MinuteTotals {
    pub spent: f64,
    pub total: f64,
}

/// Sorted per-key minutes for one event field.
pub fn minutes_by(
    events: &[Event],
    range: &DateRange,
    clock: &dyn Clock,
    group: GroupBy,
) -> Vec<GroupRecord> {
    let mut counter = MinuteCounter::new(*range, clock);

    for event in events {
        counter.record(group.key_of(event), &event.start, &event.end);
    }

    debug!(
        group = group.label(),
        keys = counter.len(),
        now = %counter.now(),
        "grouped schedule minutes"
    );
    counter.into_records()
}

/// Global spent/total minutes over the events inside `range`.
pub fn total_and_spent_minutes(events: &[Event], range: &DateRange, clock: &dyn Clock) -> MinuteTotals {
    let now = clock.now();
    let mut totals = MinuteTotals::default();
    let mut included = 0usize;

    for event in events.iter().filter(|e| range.includes(&e.start, &e.end)) {
        totals.total += minutes_between(&event.start, &event.end);
        totals.spent += spent_minutes(&event.start, &event.end, &now);
        included += 1;
    }

    debug!(
        filtered = range.is_active(),
        included,
        excluded = events.len() - included,
        total = totals.total,
        spent = totals.spent,
        "schedule totals"
    );
    totals
}

/// Number of events ending strictly after `limit_hour` on their own end day.
/// The date window is not applied here.
pub fn number_of_class_after(events: &[Event], limit_hour: u32) -> usize {
    events
        .iter()
        .filter(|e| ends_after_hour(&e.end, limit_hour))
        .count()
}

/// Full timetable summary, or `None` when there is no event list at all.
///
/// Each part reads the clock on its own; with a [`FixedClock`] they all
/// agree, with the system clock they differ by the time the call takes.
///
/// [`FixedClock`]: crate::core::clock::FixedClock
pub fn get_schedule_stats(
    events: Option<&[Event]>,
    range: &DateRange,
    limit_hour: u32,
    clock: &dyn Clock,
) -> Option<ScheduleStats> {
    let events = events?;
    let totals = total_and_spent_minutes(events, range, clock);

    Some(ScheduleStats {
        percentage: percentage_completed(totals.spent, totals.total),
        min_total: totals.total,
        min_spent: totals.spent,
        min_by_subjects: minutes_by(events, range, clock, GroupBy::Subject),
        min_by_type: minutes_by(events, range, clock, GroupBy::Type),
        min_by_teachers: minutes_by(events, range, clock, GroupBy::Teacher),
        min_by_locations: minutes_by(events, range, clock, GroupBy::Location),
        num_of_class_after: number_of_class_after(events, limit_hour),
    })
}
