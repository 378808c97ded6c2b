use crate::core::clock::Clock;
use crate::models::date_range::DateRange;
use crate::models::group_record::GroupRecord;
use crate::utils::time::{minutes_between, spent_minutes};
use chrono::{DateTime, Local};
use std::cmp::Ordering;
use std::collections::HashMap;
use tracing::trace;

/// Keyed minute accumulator.
///
/// Every `(key, start, end)` that passes the date window is folded into a
/// single [`GroupRecord`] per key. "Spent" minutes are measured against one
/// `now` snapshot taken at construction, so all entries of a run agree on it.
#[derive(Debug)]
pub struct MinuteCounter {
    records: Vec<GroupRecord>,
    index: HashMap<String, usize>,
    range: DateRange,
    now: DateTime<Local>,
}

impl MinuteCounter {
    pub fn new(range: DateRange, clock: &dyn Clock) -> Self {
        Self {
            records: Vec::new(),
            index: HashMap::new(),
            range,
            now: clock.now(),
        }
    }

    pub fn now(&self) -> DateTime<Local> {
        self.now
    }

    /// Adds one interval to `key`. Returns `false` when the date window
    /// rejected it.
    pub fn record(&mut self, key: &str, start: &DateTime<Local>, end: &DateTime<Local>) -> bool {
        if !self.range.includes(start, end) {
            trace!(key, %start, %end, "interval outside date range");
            return false;
        }

        let total = minutes_between(start, end);
        let spent = spent_minutes(start, end, &self.now);

        match self.index.get(key) {
            Some(&pos) => {
                let rec = &mut self.records[pos];
                rec.total += total;
                rec.spent += spent;
            }
            None => {
                self.index.insert(key.to_string(), self.records.len());
                self.records.push(GroupRecord::new(key, spent, total));
            }
        }

        true
    }

    /// Longest groups first; on equal totals the one with less elapsed time
    /// comes first. Stable, hence idempotent.
    pub fn sort(&mut self) {
        if self.records.len() < 2 {
            return;
        }

        self.records.sort_by(by_total_then_spent);

        for (pos, rec) in self.records.iter().enumerate() {
            if let Some(slot) = self.index.get_mut(&rec.key) {
                *slot = pos;
            }
        }
    }

    /// Records in their current order (first-seen order until sorted).
    pub fn records(&self) -> &[GroupRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sorts and hands out the records.
    pub fn into_records(mut self) -> Vec<GroupRecord> {
        self.sort();
        self.records
    }
}

/// Descending `total`, then ascending `spent`.
pub fn by_total_then_spent(a: &GroupRecord, b: &GroupRecord) -> Ordering {
    b.total
        .total_cmp(&a.total)
        .then_with(|| a.spent.total_cmp(&b.spent))
}
