use chrono::{DateTime, Local};

/// Optional `(begin, finish)` window applied to events before aggregation.
///
/// The window is only active when both bounds are set. With a single bound
/// the filter is disabled altogether and every event is counted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub begin: Option<DateTime<Local>>,
    pub finish: Option<DateTime<Local>>,
}

impl DateRange {
    pub fn new(begin: Option<DateTime<Local>>, finish: Option<DateTime<Local>>) -> Self {
        Self { begin, finish }
    }

    /// No filtering at all.
    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn between(begin: DateTime<Local>, finish: DateTime<Local>) -> Self {
        Self {
            begin: Some(begin),
            finish: Some(finish),
        }
    }

    pub fn is_active(&self) -> bool {
        self.begin.is_some() && self.finish.is_some()
    }

    /// Both bounds are exclusive: the interval must start strictly after
    /// `begin` and end strictly before `finish`.
    pub fn includes(&self, start: &DateTime<Local>, end: &DateTime<Local>) -> bool {
        match (self.begin, self.finish) {
            (Some(begin), Some(finish)) => *start > begin && *end < finish,
            _ => true,
        }
    }
}
