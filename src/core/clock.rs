//! Source of "now" for every statistics call.
//!
//! Aggregations never read the wall clock directly: they receive a [`Clock`]
//! so the CLI can pin time with `--now` and tests stay deterministic.
//!
//! ```
//! use chrono::{Local, TimeZone};
//! use schedstats::core::clock::{Clock, FixedClock};
//!
//! let at = Local.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap();
//! let clock = FixedClock::new(at);
//! assert_eq!(clock.now(), at);
//! ```

use chrono::{DateTime, Local};

pub trait Clock: Send + Sync {
    /// Current local wall-clock time.
    fn now(&self) -> DateTime<Local>;
}

/// Real system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Clock frozen at a given instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    at: DateTime<Local>,
}

impl FixedClock {
    pub fn new(at: DateTime<Local>) -> Self {
        Self { at }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.at
    }
}
