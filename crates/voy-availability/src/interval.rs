//! Interval value types: busy intervals and the daily search window.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;

/// Hour (local wall-clock) at which every day window opens.
pub const DAY_START_HOUR: i64 = 9;

/// Hour (local wall-clock) at which every day window closes.
pub const DAY_END_HOUR: i64 = 22;

/// A closed time range `[start, end]` with minute resolution.
///
/// Zero-length intervals are allowed. An interval whose end precedes its start
/// is a caller bug and is rejected by [`TimeInterval::new`] with a panic. The
/// fields are public for reading and for struct literals in tests; intervals
/// built that way are re-checked when they enter the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct TimeInterval {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl TimeInterval {
    /// Create an interval.
    ///
    /// # Panics
    ///
    /// Panics if `end < start`. Task intervals are validated when tasks are
    /// built (see [`crate::task::Task::event`]), so reaching this means the
    /// upstream contract was broken.
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        assert!(start <= end, "interval end {end} is before start {start}");
        Self { start, end }
    }

    /// Length of the interval in whole minutes.
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }

    /// Half-open overlap test: `[a, b)` and `[c, d)` overlap iff `a < d && c < b`.
    ///
    /// Adjacent intervals (one ends exactly where the other starts) do not overlap.
    pub fn overlaps(&self, other: &TimeInterval) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// A busy interval contributed by a scheduled task, already clipped to the
/// day window being examined.
pub type BusyBlock = TimeInterval;

/// The searchable part of one calendar day, 09:00 to 22:00.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayWindow {
    date: NaiveDate,
    interval: TimeInterval,
}

impl DayWindow {
    /// The window for the given calendar date.
    pub fn for_date(date: NaiveDate) -> Self {
        let midnight = date.and_time(NaiveTime::MIN);
        Self {
            date,
            interval: TimeInterval {
                start: midnight + Duration::hours(DAY_START_HOUR),
                end: midnight + Duration::hours(DAY_END_HOUR),
            },
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn start(&self) -> NaiveDateTime {
        self.interval.start
    }

    pub fn end(&self) -> NaiveDateTime {
        self.interval.end
    }

    pub fn interval(&self) -> TimeInterval {
        self.interval
    }
}
