//! Multi-day free-time search.
//!
//! Walks day windows starting from the caller's "now", running
//! extract → merge → scan for each day, and stops at the first day that has
//! room for the requested duration.

use chrono::{Days, Duration, NaiveDateTime};
use serde::Serialize;

use crate::clock::Clock;
use crate::extract::extract_busy_blocks;
use crate::interval::DayWindow;
use crate::merge::merge_intervals;
use crate::scan::find_first_gap;
use crate::task::Scheduled;

/// Number of days examined, starting with the day containing "now".
pub const HORIZON_DAYS: u32 = 7;

/// Inputs to a single search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchRequest {
    duration_minutes: i64,
    horizon_days: u32,
    now: NaiveDateTime,
}

impl SearchRequest {
    pub fn new(duration_minutes: i64, now: NaiveDateTime) -> Self {
        Self {
            duration_minutes,
            horizon_days: HORIZON_DAYS,
            now,
        }
    }

    pub fn duration_minutes(&self) -> i64 {
        self.duration_minutes
    }

    pub fn horizon_days(&self) -> u32 {
        self.horizon_days
    }

    pub fn now(&self) -> NaiveDateTime {
        self.now
    }
}

/// Outcome of a search: the start of the earliest slot, or nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchResult {
    Found(NaiveDateTime),
    NotFound,
}

impl SearchResult {
    pub fn is_found(&self) -> bool {
        matches!(self, SearchResult::Found(_))
    }

    pub fn slot_start(&self) -> Option<NaiveDateTime> {
        match self {
            SearchResult::Found(start) => Some(*start),
            SearchResult::NotFound => None,
        }
    }

    /// Expand a found result into the full slot it stands for.
    ///
    /// Returns `None` for `NotFound`, and also when `duration_minutes` pushes
    /// the end past chrono's representable range.
    pub fn slot(&self, duration_minutes: i64) -> Option<FreeSlot> {
        let start = self.slot_start()?;
        let end = Duration::try_minutes(duration_minutes)
            .and_then(|duration| start.checked_add_signed(duration))?;
        Some(FreeSlot {
            start,
            end,
            duration_minutes,
        })
    }
}

/// A found slot with both ends filled in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FreeSlot {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub duration_minutes: i64,
}

/// Run the search described by `request` over `tasks`.
///
/// A non-positive duration returns [`SearchResult::NotFound`] without
/// examining any day. Day 0 is the calendar day of `request.now()`; its window
/// is not clipped to `now`, so a slot earlier than `now` on that day can be
/// returned when `now` falls inside the window.
pub fn search<T: Scheduled>(tasks: &[T], request: &SearchRequest) -> SearchResult {
    let duration_minutes = request.duration_minutes();
    if duration_minutes <= 0 {
        tracing::debug!(duration_minutes, "non-positive duration, skipping search");
        return SearchResult::NotFound;
    }

    let today = request.now().date();
    for day in 0..request.horizon_days() {
        let Some(date) = today.checked_add_days(Days::new(u64::from(day))) else {
            break;
        };
        let window = DayWindow::for_date(date);

        let busy = extract_busy_blocks(tasks, &window);
        let extracted = busy.len();
        let merged = merge_intervals(busy);
        tracing::debug!(
            %date,
            window_start = %window.start(),
            window_end = %window.end(),
            busy_blocks = extracted,
            merged_blocks = merged.len(),
            "examining day"
        );

        if let Some(start) = find_first_gap(&merged, &window, duration_minutes) {
            tracing::debug!(%start, day, "free slot found");
            return SearchResult::Found(start);
        }
    }

    tracing::debug!(horizon_days = request.horizon_days(), "no free slot within horizon");
    SearchResult::NotFound
}

/// Find the earliest slot of `duration_minutes` in the seven days starting at `now`.
///
/// # Arguments
///
/// * `tasks` — Snapshot of task records; only time-blocked ones count as busy.
/// * `duration_minutes` — Required slot length. Zero or negative yields `NotFound`.
/// * `now` — The caller's current moment, in the same local time as the tasks.
pub fn find_free_time<T: Scheduled>(
    tasks: &[T],
    duration_minutes: i64,
    now: NaiveDateTime,
) -> SearchResult {
    search(tasks, &SearchRequest::new(duration_minutes, now))
}

/// Like [`find_free_time`], reading "now" once from `clock`.
pub fn find_free_time_with_clock<T: Scheduled, C: Clock + ?Sized>(
    tasks: &[T],
    duration_minutes: i64,
    clock: &C,
) -> SearchResult {
    find_free_time(tasks, duration_minutes, clock.now())
}
