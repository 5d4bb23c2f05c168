//! Find the earliest gap in a day window that fits a duration.

use chrono::NaiveDateTime;

use crate::interval::{DayWindow, TimeInterval};

/// Return the earliest start `t` in `window` such that `[t, t + duration)`
/// avoids every busy block and ends no later than the window closes.
///
/// `busy` must be sorted and disjoint, as produced by
/// [`crate::merge::merge_intervals`]. A gap of exactly `duration_minutes` is
/// accepted. The first sufficient gap wins even if a later one is larger.
pub fn find_first_gap(
    busy: &[TimeInterval],
    window: &DayWindow,
    duration_minutes: i64,
) -> Option<NaiveDateTime> {
    let mut cursor = window.start();

    for block in busy {
        tracing::trace!(start = %block.start, end = %block.end, %cursor, "scanning busy block");

        let gap_minutes = (block.start - cursor).num_minutes();
        if gap_minutes >= duration_minutes {
            return Some(cursor);
        }
        if block.end > cursor {
            cursor = block.end;
        }
    }

    // Trailing gap after the last busy block.
    let gap_minutes = (window.end() - cursor).num_minutes();
    (gap_minutes >= duration_minutes).then_some(cursor)
}
