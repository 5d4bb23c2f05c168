//! Turn a task snapshot into busy blocks for one day window.

use crate::interval::{BusyBlock, DayWindow};
use crate::task::Scheduled;

/// Collect the busy blocks that time-blocked tasks contribute to `window`.
///
/// A task contributes unless it ends strictly before the window opens or
/// starts strictly after it closes, so a task that merely touches a window
/// edge yields a zero-length block. Every contributed interval is clipped to
/// the window. Untimed tasks are skipped.
///
/// The output is in task order and may contain overlapping blocks; run it
/// through [`crate::merge::merge_intervals`] before scanning.
pub fn extract_busy_blocks<T: Scheduled>(tasks: &[T], window: &DayWindow) -> Vec<BusyBlock> {
    tasks
        .iter()
        .filter_map(|task| task.time_block())
        .filter(|block| !(block.end < window.start() || block.start > window.end()))
        .map(|block| BusyBlock {
            start: block.start.max(window.start()),
            end: block.end.min(window.end()),
        })
        .collect()
}
