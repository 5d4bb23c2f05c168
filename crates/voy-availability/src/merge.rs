//! Coalesce busy blocks into a sorted, disjoint cover.

use crate::interval::TimeInterval;

/// Merge overlapping or touching intervals.
///
/// Intervals are sorted by start (then end) and folded left to right. An
/// interval that starts at or before the running interval's end extends it, so
/// two blocks that touch end-to-start become one and no zero-width gap is ever
/// left between them.
///
/// The result satisfies `out[i].end < out[i + 1].start` for every adjacent pair.
pub fn merge_intervals(mut intervals: Vec<TimeInterval>) -> Vec<TimeInterval> {
    if intervals.is_empty() {
        return intervals;
    }

    intervals.sort_by_key(|interval| (interval.start, interval.end));

    let mut merged: Vec<TimeInterval> = Vec::with_capacity(intervals.len());
    for interval in intervals {
        if let Some(current) = merged.last_mut() {
            if interval.start <= current.end {
                current.end = current.end.max(interval.end);
                continue;
            }
        }
        merged.push(interval);
    }

    merged
}
