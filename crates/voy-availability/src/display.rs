//! Human-readable rendering of found slots, e.g. `Mar 2 2026 09:00AM`.

use chrono::{Duration, NaiveDateTime};

const DISPLAY_FORMAT: &str = "%b %-d %Y %I:%M%p";

pub fn format_datetime(dt: NaiveDateTime) -> String {
    dt.format(DISPLAY_FORMAT).to_string()
}

/// Render a slot as `"<start> to <end>"`.
///
/// # Panics
///
/// Panics if `start + duration_minutes` is outside chrono's representable
/// range. Slots returned by a search are at most one day window long; use
/// [`crate::search::SearchResult::slot`] for a checked expansion.
pub fn format_slot(start: NaiveDateTime, duration_minutes: i64) -> String {
    let end = start + Duration::minutes(duration_minutes);
    format!("{} to {}", format_datetime(start), format_datetime(end))
}
