//! Property-based tests for merging and free-time search using proptest.
//!
//! The search is checked against a brute-force reference that tries every
//! minute of every day window in order.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use proptest::prelude::*;
use voy_availability::{
    extract_busy_blocks, find_free_time, merge_intervals, DayWindow, SearchResult, TimeInterval,
    HORIZON_DAYS,
};

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

fn base() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 3, 2)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

/// An interval starting somewhere in the first `days` days, up to 10 hours long.
fn arb_interval(days: i64) -> impl Strategy<Value = TimeInterval> {
    (0..days * 24 * 60, 0i64..=600).prop_map(|(offset, len)| {
        let start = base() + Duration::minutes(offset);
        TimeInterval::new(start, start + Duration::minutes(len))
    })
}

fn arb_day_intervals() -> impl Strategy<Value = Vec<TimeInterval>> {
    prop::collection::vec(arb_interval(1), 0..20)
}

fn arb_week_intervals() -> impl Strategy<Value = Vec<TimeInterval>> {
    prop::collection::vec(arb_interval(HORIZON_DAYS as i64), 0..60)
}

fn arb_duration() -> impl Strategy<Value = i64> {
    1i64..=300
}

/// "now" anywhere on the first day.
fn arb_now() -> impl Strategy<Value = NaiveDateTime> {
    (0i64..24 * 60).prop_map(|offset| base() + Duration::minutes(offset))
}

fn config() -> ProptestConfig {
    ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Whether the minute starting at `t` is covered by any interval.
fn minute_covered(intervals: &[TimeInterval], t: NaiveDateTime) -> bool {
    intervals.iter().any(|iv| iv.start <= t && t < iv.end)
}

/// Reference search: try each minute of each day window in order.
fn brute_force(busy: &[TimeInterval], duration: i64, now: NaiveDateTime) -> SearchResult {
    for day in 0..HORIZON_DAYS as u64 {
        let window = DayWindow::for_date(now.date() + chrono::Days::new(day));
        let clipped = extract_busy_blocks(busy, &window);
        let mut t = window.start();
        while t + Duration::minutes(duration) <= window.end() {
            let slot = TimeInterval::new(t, t + Duration::minutes(duration));
            if !clipped.iter().any(|b| slot.overlaps(b)) {
                return SearchResult::Found(t);
            }
            t += Duration::minutes(1);
        }
    }
    SearchResult::NotFound
}

// ---------------------------------------------------------------------------
// Property 1: Merging an already-merged set changes nothing
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn merge_is_idempotent(intervals in arb_day_intervals()) {
        let once = merge_intervals(intervals);
        let twice = merge_intervals(once.clone());
        prop_assert_eq!(once, twice);
    }
}

// ---------------------------------------------------------------------------
// Property 2: Merged output is sorted and strictly separated
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn merge_output_is_strictly_separated(intervals in arb_day_intervals()) {
        let merged = merge_intervals(intervals);
        for pair in merged.windows(2) {
            prop_assert!(
                pair[0].end < pair[1].start,
                "blocks not separated: {:?}",
                pair
            );
        }
    }
}

// ---------------------------------------------------------------------------
// Property 3: Merging neither loses nor invents busy time
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn merge_preserves_coverage(intervals in arb_day_intervals()) {
        let merged = merge_intervals(intervals.clone());

        let total: i64 = merged.iter().map(TimeInterval::duration_minutes).sum();
        let mut covered = 0i64;
        let mut t = base();
        let end = base() + Duration::hours(36);
        while t < end {
            let before = minute_covered(&intervals, t);
            prop_assert_eq!(before, minute_covered(&merged, t), "coverage differs at {}", t);
            if before {
                covered += 1;
            }
            t += Duration::minutes(1);
        }
        prop_assert_eq!(total, covered);
    }
}

// ---------------------------------------------------------------------------
// Property 4: A found slot fits its window and overlaps no busy time
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn found_slot_never_overlaps_busy_time(
        busy in arb_week_intervals(),
        duration in arb_duration(),
        now in arb_now(),
    ) {
        if let SearchResult::Found(start) = find_free_time(&busy, duration, now) {
            let slot = TimeInterval::new(start, start + Duration::minutes(duration));
            let window = DayWindow::for_date(start.date());

            prop_assert!(slot.start >= window.start());
            prop_assert!(slot.end <= window.end());
            for block in &busy {
                prop_assert!(!slot.overlaps(block), "slot {:?} overlaps {:?}", slot, block);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Property 5: The search returns exactly the earliest feasible slot
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn search_matches_brute_force(
        busy in arb_week_intervals(),
        duration in arb_duration(),
        now in arb_now(),
    ) {
        prop_assert_eq!(find_free_time(&busy, duration, now), brute_force(&busy, duration, now));
    }
}

// ---------------------------------------------------------------------------
// Property 6: Non-positive durations never find anything
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn non_positive_duration_is_never_found(
        busy in arb_week_intervals(),
        duration in -600i64..=0,
        now in arb_now(),
    ) {
        prop_assert_eq!(find_free_time(&busy, duration, now), SearchResult::NotFound);
    }
}
