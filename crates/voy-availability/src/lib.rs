//! # voy-availability
//!
//! Deterministic earliest-free-slot search for the Voy task tracker.
//!
//! Given a snapshot of tasks and a requested duration, the engine walks the
//! next seven days and returns the first start time at which the duration fits
//! inside the 09:00–22:00 window without touching any scheduled event. The
//! engine never reads the system clock on its own: "now" is always supplied by
//! the caller, either directly or through a [`Clock`].
//!
//! ## Quick start
//!
//! ```rust
//! use voy_availability::{find_free_time, parse_datetime, SearchResult, Task};
//!
//! let now = parse_datetime("2026-03-02 08:00").unwrap();
//! let tasks = vec![Task::event(
//!     "standup",
//!     parse_datetime("2026-03-02 09:00").unwrap(),
//!     parse_datetime("2026-03-02 09:30").unwrap(),
//! )
//! .unwrap()];
//!
//! let result = find_free_time(&tasks, 60, now);
//! assert_eq!(result, SearchResult::Found(parse_datetime("2026-03-02 09:30").unwrap()));
//! ```
//!
//! ## Modules
//!
//! - [`interval`] — `TimeInterval`, `DayWindow` and the fixed window constants
//! - [`task`] — Task data model and the `Scheduled` read-only view
//! - [`extract`] — Tasks → busy blocks clipped to a day window
//! - [`merge`] — Busy blocks → sorted, disjoint cover
//! - [`scan`] — Merged blocks → earliest sufficient gap
//! - [`search`] — Multi-day orchestration and `SearchResult`
//! - [`clock`] — Injected "now" (`FixedClock`, `ZonedClock`)
//! - [`display`] — Human-readable slot formatting
//! - [`error`] — Error types

pub mod clock;
pub mod display;
pub mod error;
pub mod extract;
pub mod interval;
pub mod merge;
pub mod scan;
pub mod search;
pub mod task;

pub use clock::{Clock, FixedClock, ZonedClock};
pub use display::{format_datetime, format_slot};
pub use error::EngineError;
pub use extract::extract_busy_blocks;
pub use interval::{BusyBlock, DayWindow, TimeInterval, DAY_END_HOUR, DAY_START_HOUR};
pub use merge::merge_intervals;
pub use scan::find_first_gap;
pub use search::{
    find_free_time, find_free_time_with_clock, search, FreeSlot, SearchRequest, SearchResult,
    HORIZON_DAYS,
};
pub use task::{format_datetime_compact, parse_datetime, parse_tasks, Scheduled, Task, TaskKind};
