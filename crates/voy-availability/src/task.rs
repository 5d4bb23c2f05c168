//! Task data model as seen by the availability engine.
//!
//! The tracker has three kinds of task. Only events occupy time; todos and
//! deadlines are untimed as far as availability is concerned. The kind is
//! decided once, when a task is built or deserialized, and the engine reads
//! it through the [`Scheduled`] trait.
//!
//! Serialized tasks use the tracker's `yyyy-MM-dd HH:mm` timestamp format:
//!
//! ```json
//! [
//!   {"type": "todo", "description": "read book"},
//!   {"type": "deadline", "description": "return book", "by": "2026-03-06 18:00"},
//!   {"type": "event", "description": "project meeting", "from": "2026-03-02 14:00", "to": "2026-03-02 16:00", "done": true}
//! ]
//! ```

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};
use crate::interval::TimeInterval;

const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Read-only view the engine needs from a task record.
pub trait Scheduled {
    /// The interval this record occupies, or `None` for untimed records.
    fn time_block(&self) -> Option<TimeInterval>;
}

/// What kind of task this is, and the timestamps that come with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TaskKind {
    Todo,
    Deadline {
        #[serde(with = "minute_format")]
        by: NaiveDateTime,
    },
    Event {
        #[serde(with = "minute_format")]
        from: NaiveDateTime,
        #[serde(with = "minute_format")]
        to: NaiveDateTime,
    },
}

impl TaskKind {
    pub fn is_time_blocked(&self) -> bool {
        matches!(self, TaskKind::Event { .. })
    }
}

/// A task in the tracker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub description: String,
    #[serde(default)]
    pub done: bool,
    #[serde(flatten)]
    pub kind: TaskKind,
}

impl Task {
    pub fn todo(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            done: false,
            kind: TaskKind::Todo,
        }
    }

    pub fn deadline(description: impl Into<String>, by: NaiveDateTime) -> Self {
        Self {
            description: description.into(),
            done: false,
            kind: TaskKind::Deadline { by },
        }
    }

    /// Build an event spanning `from..to`.
    ///
    /// # Errors
    /// Returns `EngineError::InvalidInterval` if `to` is before `from`.
    /// Zero-length events are accepted.
    pub fn event(
        description: impl Into<String>,
        from: NaiveDateTime,
        to: NaiveDateTime,
    ) -> Result<Self> {
        let task = Self {
            description: description.into(),
            done: false,
            kind: TaskKind::Event { from, to },
        };
        task.validate()?;
        Ok(task)
    }

    /// Check the invariants that the engine relies on.
    pub fn validate(&self) -> Result<()> {
        match self.kind {
            TaskKind::Event { from, to } if to < from => Err(EngineError::InvalidInterval {
                description: self.description.clone(),
                from,
                to,
            }),
            _ => Ok(()),
        }
    }
}

impl Scheduled for Task {
    fn time_block(&self) -> Option<TimeInterval> {
        match self.kind {
            TaskKind::Event { from, to } => Some(TimeInterval::new(from, to)),
            TaskKind::Todo | TaskKind::Deadline { .. } => None,
        }
    }
}

impl Scheduled for TimeInterval {
    /// # Panics
    ///
    /// Panics if the interval was built by hand with `end < start`.
    fn time_block(&self) -> Option<TimeInterval> {
        Some(TimeInterval::new(self.start, self.end))
    }
}

impl<T: Scheduled + ?Sized> Scheduled for &T {
    fn time_block(&self) -> Option<TimeInterval> {
        (**self).time_block()
    }
}

/// Parse a `yyyy-MM-dd HH:mm` timestamp (surrounding whitespace is ignored).
pub fn parse_datetime(raw: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw.trim(), DATETIME_FORMAT)
        .map_err(|_| EngineError::InvalidDateTime(raw.to_string()))
}

/// Render a timestamp in the same `yyyy-MM-dd HH:mm` format [`parse_datetime`] accepts.
pub fn format_datetime_compact(dt: NaiveDateTime) -> String {
    dt.format(DATETIME_FORMAT).to_string()
}

/// Deserialize a JSON array of tasks and validate every event interval.
///
/// # Errors
/// Returns `EngineError::Json` for malformed JSON or timestamps, and
/// `EngineError::InvalidInterval` for an event that ends before it starts.
pub fn parse_tasks(json: &str) -> Result<Vec<Task>> {
    let tasks: Vec<Task> = serde_json::from_str(json)?;
    for task in &tasks {
        task.validate()?;
    }
    Ok(tasks)
}

mod minute_format {
    use chrono::NaiveDateTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(dt: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_datetime_compact(*dt))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_datetime(&raw).map_err(de::Error::custom)
    }
}
