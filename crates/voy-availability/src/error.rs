//! Error types for task loading and clock setup.
//!
//! The search itself is infallible; these errors only arise at the data-model
//! boundary, before any task reaches the engine.

use chrono::NaiveDateTime;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Invalid date/time '{0}', expected yyyy-MM-dd HH:mm")]
    InvalidDateTime(String),

    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    /// An event whose end precedes its start.
    #[error("Invalid interval for '{description}': {to} is before {from}")]
    InvalidInterval {
        description: String,
        from: NaiveDateTime,
        to: NaiveDateTime,
    },

    #[error("Task JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, EngineError>;
