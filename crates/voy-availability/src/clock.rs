//! Sources of "now" for callers that do not want to pass a timestamp directly.
//!
//! The engine works in local wall-clock time, the same time the tasks are
//! written in. [`ZonedClock`] converts the system clock into a named IANA zone;
//! [`FixedClock`] always returns the same instant.

use chrono::{NaiveDateTime, Utc};
use chrono_tz::Tz;

use crate::error::{EngineError, Result};

/// Source of the caller's current moment.
pub trait Clock: Send + Sync {
    /// The current local wall-clock time.
    fn now(&self) -> NaiveDateTime;
}

/// A clock frozen at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// The system clock, viewed from a particular timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZonedClock {
    tz: Tz,
}

impl ZonedClock {
    /// # Errors
    /// Returns `EngineError::InvalidTimezone` if `timezone` is not a valid IANA identifier.
    pub fn new(timezone: &str) -> Result<Self> {
        let tz: Tz = timezone
            .parse()
            .map_err(|_| EngineError::InvalidTimezone(timezone.to_string()))?;
        Ok(Self { tz })
    }

    pub fn timezone(&self) -> Tz {
        self.tz
    }
}

impl Clock for ZonedClock {
    fn now(&self) -> NaiveDateTime {
        Utc::now().with_timezone(&self.tz).naive_local()
    }
}
