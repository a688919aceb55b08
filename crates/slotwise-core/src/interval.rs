//! Time interval types and boundary instant parsing.
//!
//! Every instant inside the engine is a `DateTime<Utc>`. Offset-aware inputs
//! are converted at the boundary by [`parse_instant`]; naive inputs are
//! assumed UTC there. The algorithms themselves never see a naive instant.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};

/// A half-open time range `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeInterval {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeInterval {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// Check the `start < end` invariant, for fail-fast validation at
    /// operation entry.
    pub fn validate(&self) -> Result<()> {
        if self.start >= self.end {
            return Err(ScheduleError::InvalidWindow {
                start: self.start.to_rfc3339(),
                end: self.end.to_rfc3339(),
            });
        }
        Ok(())
    }

    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }

    /// Two half-open intervals overlap iff `a.start < b.end && b.start < a.end`.
    /// Touching intervals (one ends exactly when the other starts) do not.
    pub fn overlaps(&self, other: &TimeInterval) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Clip this interval to `window`, returning `None` when the two do not
    /// overlap at all.
    pub fn clip(&self, window: &TimeInterval) -> Option<TimeInterval> {
        if !self.overlaps(window) {
            return None;
        }
        Some(TimeInterval {
            start: self.start.max(window.start),
            end: self.end.min(window.end),
        })
    }
}

/// A busy period tagged with the calendar identity it came from.
///
/// Produced fresh for each scheduling query by the calendar-access
/// collaborator (or by [`crate::recurrence::expand_recurring`]); never
/// persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusyInterval {
    /// Opaque identifier for the source calendar (e.g., "primary",
    /// "work-google").
    pub calendar_id: String,
    #[serde(flatten)]
    pub interval: TimeInterval,
}

impl BusyInterval {
    pub fn new(calendar_id: impl Into<String>, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            calendar_id: calendar_id.into(),
            interval: TimeInterval::new(start, end),
        }
    }
}

/// Parse an instant string into `DateTime<Utc>`.
///
/// Accepts RFC 3339 with an explicit offset (`2026-03-16T09:00:00Z`,
/// `2026-03-16T09:00:00+02:00`) and bare naive datetimes
/// (`2026-03-16T09:00:00`), which are assumed UTC.
///
/// # Errors
///
/// Returns `ScheduleError::InvalidInstant` when the string matches neither
/// form.
pub fn parse_instant(s: &str) -> Result<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
        return Ok(naive.and_utc());
    }
    Err(ScheduleError::InvalidInstant(s.to_string()))
}
