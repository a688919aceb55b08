//! The scheduling request model.
//!
//! A request is an explicit tagged value — collaborative or individual, with
//! mode-specific fields — validated once via [`SchedulingRequest::validate`]
//! before any interval computation. Free-text inputs that the original
//! front-ends collect loosely (time preference, activity type) deserialize
//! leniently: unrecognized values fall back to their defaults instead of
//! failing, matching the soft, best-effort nature of preference matching.

use std::collections::BTreeSet;

use chrono_tz::Tz;
use serde::{Deserialize, Deserializer, Serialize};

use crate::buffer::total_duration_with_buffer;
use crate::error::{Result, ScheduleError};
use crate::interval::TimeInterval;

/// Preferred day-part for the slot start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TimePreference {
    Morning,
    Afternoon,
    Evening,
    #[default]
    #[serde(rename = "none")]
    NoPreference,
}

impl TimePreference {
    /// Lenient parse; anything unrecognized means no preference.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "morning" => Self::Morning,
            "afternoon" => Self::Afternoon,
            "evening" => Self::Evening,
            _ => Self::NoPreference,
        }
    }
}

impl<'de> Deserialize<'de> for TimePreference {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Self::parse(&s))
    }
}

/// What an individual event is for. Drives the activity bonus score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityType {
    Work,
    Exercise,
    #[default]
    Personal,
}

impl ActivityType {
    /// Lenient parse; anything unrecognized is treated as personal.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "work" => Self::Work,
            "exercise" => Self::Exercise,
            _ => Self::Personal,
        }
    }
}

impl<'de> Deserialize<'de> for ActivityType {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Self::parse(&s))
    }
}

/// How preference filtering treats a candidate set that matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PreferencePolicy {
    /// A preference mismatch never empties a non-empty candidate set: the
    /// first candidate survives as a fallback.
    #[default]
    Soft,
    /// Non-matching candidates are dropped unconditionally.
    Strict,
}

/// Padding reserved immediately before/after an event, booked as separate
/// calendar entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Buffer {
    #[serde(default)]
    pub before_minutes: i64,
    #[serde(default)]
    pub after_minutes: i64,
}

/// Mode-specific request fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum RequestKind {
    /// A meeting with other people. `participants` is informational in this
    /// engine — per-participant calendars are not fetched here; the caller
    /// hands in one merged busy set.
    Collaborative {
        #[serde(default)]
        participants: BTreeSet<String>,
    },
    /// A solo activity, optionally padded with buffer time.
    Individual {
        #[serde(default)]
        activity_type: ActivityType,
        #[serde(default)]
        buffer: Option<Buffer>,
    },
}

/// A complete scheduling request. Pure value; the engine holds no state
/// between requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchedulingRequest {
    /// The window to search, `[start, end)`.
    pub window: TimeInterval,
    /// Length of the event itself, excluding buffers.
    pub duration_minutes: i64,
    /// 1 (lowest) to 5 (highest).
    #[serde(default = "default_priority")]
    pub priority: u8,
    #[serde(default)]
    pub time_preference: TimePreference,
    /// Timezone in which day-parts, business hours, and weekends are
    /// evaluated.
    #[serde(default = "default_timezone")]
    pub timezone: Tz,
    #[serde(default)]
    pub preference_policy: PreferencePolicy,
    #[serde(flatten)]
    pub kind: RequestKind,
}

fn default_priority() -> u8 {
    3
}

fn default_timezone() -> Tz {
    Tz::UTC
}

impl SchedulingRequest {
    /// Fail-fast parameter validation, run once before any interval
    /// computation.
    ///
    /// # Errors
    ///
    /// - `InvalidWindow` when `window.end <= window.start`
    /// - `InvalidDuration` when `duration_minutes <= 0`
    /// - `InvalidPriority` when `priority` is outside `[1, 5]`
    /// - `InvalidBuffer` when a buffer pad is negative
    pub fn validate(&self) -> Result<()> {
        self.window.validate()?;
        if self.duration_minutes <= 0 {
            return Err(ScheduleError::InvalidDuration(self.duration_minutes));
        }
        if !(1..=5).contains(&self.priority) {
            return Err(ScheduleError::InvalidPriority(self.priority));
        }
        if let RequestKind::Individual {
            buffer: Some(buffer),
            ..
        } = &self.kind
        {
            if buffer.before_minutes < 0 {
                return Err(ScheduleError::InvalidBuffer(buffer.before_minutes));
            }
            if buffer.after_minutes < 0 {
                return Err(ScheduleError::InvalidBuffer(buffer.after_minutes));
            }
        }
        Ok(())
    }

    /// The minimum gap length the free-slot search must find: the bare
    /// duration for collaborative requests, the buffer-padded total for
    /// individual requests.
    pub fn effective_minimum_minutes(&self) -> i64 {
        match &self.kind {
            RequestKind::Individual { buffer, .. } => {
                total_duration_with_buffer(self.duration_minutes, buffer.as_ref())
            }
            RequestKind::Collaborative { .. } => self.duration_minutes,
        }
    }
}
