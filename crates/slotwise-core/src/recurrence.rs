//! Recurring busy patterns — RFC 5545 rules expanded into concrete busy
//! intervals.
//!
//! A calendar source can hand the engine a recurring commitment ("standup
//! every weekday at 09:30") instead of enumerating its occurrences. This
//! module expands such a pattern within the query window so the Interval
//! Engine only ever sees concrete intervals. Wraps the `rrule` crate with
//! `chrono-tz` for timezone-correct occurrence starts.

use chrono::{NaiveDateTime, Utc};
use rrule::RRuleSet;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};
use crate::interval::{BusyInterval, TimeInterval};

/// Expansion cap, well above anything a bounded scheduling window produces.
const MAX_OCCURRENCES: u16 = 500;

/// A recurring busy pattern from one calendar source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecurringBusy {
    /// Opaque identifier for the source calendar.
    pub calendar_id: String,
    /// RFC 5545 RRULE body, e.g. `"FREQ=WEEKLY;BYDAY=MO,WE"`.
    pub rule: String,
    /// First occurrence start as a local datetime, e.g. `"2026-03-16T09:30:00"`.
    pub dtstart: String,
    /// Length of each occurrence in minutes.
    pub duration_minutes: i64,
    /// IANA timezone the pattern is anchored in.
    #[serde(default = "default_timezone")]
    pub timezone: String,
}

fn default_timezone() -> String {
    "UTC".to_string()
}

/// Expand a recurring busy pattern into the concrete busy intervals that
/// overlap `window`.
///
/// Expansion is bounded by the window end: when the rule carries neither
/// `UNTIL` nor `COUNT`, an `UNTIL` at the window end (in the pattern's
/// timezone) is injected so open-ended rules terminate.
///
/// # Errors
///
/// - `InvalidRule` when the rule is empty or unparseable
/// - `InvalidInstant` when `dtstart` is not a local datetime
/// - `InvalidTimezone` when the timezone is not a valid IANA identifier
/// - `InvalidDuration` when `duration_minutes <= 0`
pub fn expand_recurring(pattern: &RecurringBusy, window: &TimeInterval) -> Result<Vec<BusyInterval>> {
    if pattern.rule.is_empty() {
        return Err(ScheduleError::InvalidRule("empty rule".to_string()));
    }
    if pattern.duration_minutes <= 0 {
        return Err(ScheduleError::InvalidDuration(pattern.duration_minutes));
    }

    let tz: chrono_tz::Tz = pattern
        .timezone
        .parse()
        .map_err(|_| ScheduleError::InvalidTimezone(pattern.timezone.clone()))?;

    let dtstart = NaiveDateTime::parse_from_str(&pattern.dtstart, "%Y-%m-%dT%H:%M:%S")
        .map_err(|_| ScheduleError::InvalidInstant(pattern.dtstart.clone()))?;

    // The rrule crate requires UNTIL and DTSTART to share a timezone: bare
    // local time under a TZID, with a trailing "Z" only for UTC.
    let upper = pattern.rule.to_uppercase();
    let mut rule = pattern.rule.clone();
    if !upper.contains("UNTIL=") && !upper.contains("COUNT=") {
        let mut until = window
            .end
            .with_timezone(&tz)
            .format("%Y%m%dT%H%M%S")
            .to_string();
        if pattern.timezone == "UTC" {
            until.push('Z');
        }
        rule = format!("{rule};UNTIL={until}");
    }

    let rrule_text = format!(
        "DTSTART;TZID={}:{}\nRRULE:{}",
        pattern.timezone,
        dtstart.format("%Y%m%dT%H%M%S"),
        rule
    );

    let rrule_set: RRuleSet = rrule_text
        .parse()
        .map_err(|e| ScheduleError::InvalidRule(format!("{e}")))?;

    let duration = chrono::Duration::minutes(pattern.duration_minutes);
    let occurrences = rrule_set.all(MAX_OCCURRENCES);

    Ok(occurrences
        .dates
        .into_iter()
        .map(|dt| {
            let start = dt.with_timezone(&Utc);
            TimeInterval::new(start, start + duration)
        })
        .filter(|iv| iv.overlaps(window))
        .map(|iv| BusyInterval {
            calendar_id: pattern.calendar_id.clone(),
            interval: iv,
        })
        .collect())
}
