//! Preference filtering and heuristic slot scoring.
//!
//! All time-of-day and weekday tests run on the slot start converted to the
//! request timezone. Scores are multiplicative heuristics; sorting is stable,
//! so equal scores keep their input (chronological) order.

use std::collections::BTreeSet;

use chrono::{DateTime, Datelike, Timelike};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::interval::TimeInterval;
use crate::request::{ActivityType, PreferencePolicy, TimePreference};

/// A candidate slot with its derived ranking score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoredSlot {
    #[serde(flatten)]
    pub interval: TimeInterval,
    pub score: f64,
}

/// Keep slots whose local start hour falls in the preferred day-part:
/// morning `[5, 12)`, afternoon `[12, 17)`, evening `[17, 23)`.
///
/// `NoPreference` passes everything through. Under [`PreferencePolicy::Soft`]
/// a non-empty input never filters down to nothing: when no slot matches,
/// the first input slot is returned alone, so a preference mismatch degrades
/// to "here is something" rather than "no options".
pub fn filter_by_preference(
    slots: &[TimeInterval],
    preference: TimePreference,
    timezone: Tz,
    policy: PreferencePolicy,
) -> Vec<TimeInterval> {
    if preference == TimePreference::NoPreference {
        return slots.to_vec();
    }

    let filtered: Vec<TimeInterval> = slots
        .iter()
        .filter(|slot| {
            let hour = slot.start.with_timezone(&timezone).hour();
            match preference {
                TimePreference::Morning => (5..12).contains(&hour),
                TimePreference::Afternoon => (12..17).contains(&hour),
                TimePreference::Evening => (17..23).contains(&hour),
                TimePreference::NoPreference => true,
            }
        })
        .copied()
        .collect();

    if filtered.is_empty() && policy == PreferencePolicy::Soft {
        if let Some(first) = slots.first() {
            return vec![*first];
        }
    }

    filtered
}

/// Score and rank candidates for a collaborative event.
///
/// Per-slot score, multiplicative from `1.0`:
///
/// - `×1.5` when the local start falls in business hours `[09:00, 17:00)`
/// - `×1.2` when the local start falls on a weekday (Monday–Friday)
/// - `× priority / 3.0`
///
/// Returned in descending score order; ties keep input order.
///
/// `participants` is part of the contract for future per-participant
/// weighting and does not affect scoring today.
pub fn rank_collaborative(
    slots: &[TimeInterval],
    priority: u8,
    _participants: &BTreeSet<String>,
    timezone: Tz,
) -> Vec<ScoredSlot> {
    let mut scored: Vec<ScoredSlot> = slots
        .iter()
        .map(|slot| {
            let local = slot.start.with_timezone(&timezone);
            let mut score = 1.0;
            if in_business_hours(local.hour()) {
                score *= 1.5;
            }
            if is_weekday(&local) {
                score *= 1.2;
            }
            score *= f64::from(priority) / 3.0;
            ScoredSlot {
                interval: *slot,
                score,
            }
        })
        .collect();

    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    scored
}

/// Filter by preference, then score candidates for an individual activity.
///
/// Activity bonus from the local start:
///
/// - exercise: `1.5` before noon, else `1.0`
/// - work: `1.5` in business hours `[09:00, 17:00)`, else `0.8`
/// - personal: `1.5` from 17:00 onward or on a weekend, else `1.0`
///
/// Returned in descending score order; ties keep input order.
pub fn filter_and_score_individual(
    slots: &[TimeInterval],
    preference: TimePreference,
    activity: ActivityType,
    timezone: Tz,
    policy: PreferencePolicy,
) -> Vec<ScoredSlot> {
    let filtered = filter_by_preference(slots, preference, timezone, policy);

    let mut scored: Vec<ScoredSlot> = filtered
        .iter()
        .map(|slot| {
            let local = slot.start.with_timezone(&timezone);
            ScoredSlot {
                interval: *slot,
                score: activity_bonus(activity, &local),
            }
        })
        .collect();

    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    scored
}

fn activity_bonus(activity: ActivityType, local: &DateTime<Tz>) -> f64 {
    match activity {
        ActivityType::Exercise => {
            if local.hour() < 12 {
                1.5
            } else {
                1.0
            }
        }
        ActivityType::Work => {
            if in_business_hours(local.hour()) {
                1.5
            } else {
                0.8
            }
        }
        ActivityType::Personal => {
            if local.hour() >= 17 || !is_weekday(local) {
                1.5
            } else {
                1.0
            }
        }
    }
}

fn in_business_hours(hour: u32) -> bool {
    (9..17).contains(&hour)
}

fn is_weekday(local: &DateTime<Tz>) -> bool {
    local.weekday().number_from_monday() <= 5
}
