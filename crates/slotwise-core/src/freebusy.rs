//! Busy-interval merging and free-gap computation.
//!
//! Sorts busy intervals by start time, merges overlapping or touching
//! periods into a minimal disjoint cover, then walks the cover emitting the
//! gaps that satisfy the minimum duration. An empty calendar is handled
//! separately: candidates are generated at whole-hour boundaries so starts
//! align to human-friendly times.

use chrono::{DateTime, Duration, Utc};

use crate::interval::{BusyInterval, TimeInterval};

/// Merge overlapping or touching busy intervals into a sorted, disjoint
/// cover, clipped to `window`.
///
/// Intervals entirely outside the window are discarded. The union of the
/// returned intervals equals the union of the inputs intersected with the
/// window.
pub fn merge_busy(busy: &[BusyInterval], window: &TimeInterval) -> Vec<TimeInterval> {
    let mut intervals: Vec<TimeInterval> = busy
        .iter()
        .filter_map(|b| b.interval.clip(window))
        .collect();

    if intervals.is_empty() {
        return Vec::new();
    }

    intervals.sort_by_key(|iv| (iv.start, iv.end));

    let mut merged: Vec<TimeInterval> = Vec::new();
    for iv in intervals {
        if let Some(last) = merged.last_mut() {
            if iv.start <= last.end {
                last.end = last.end.max(iv.end);
                continue;
            }
        }
        merged.push(iv);
    }

    merged
}

/// Find free slots of at least `min_duration_minutes` within `window`.
///
/// With a non-empty busy set, returns the disjoint gaps between merged busy
/// periods, in ascending start order. With an empty busy set, returns
/// hour-aligned candidates of exactly the minimum duration: the first starts
/// at `window.start`, each subsequent one at the next whole-hour boundary,
/// so consecutive candidates intentionally overlap rather than packing
/// back-to-back.
///
/// A window shorter than the minimum duration yields no slots.
pub fn free_slots(
    window: &TimeInterval,
    busy: &[BusyInterval],
    min_duration_minutes: i64,
) -> Vec<TimeInterval> {
    let min_duration = Duration::minutes(min_duration_minutes);
    if window.end - window.start < min_duration {
        return Vec::new();
    }

    if busy.is_empty() {
        return hourly_candidates(window, min_duration);
    }

    let merged = merge_busy(busy, window);

    let mut slots = Vec::new();
    let mut cursor = window.start;

    for busy_iv in &merged {
        if busy_iv.start - cursor >= min_duration {
            slots.push(TimeInterval::new(cursor, busy_iv.start));
        }
        cursor = cursor.max(busy_iv.end);
    }

    // Trailing gap after the last busy period.
    if window.end - cursor >= min_duration {
        slots.push(TimeInterval::new(cursor, window.end));
    }

    slots
}

/// Candidate slots for an empty calendar, one per whole-hour start.
fn hourly_candidates(window: &TimeInterval, min_duration: Duration) -> Vec<TimeInterval> {
    let mut slots = Vec::new();
    let mut cursor = window.start;

    while cursor + min_duration <= window.end {
        slots.push(TimeInterval::new(cursor, cursor + min_duration));
        cursor = next_hour_after(cursor);
    }

    slots
}

/// The whole-hour boundary strictly after `t`.
fn next_hour_after(t: DateTime<Utc>) -> DateTime<Utc> {
    let into_hour = Duration::seconds(t.timestamp().rem_euclid(3600))
        + Duration::nanoseconds(i64::from(t.timestamp_subsec_nanos()));
    t - into_hour + Duration::hours(1)
}
