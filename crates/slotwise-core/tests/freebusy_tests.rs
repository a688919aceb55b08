//! Tests for busy merging and free-gap computation.

use chrono::{DateTime, TimeZone, Utc};
use slotwise_core::freebusy::{free_slots, merge_busy};
use slotwise_core::interval::{BusyInterval, TimeInterval};

/// Helper to build an instant on 2026-03-16 (a Monday).
fn at(hour: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 16, hour, min, 0).unwrap()
}

fn window(start_h: u32, start_m: u32, end_h: u32, end_m: u32) -> TimeInterval {
    TimeInterval::new(at(start_h, start_m), at(end_h, end_m))
}

fn busy(start_h: u32, start_m: u32, end_h: u32, end_m: u32) -> BusyInterval {
    BusyInterval::new("primary", at(start_h, start_m), at(end_h, end_m))
}

// ── Empty calendar: hour-aligned candidates ─────────────────────────────────

#[test]
fn empty_calendar_emits_hour_aligned_candidates() {
    // Window 09:00-18:00, min 60 → candidates at 09:00, 10:00, ..., 17:00.
    let slots = free_slots(&window(9, 0, 18, 0), &[], 60);

    assert_eq!(slots.len(), 9);
    assert_eq!(slots[0].start, at(9, 0));
    assert_eq!(slots[1].start, at(10, 0));
    assert_eq!(slots[2].start, at(11, 0));
    for slot in &slots {
        assert_eq!(slot.duration_minutes(), 60);
    }
}

#[test]
fn empty_calendar_candidates_overlap_on_long_durations() {
    // min 120 with hourly starts: [09:00-11:00), [10:00-12:00), [11:00-13:00)...
    // Candidates intentionally overlap; they are start-time options, not a
    // packing of the window.
    let slots = free_slots(&window(9, 0, 13, 0), &[], 120);

    assert_eq!(slots.len(), 3);
    assert_eq!(slots[0].start, at(9, 0));
    assert_eq!(slots[0].end, at(11, 0));
    assert_eq!(slots[1].start, at(10, 0));
    assert!(slots[0].overlaps(&slots[1]));
}

#[test]
fn empty_calendar_cursor_advances_to_next_whole_hour() {
    // Window starts mid-hour: the first candidate starts at 09:30, the
    // second snaps to 10:00 (the next whole hour), not 10:30.
    let slots = free_slots(&window(9, 30, 12, 0), &[], 60);

    assert_eq!(slots.len(), 3);
    assert_eq!(slots[0].start, at(9, 30));
    assert_eq!(slots[1].start, at(10, 0));
    assert_eq!(slots[2].start, at(11, 0));
}

// ── Busy merging ────────────────────────────────────────────────────────────

#[test]
fn overlapping_busy_intervals_merge() {
    // Busy 10:00-10:30 and 10:15-11:00 → merged cover 10:00-11:00.
    let merged = merge_busy(
        &[busy(10, 0, 10, 30), busy(10, 15, 11, 0)],
        &window(9, 0, 12, 0),
    );

    assert_eq!(merged.len(), 1);
    assert_eq!(merged[0].start, at(10, 0));
    assert_eq!(merged[0].end, at(11, 0));
}

#[test]
fn touching_busy_intervals_merge() {
    let merged = merge_busy(
        &[busy(10, 0, 10, 30), busy(10, 30, 11, 0)],
        &window(9, 0, 12, 0),
    );

    assert_eq!(merged.len(), 1);
    assert_eq!(merged[0].start, at(10, 0));
    assert_eq!(merged[0].end, at(11, 0));
}

#[test]
fn unsorted_input_merges_correctly() {
    let merged = merge_busy(
        &[busy(14, 0, 15, 0), busy(9, 0, 10, 0), busy(9, 30, 10, 30)],
        &window(8, 0, 17, 0),
    );

    assert_eq!(merged.len(), 2);
    assert_eq!(merged[0].start, at(9, 0));
    assert_eq!(merged[0].end, at(10, 30));
    assert_eq!(merged[1].start, at(14, 0));
}

#[test]
fn busy_outside_window_is_discarded() {
    let merged = merge_busy(
        &[busy(6, 0, 7, 0), busy(12, 0, 13, 0), busy(18, 0, 19, 0)],
        &window(9, 0, 17, 0),
    );

    assert_eq!(merged.len(), 1);
    assert_eq!(merged[0].start, at(12, 0));
}

#[test]
fn busy_straddling_window_is_clipped() {
    let merged = merge_busy(
        &[busy(8, 0, 9, 30), busy(16, 30, 18, 0)],
        &window(9, 0, 17, 0),
    );

    assert_eq!(merged.len(), 2);
    assert_eq!(merged[0].start, at(9, 0));
    assert_eq!(merged[0].end, at(9, 30));
    assert_eq!(merged[1].start, at(16, 30));
    assert_eq!(merged[1].end, at(17, 0));
}

// ── Free-gap computation ────────────────────────────────────────────────────

#[test]
fn overlapping_busy_yields_surrounding_gaps() {
    // Window 09:00-12:00, busy {10:00-10:30, 10:15-11:00}, min 30
    // → merged busy 10:00-11:00; free 09:00-10:00 and 11:00-12:00.
    let slots = free_slots(
        &window(9, 0, 12, 0),
        &[busy(10, 0, 10, 30), busy(10, 15, 11, 0)],
        30,
    );

    assert_eq!(slots.len(), 2);
    assert_eq!(slots[0].start, at(9, 0));
    assert_eq!(slots[0].end, at(10, 0));
    assert_eq!(slots[1].start, at(11, 0));
    assert_eq!(slots[1].end, at(12, 0));
}

#[test]
fn gaps_below_minimum_are_skipped() {
    // Only gap is 10:00-10:15 (15 min); a 30-minute search finds nothing,
    // a 15-minute search finds exactly it.
    let layout = [busy(9, 0, 10, 0), busy(10, 15, 12, 0)];

    assert!(free_slots(&window(9, 0, 12, 0), &layout, 30).is_empty());

    let slots = free_slots(&window(9, 0, 12, 0), &layout, 15);
    assert_eq!(slots.len(), 1);
    assert_eq!(slots[0].start, at(10, 0));
    assert_eq!(slots[0].end, at(10, 15));
}

#[test]
fn trailing_gap_is_emitted() {
    let slots = free_slots(&window(9, 0, 17, 0), &[busy(9, 0, 10, 0)], 60);

    assert_eq!(slots.len(), 1);
    assert_eq!(slots[0].start, at(10, 0));
    assert_eq!(slots[0].end, at(17, 0));
}

#[test]
fn window_shorter_than_minimum_yields_nothing() {
    assert!(free_slots(&window(9, 0, 9, 30), &[], 60).is_empty());
    assert!(free_slots(&window(9, 0, 9, 30), &[busy(9, 0, 9, 10)], 60).is_empty());
}

#[test]
fn fully_busy_window_yields_nothing() {
    assert!(free_slots(&window(9, 0, 12, 0), &[busy(9, 0, 12, 0)], 30).is_empty());
}

#[test]
fn busy_outside_window_does_not_leak_gaps() {
    // An early-morning commitment must not drag the cursor before the
    // window start; every gap stays inside the window.
    let slots = free_slots(
        &window(9, 0, 17, 0),
        &[busy(6, 0, 7, 0), busy(12, 0, 13, 0)],
        60,
    );

    assert_eq!(slots.len(), 2);
    assert_eq!(slots[0].start, at(9, 0));
    assert_eq!(slots[0].end, at(12, 0));
    assert_eq!(slots[1].start, at(13, 0));
    assert_eq!(slots[1].end, at(17, 0));
}

#[test]
fn multiple_gaps_between_busy_periods() {
    // Busy 09:00-10:00, 12:00-13:00, 15:00-16:00 in 08:00-18:00
    // → free 08:00-09:00, 10:00-12:00, 13:00-15:00, 16:00-18:00.
    let slots = free_slots(
        &window(8, 0, 18, 0),
        &[busy(9, 0, 10, 0), busy(12, 0, 13, 0), busy(15, 0, 16, 0)],
        60,
    );

    assert_eq!(slots.len(), 4);
    assert_eq!(slots[0].duration_minutes(), 60);
    assert_eq!(slots[1].duration_minutes(), 120);
    assert_eq!(slots[2].duration_minutes(), 120);
    assert_eq!(slots[3].duration_minutes(), 120);
}

#[test]
fn busy_from_multiple_calendars_merges_into_one_cover() {
    let slots = free_slots(
        &window(9, 0, 12, 0),
        &[
            BusyInterval::new("work", at(9, 30), at(10, 0)),
            BusyInterval::new("personal", at(9, 45), at(10, 30)),
        ],
        60,
    );

    assert_eq!(slots.len(), 1);
    assert_eq!(slots[0].start, at(10, 30));
    assert_eq!(slots[0].end, at(12, 0));
}
