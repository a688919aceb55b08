//! Buffer padding arithmetic.
//!
//! Buffers are booked as separate calendar entries flanking the main event,
//! so the free-gap search must already account for them: the padded total
//! duration is what gets fed to the Interval Engine as the minimum gap
//! length for individual requests.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::interval::TimeInterval;
use crate::request::Buffer;

/// The intervals a chosen slot decomposes into: the real event plus any
/// buffer padding around it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BufferBoundaries {
    /// The main event, `[slot_start, slot_start + duration)`.
    pub main: TimeInterval,
    /// Padding immediately before the main event, when requested.
    pub before: Option<TimeInterval>,
    /// Padding immediately after the main event, when requested.
    pub after: Option<TimeInterval>,
}

/// Total minutes a buffered event occupies: the event itself plus both pads.
pub fn total_duration_with_buffer(duration_minutes: i64, buffer: Option<&Buffer>) -> i64 {
    match buffer {
        Some(b) => duration_minutes + b.before_minutes + b.after_minutes,
        None => duration_minutes,
    }
}

/// Split a chosen slot start into the main event interval and its buffer
/// intervals.
///
/// The main event occupies `[start, start + duration)`. A positive
/// `before_minutes` yields `[start - before, start)`; a positive
/// `after_minutes` yields `[start + duration, start + duration + after)`.
/// Zero-length pads produce `None` rather than empty intervals.
pub fn derive_buffer_boundaries(
    slot_start: DateTime<Utc>,
    duration_minutes: i64,
    buffer: Option<&Buffer>,
) -> BufferBoundaries {
    let main_end = slot_start + Duration::minutes(duration_minutes);
    let main = TimeInterval::new(slot_start, main_end);

    let before = buffer
        .filter(|b| b.before_minutes > 0)
        .map(|b| TimeInterval::new(slot_start - Duration::minutes(b.before_minutes), slot_start));

    let after = buffer
        .filter(|b| b.after_minutes > 0)
        .map(|b| TimeInterval::new(main_end, main_end + Duration::minutes(b.after_minutes)));

    BufferBoundaries {
        main,
        before,
        after,
    }
}
