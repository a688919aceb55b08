//! Event drafts for the persisting collaborator.
//!
//! Once the caller picks a slot, the engine can describe exactly what to
//! persist: the main event over the real duration and, for buffered
//! individual events, separate padding events flanking it. The drafts carry
//! the title/description/attendee shapes the calendar backend expects; the
//! backend itself lives outside this crate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::buffer::derive_buffer_boundaries;
use crate::interval::TimeInterval;
use crate::request::{ActivityType, RequestKind, SchedulingRequest};

/// A calendar event ready to be persisted by the calendar-access
/// collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventDraft {
    pub title: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub description: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub attendees: Vec<String>,
}

impl EventDraft {
    fn over(interval: TimeInterval, title: String, description: String) -> Self {
        Self {
            title,
            start: interval.start,
            end: interval.end,
            description,
            location: None,
            attendees: Vec::new(),
        }
    }
}

/// The full set of events to persist for a chosen slot: the main event plus
/// any buffer events. Buffers are separate bookable entries, never merged
/// into the main event's range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingPlan {
    pub main: EventDraft,
    #[serde(default)]
    pub buffer_before: Option<EventDraft>,
    #[serde(default)]
    pub buffer_after: Option<EventDraft>,
}

impl BookingPlan {
    /// Materialize the drafts for `title` at `slot_start`.
    ///
    /// The main event runs for the request's bare duration; buffer events
    /// (individual requests only) are titled `"Buffer before: <title>"` /
    /// `"Buffer after: <title>"`. Collaborative plans carry the participant
    /// list as attendees; individual plans record the activity type in the
    /// description.
    pub fn build(request: &SchedulingRequest, title: &str, slot_start: DateTime<Utc>) -> Self {
        let buffer = match &request.kind {
            RequestKind::Individual { buffer, .. } => buffer.as_ref(),
            RequestKind::Collaborative { .. } => None,
        };

        let bounds = derive_buffer_boundaries(slot_start, request.duration_minutes, buffer);

        let mut description = format!("Priority: {}", request.priority);
        let mut attendees = Vec::new();
        match &request.kind {
            RequestKind::Individual { activity_type, .. } => {
                description.push_str(&format!("\nActivity type: {}", activity_label(*activity_type)));
            }
            RequestKind::Collaborative { participants } => {
                attendees = participants.iter().cloned().collect();
            }
        }

        let mut main = EventDraft::over(bounds.main, title.to_string(), description);
        main.attendees = attendees;

        let buffer_before = bounds.before.map(|iv| {
            EventDraft::over(
                iv,
                format!("Buffer before: {title}"),
                "Buffer time before event".to_string(),
            )
        });
        let buffer_after = bounds.after.map(|iv| {
            EventDraft::over(
                iv,
                format!("Buffer after: {title}"),
                "Buffer time after event".to_string(),
            )
        });

        Self {
            main,
            buffer_before,
            buffer_after,
        }
    }
}

fn activity_label(activity: ActivityType) -> &'static str {
    match activity {
        ActivityType::Work => "work",
        ActivityType::Exercise => "exercise",
        ActivityType::Personal => "personal",
    }
}
