//! The caller-facing slot-finding operation.
//!
//! Validates the request once, runs the Interval Engine over the busy set
//! the caller fetched, and dispatches to the mode-appropriate filter and
//! ranking. Calendar I/O happens entirely outside: a collaborator that
//! fails to fetch busy periods should pass an empty set, which the engine
//! treats as a fully free window.

use crate::error::Result;
use crate::freebusy::free_slots;
use crate::interval::BusyInterval;
use crate::request::{RequestKind, SchedulingRequest};
use crate::selector::{filter_and_score_individual, filter_by_preference, rank_collaborative, ScoredSlot};

/// Find and rank candidate slots for `request` against the caller-supplied
/// busy intervals.
///
/// The free-gap search uses the buffer-padded total duration for individual
/// requests, so buffered events only land in gaps with room for their
/// padding. An empty result is a valid answer, not an error.
///
/// # Errors
///
/// Fails fast on invalid request parameters (see
/// [`SchedulingRequest::validate`]) before any interval computation.
pub fn find_slots(request: &SchedulingRequest, busy: &[BusyInterval]) -> Result<Vec<ScoredSlot>> {
    request.validate()?;

    let gaps = free_slots(&request.window, busy, request.effective_minimum_minutes());

    let ranked = match &request.kind {
        RequestKind::Collaborative { participants } => {
            let filtered = filter_by_preference(
                &gaps,
                request.time_preference,
                request.timezone,
                request.preference_policy,
            );
            rank_collaborative(&filtered, request.priority, participants, request.timezone)
        }
        RequestKind::Individual { activity_type, .. } => {
            // The request's priority rides along for parity with the
            // collaborative path; individual ranking is the activity score
            // alone.
            filter_and_score_individual(
                &gaps,
                request.time_preference,
                *activity_type,
                request.timezone,
                request.preference_policy,
            )
        }
    };

    Ok(ranked)
}
