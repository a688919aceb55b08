//! # slotwise-core
//!
//! Free-slot finding and ranking engine for calendar scheduling.
//!
//! Given a bounded time window and a set of busy intervals fetched from a
//! calendar backend, the engine computes the free gaps of sufficient
//! duration, filters them by time-of-day preference, and ranks them by a
//! heuristic score driven by the request (activity type, priority, weekday,
//! business hours). Everything here is a pure function over immutable
//! inputs: no I/O, no shared state, safe to call concurrently for
//! independent requests.
//!
//! Calendar access lives outside this crate. A collaborator fetches busy
//! periods and persists the chosen slot; this crate only consumes the busy
//! intervals it is handed and produces ranked candidates plus, on demand, a
//! [`booking::BookingPlan`] describing what to persist.
//!
//! ## Modules
//!
//! - [`interval`] — time interval types and the boundary instant parser
//! - [`freebusy`] — busy-interval merging and free-gap computation
//! - [`request`] — the validated scheduling request model
//! - [`selector`] — preference filtering and slot scoring
//! - [`buffer`] — buffer padding arithmetic
//! - [`planner`] — the caller-facing `find_slots` operation
//! - [`booking`] — event drafts for the persisting collaborator
//! - [`recurrence`] — recurring busy patterns → concrete busy intervals
//! - [`error`] — error types

pub mod booking;
pub mod buffer;
pub mod error;
pub mod freebusy;
pub mod interval;
pub mod planner;
pub mod recurrence;
pub mod request;
pub mod selector;

pub use booking::{BookingPlan, EventDraft};
pub use buffer::{derive_buffer_boundaries, total_duration_with_buffer, BufferBoundaries};
pub use error::{Result, ScheduleError};
pub use freebusy::{free_slots, merge_busy};
pub use interval::{parse_instant, BusyInterval, TimeInterval};
pub use planner::find_slots;
pub use recurrence::{expand_recurring, RecurringBusy};
pub use request::{
    ActivityType, Buffer, PreferencePolicy, RequestKind, SchedulingRequest, TimePreference,
};
pub use selector::{filter_by_preference, ScoredSlot};
