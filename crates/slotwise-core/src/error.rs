//! Error types for scheduling operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("Invalid window: end ({end}) must be after start ({start})")]
    InvalidWindow { start: String, end: String },

    #[error("Duration must be positive, got {0} minutes")]
    InvalidDuration(i64),

    #[error("Priority must be between 1 and 5, got {0}")]
    InvalidPriority(u8),

    #[error("Buffer minutes must be non-negative, got {0}")]
    InvalidBuffer(i64),

    #[error("Invalid instant: {0}")]
    InvalidInstant(String),

    #[error("Invalid recurrence rule: {0}")]
    InvalidRule(String),

    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),
}

pub type Result<T> = std::result::Result<T, ScheduleError>;
