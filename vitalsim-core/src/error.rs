// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error types for scheduler operations.
//!
//! All fallible scheduler calls return [`Result`]. Note that an interval of
//! exactly zero is only an error for `start`; `reconfigure` substitutes a
//! documented fallback delay instead (see [`crate::Interval`]).

/// Root error type for scheduler operations.
#[derive(Debug, thiserror::Error)]
pub enum SchedulerError {
    /// A non-positive sampling interval was supplied where a valid period
    /// is required.
    #[error("invalid sampling interval: {millis} ms (period must be positive)")]
    InvalidInterval {
        /// The rejected interval, in milliseconds.
        millis: i64,
    },

    /// `start` was called while the scheduler was already running.
    ///
    /// Replacing the active timer is the job of `reconfigure`; a second
    /// `start` would silently violate the one-active-timer invariant.
    #[error("scheduler is already running")]
    AlreadyRunning,

    /// `start` or `reconfigure` was called after `stop`. The stopped state
    /// is absorbing.
    #[error("scheduler has been stopped")]
    Stopped,
}

impl SchedulerError {
    /// Create an [`SchedulerError::InvalidInterval`] for the given value.
    pub const fn invalid_interval(millis: i64) -> Self {
        Self::InvalidInterval { millis }
    }
}

/// Specialized `Result` type for scheduler operations.
pub type Result<T> = std::result::Result<T, SchedulerError>;
