//! Error types.
//!
//! Time parsing and duration arithmetic fail with [`TimeError`]. The
//! generation ledger rejects commits that would break its invariants with
//! [`GenerationError`]. Neither ever aborts a generation run: assigners turn
//! them into warnings and skip the affected template instance.

use chrono::NaiveDate;
use thiserror::Error;

/// Result alias for time utilities.
pub type TimeResult<T> = Result<T, TimeError>;

/// Failure parsing or comparing time-of-day values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeError {
    /// Wrong number of `:`-separated components.
    #[error("invalid time format: '{0}' (expected HH:mm or HH:mm:ss)")]
    InvalidFormat(String),
    /// Non-numeric or out-of-range component.
    #[error("invalid time value: '{0}'")]
    InvalidValue(String),
    /// End is not after start.
    #[error("invalid time range: end {end} is not after start {start}")]
    InvalidRange {
        /// Range start (`HH:mm:ss`).
        start: String,
        /// Range end (`HH:mm:ss`).
        end: String,
    },
}

impl TimeError {
    pub(crate) fn format(input: impl Into<String>) -> Self {
        TimeError::InvalidFormat(input.into())
    }

    pub(crate) fn value(input: impl Into<String>) -> Self {
        TimeError::InvalidValue(input.into())
    }
}

/// Rejected ledger commit.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// The worker already holds a shift on that date.
    #[error("worker '{worker_id}' already has a shift on {date}")]
    WorkerAlreadyScheduled {
        /// Worker id.
        worker_id: String,
        /// Occupied date.
        date: NaiveDate,
    },
    /// The assignment does not reference the shift it is committed with.
    #[error("assignment '{assignment_id}' does not belong to shift '{shift_id}'")]
    AssignmentMismatch {
        /// Assignment id.
        assignment_id: String,
        /// Shift id.
        shift_id: String,
    },
    /// The assignment's resolved bounds fall outside its shift.
    #[error("assignment '{assignment_id}' lies outside the bounds of shift '{shift_id}'")]
    AssignmentOutOfBounds {
        /// Assignment id.
        assignment_id: String,
        /// Shift id.
        shift_id: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            TimeError::format("14").to_string(),
            "invalid time format: '14' (expected HH:mm or HH:mm:ss)"
        );
        assert_eq!(
            TimeError::value("25:30").to_string(),
            "invalid time value: '25:30'"
        );

        let err = GenerationError::WorkerAlreadyScheduled {
            worker_id: "W1".into(),
            date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
        };
        assert_eq!(err.to_string(), "worker 'W1' already has a shift on 2024-01-02");
    }
}
