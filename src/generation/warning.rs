//! Non-fatal generation warnings.
//!
//! Warnings report data problems that forced a template instance to be
//! skipped. An instance left empty because nobody was eligible is NOT a
//! warning; callers detect it by the absence of a shift.

use chrono::NaiveDate;
use std::fmt;
use thiserror::Error;

use crate::error::{GenerationError, TimeError};
use crate::models::{AssignmentType, ShiftTemplate};
use crate::time::DayOfWeek;

/// Which assigner was filling the instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShiftKind {
    /// Recurring-assignment application.
    Recurring,
    /// Lead-shift assigner.
    Lead,
    /// Dynamic (regular) shift assigner.
    Dynamic,
}

impl ShiftKind {
    /// Assignment type recorded for an instance of `template` filled by this kind.
    pub fn assignment_type(&self, template: &ShiftTemplate) -> AssignmentType {
        match self {
            ShiftKind::Lead => AssignmentType::Lead,
            ShiftKind::Dynamic => AssignmentType::Regular,
            ShiftKind::Recurring if template.is_lead() => AssignmentType::Lead,
            ShiftKind::Recurring => AssignmentType::Regular,
        }
    }
}

impl fmt::Display for ShiftKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ShiftKind::Recurring => "recurring",
            ShiftKind::Lead => "lead",
            ShiftKind::Dynamic => "dynamic",
        })
    }
}

/// A skipped template instance, with the reason.
///
/// `Display` renders the human-readable message surfaced to users.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationWarning {
    #[error("Missing operating hours for {day} at location {location_id}. Cannot assign {kind} shift for template {template_id}.")]
    MissingOperatingHours {
        day: DayOfWeek,
        location_id: String,
        template_id: String,
        kind: ShiftKind,
    },

    #[error("Invalid shift duration for template {template_id} ({source}). Cannot assign {kind} shift on {date}.")]
    InvalidDuration {
        template_id: String,
        date: NaiveDate,
        kind: ShiftKind,
        source: TimeError,
    },

    #[error("Date {date} is outside the target week. Cannot assign {kind} shift for template {template_id}.")]
    DateOutsideWeek {
        date: NaiveDate,
        template_id: String,
        kind: ShiftKind,
    },

    #[error("Could not record {kind} shift for template {template_id} on {date}: {source}")]
    Rejected {
        template_id: String,
        date: NaiveDate,
        kind: ShiftKind,
        source: GenerationError,
    },

    #[error("Recurring assignment {assignment_id} references unknown worker {worker_id}.")]
    RecurringUnknownWorker {
        assignment_id: String,
        worker_id: String,
    },

    #[error("Recurring assignment {assignment_id} references unknown template {template_id}.")]
    RecurringUnknownTemplate {
        assignment_id: String,
        template_id: String,
    },

    #[error("Recurring assignment {assignment_id} skipped: worker {worker_id} is inactive.")]
    RecurringInactiveWorker {
        assignment_id: String,
        worker_id: String,
    },

    #[error("Recurring assignment {assignment_id} skipped on {date}: worker {worker_id} already has a shift that day.")]
    RecurringWorkerOccupied {
        assignment_id: String,
        worker_id: String,
        date: NaiveDate,
    },

    #[error("Recurring assignment {assignment_id} skipped on {date}: template {template_id} is already filled.")]
    RecurringInstanceTaken {
        assignment_id: String,
        template_id: String,
        date: NaiveDate,
    },
}
