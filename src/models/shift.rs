//! Generated shift records.
//!
//! A [`ScheduledShift`] is one concrete, filled template instance. A
//! [`ShiftAssignment`] links a worker to it. Assigners always build the two
//! together, so every shift has at least one assignment from the moment it
//! exists.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use super::ShiftTemplate;

/// A filled template instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledShift {
    /// Generated identifier.
    pub id: String,
    /// Calendar date (`yyyy-MM-dd` on the wire).
    pub shift_date: NaiveDate,
    /// Originating template.
    pub template_id: String,
    /// Worker holding the shift.
    pub worker_id: String,
    /// Location (copied from the template).
    pub location_id: String,
    /// Position (copied from the template).
    pub position_id: String,
    /// Start time (copied from the template at generation time).
    pub start_time: NaiveTime,
    /// End time (copied from the template at generation time).
    pub end_time: NaiveTime,
    /// Whether a recurring assignment produced this shift.
    pub is_recurring_generated: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl ScheduledShift {
    /// Instantiates `template` on `date` for `worker_id`.
    pub fn from_template(
        id: impl Into<String>,
        template: &ShiftTemplate,
        worker_id: impl Into<String>,
        shift_date: NaiveDate,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            shift_date,
            template_id: template.id.clone(),
            worker_id: worker_id.into(),
            location_id: template.location_id.clone(),
            position_id: template.position_id.clone(),
            start_time: template.start_time,
            end_time: template.end_time,
            is_recurring_generated: false,
            created_at,
        }
    }

    /// Marks the shift as produced by a recurring assignment.
    pub fn recurring(mut self) -> Self {
        self.is_recurring_generated = true;
        self
    }
}

/// Role a worker holds on a shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssignmentType {
    Lead,
    Regular,
    Training,
}

/// Unknown assignment type string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown assignment type: '{0}' (expected lead, regular or training)")]
pub struct ParseAssignmentTypeError(pub String);

impl AssignmentType {
    /// Wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            AssignmentType::Lead => "lead",
            AssignmentType::Regular => "regular",
            AssignmentType::Training => "training",
        }
    }
}

impl fmt::Display for AssignmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssignmentType {
    type Err = ParseAssignmentTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lead" => Ok(AssignmentType::Lead),
            "regular" => Ok(AssignmentType::Regular),
            "training" => Ok(AssignmentType::Training),
            other => Err(ParseAssignmentTypeError(other.to_string())),
        }
    }
}

/// A worker-to-shift link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftAssignment {
    /// Generated identifier.
    pub id: String,
    /// Shift this assignment belongs to.
    pub scheduled_shift_id: String,
    /// Assigned worker.
    pub worker_id: String,
    /// Role on the shift.
    pub assignment_type: AssignmentType,
    /// Set by manual edits; generator output is always `false`.
    pub is_manual_override: bool,
    /// Resolved start. May be later than the shift start for partial coverage.
    pub assigned_start: Option<NaiveTime>,
    /// Resolved end. May be earlier than the shift end for partial coverage.
    pub assigned_end: Option<NaiveTime>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl ShiftAssignment {
    /// Creates a full-coverage assignment for `shift`.
    pub fn for_shift(
        id: impl Into<String>,
        shift: &ScheduledShift,
        assignment_type: AssignmentType,
    ) -> Self {
        Self {
            id: id.into(),
            scheduled_shift_id: shift.id.clone(),
            worker_id: shift.worker_id.clone(),
            assignment_type,
            is_manual_override: false,
            assigned_start: Some(shift.start_time),
            assigned_end: Some(shift.end_time),
            created_at: shift.created_at,
        }
    }

    /// Narrows the resolved bounds.
    pub fn with_bounds(mut self, start: NaiveTime, end: NaiveTime) -> Self {
        self.assigned_start = Some(start);
        self.assigned_end = Some(end);
        self
    }

    /// Whether the resolved bounds lie within the shift's nominal bounds.
    ///
    /// A missing bound defaults to the shift's own.
    pub fn is_within(&self, shift: &ScheduledShift) -> bool {
        let start = self.assigned_start.unwrap_or(shift.start_time);
        let end = self.assigned_end.unwrap_or(shift.end_time);
        start >= shift.start_time && end <= shift.end_time && start <= end
    }
}
