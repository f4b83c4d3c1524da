//! Result of a generation run.

use chrono::{DateTime, NaiveDate, Utc};
use std::collections::HashMap;

use super::warning::GenerationWarning;
use crate::models::{ScheduledShift, ShiftAssignment};

/// Everything a run produced, ready for persistence.
#[derive(Debug, Clone)]
pub struct GenerationOutcome {
    /// New shifts, in commit order.
    pub shifts: Vec<ScheduledShift>,
    /// New assignments, in commit order.
    pub assignments: Vec<ShiftAssignment>,
    /// Instances skipped because of data problems.
    pub warnings: Vec<GenerationWarning>,
    /// Final accumulated hours per worker (prior hours included).
    pub worker_hours: HashMap<String, f64>,
    /// Creation timestamp shared by every record.
    pub generated_at: DateTime<Utc>,
}

impl GenerationOutcome {
    /// Human-readable warnings.
    pub fn warning_messages(&self) -> Vec<String> {
        self.warnings.iter().map(|w| w.to_string()).collect()
    }

    /// Whether the run raised no warnings.
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }

    /// Number of shifts created.
    pub fn shift_count(&self) -> usize {
        self.shifts.len()
    }

    /// Shifts on a date.
    pub fn shifts_on(&self, date: NaiveDate) -> Vec<&ScheduledShift> {
        self.shifts.iter().filter(|s| s.shift_date == date).collect()
    }

    /// Shifts held by a worker.
    pub fn shifts_for_worker(&self, worker_id: &str) -> Vec<&ScheduledShift> {
        self.shifts
            .iter()
            .filter(|s| s.worker_id == worker_id)
            .collect()
    }

    /// The shift instantiated from a template on a date, if it was filled.
    pub fn shift_for_template_on(&self, template_id: &str, date: NaiveDate) -> Option<&ScheduledShift> {
        self.shifts
            .iter()
            .find(|s| s.template_id == template_id && s.shift_date == date)
    }

    /// Assignments linked to a shift.
    pub fn assignments_for_shift(&self, shift_id: &str) -> Vec<&ShiftAssignment> {
        self.assignments
            .iter()
            .filter(|a| a.scheduled_shift_id == shift_id)
            .collect()
    }

    /// Final accumulated hours of a worker (0 if never seen).
    pub fn hours_for(&self, worker_id: &str) -> f64 {
        self.worker_hours.get(worker_id).copied().unwrap_or(0.0)
    }
}
