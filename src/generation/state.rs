//! Run-scoped generation ledger.
//!
//! One [`ScheduleGenerationState`] exists per generation run. Every commit
//! updates the worker's accumulated hours and per-day occupancy, which later
//! eligibility checks and rankings in the same run read back. The ledger is
//! append-only; nothing is removed within a run.

use chrono::{DateTime, NaiveDate, Utc};
use std::collections::{HashMap, HashSet};
use uuid::Uuid;

use super::options::{GenerationOptions, IdStrategy};
use crate::error::GenerationError;
use crate::models::{ScheduledShift, ShiftAssignment};

/// Mutable ledger for one generation run.
#[derive(Debug, Clone)]
pub struct ScheduleGenerationState {
    worker_hours: HashMap<String, f64>,
    /// date → workers holding a shift that day.
    occupied: HashMap<NaiveDate, HashSet<String>>,
    /// date → templates already instantiated that day.
    filled: HashMap<NaiveDate, HashSet<String>>,
    shifts: Vec<ScheduledShift>,
    assignments: Vec<ShiftAssignment>,
    id_strategy: IdStrategy,
    next_seq: u64,
    generated_at: DateTime<Utc>,
}

impl ScheduleGenerationState {
    /// Creates an empty ledger with default options.
    pub fn new() -> Self {
        Self::with_options(&GenerationOptions::default())
    }

    /// Creates an empty ledger.
    pub fn with_options(options: &GenerationOptions) -> Self {
        Self {
            worker_hours: HashMap::new(),
            occupied: HashMap::new(),
            filled: HashMap::new(),
            shifts: Vec::new(),
            assignments: Vec::new(),
            id_strategy: options.id_strategy.clone(),
            next_seq: 0,
            generated_at: options.generated_at.unwrap_or_else(Utc::now),
        }
    }

    /// Seeds hours a worker accumulated before this run (builder style).
    pub fn with_worker_hours(mut self, worker_id: impl Into<String>, hours: f64) -> Self {
        self.seed_worker_hours(worker_id, hours);
        self
    }

    /// Seeds hours a worker accumulated before this run.
    pub fn seed_worker_hours(&mut self, worker_id: impl Into<String>, hours: f64) {
        *self.worker_hours.entry(worker_id.into()).or_insert(0.0) += hours;
    }

    /// Accumulated hours for a worker (0 if none recorded).
    pub fn get_worker_hours(&self, worker_id: &str) -> f64 {
        self.worker_hours.get(worker_id).copied().unwrap_or(0.0)
    }

    /// Whether the worker already holds a shift on `date`.
    pub fn is_worker_scheduled_on(&self, worker_id: &str, date: NaiveDate) -> bool {
        self.occupied
            .get(&date)
            .is_some_and(|workers| workers.contains(worker_id))
    }

    /// Whether the template already has a shift on `date`.
    pub fn is_instance_filled(&self, template_id: &str, date: NaiveDate) -> bool {
        self.filled
            .get(&date)
            .is_some_and(|templates| templates.contains(template_id))
    }

    /// Records a shift with its assignment.
    ///
    /// Adds `duration_hours` to the worker's total, marks the worker busy on
    /// the shift date and the template instance as filled.
    ///
    /// # Errors
    /// Rejects, without recording anything, an assignment that does not link
    /// to `shift`, one whose bounds leave the shift's bounds, and a second
    /// shift for the same worker on the same date.
    pub fn add_assignment(
        &mut self,
        shift: ScheduledShift,
        assignment: ShiftAssignment,
        template_id: &str,
        duration_hours: f64,
    ) -> Result<(), GenerationError> {
        if assignment.scheduled_shift_id != shift.id || assignment.worker_id != shift.worker_id {
            return Err(GenerationError::AssignmentMismatch {
                assignment_id: assignment.id,
                shift_id: shift.id,
            });
        }
        if !assignment.is_within(&shift) {
            return Err(GenerationError::AssignmentOutOfBounds {
                assignment_id: assignment.id,
                shift_id: shift.id,
            });
        }
        if self.is_worker_scheduled_on(&shift.worker_id, shift.shift_date) {
            return Err(GenerationError::WorkerAlreadyScheduled {
                worker_id: shift.worker_id,
                date: shift.shift_date,
            });
        }

        *self
            .worker_hours
            .entry(shift.worker_id.clone())
            .or_insert(0.0) += duration_hours;
        self.occupied
            .entry(shift.shift_date)
            .or_default()
            .insert(shift.worker_id.clone());
        self.filled
            .entry(shift.shift_date)
            .or_default()
            .insert(template_id.to_string());

        self.shifts.push(shift);
        self.assignments.push(assignment);
        Ok(())
    }

    /// Produces a fresh id for a shift or assignment.
    pub fn next_id(&mut self) -> String {
        match &self.id_strategy {
            IdStrategy::Uuid => Uuid::new_v4().to_string(),
            IdStrategy::Sequential { prefix } => {
                self.next_seq += 1;
                format!("{prefix}-{}", self.next_seq)
            }
        }
    }

    /// Creation timestamp stamped on every record of this run.
    pub fn generated_at(&self) -> DateTime<Utc> {
        self.generated_at
    }

    /// Shifts recorded so far, in commit order.
    pub fn shifts(&self) -> &[ScheduledShift] {
        &self.shifts
    }

    /// Assignments recorded so far, in commit order.
    pub fn assignments(&self) -> &[ShiftAssignment] {
        &self.assignments
    }

    /// The shift a worker holds on `date`, if any.
    pub fn shift_for_worker_on(&self, worker_id: &str, date: NaiveDate) -> Option<&ScheduledShift> {
        self.shifts
            .iter()
            .find(|s| s.worker_id == worker_id && s.shift_date == date)
    }

    /// Accumulated hours of every worker seen so far.
    pub fn worker_hours(&self) -> &HashMap<String, f64> {
        &self.worker_hours
    }

    /// Consumes the ledger, returning shifts, assignments and final hours.
    pub fn into_parts(
        self,
    ) -> (
        Vec<ScheduledShift>,
        Vec<ShiftAssignment>,
        HashMap<String, f64>,
    ) {
        (self.shifts, self.assignments, self.worker_hours)
    }
}

impl Default for ScheduleGenerationState {
    fn default() -> Self {
        Self::new()
    }
}
