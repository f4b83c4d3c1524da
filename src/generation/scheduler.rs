//! Weekly generation driver.
//!
//! # Algorithm
//!
//! 1. Seed the ledger with prior hours.
//! 2. Apply recurring assignments for the location.
//! 3. For each week date in order: fill lead templates, then regular
//!    templates, each in input order.
//!
//! Ordering is fixed so identical inputs give identical assignments.

use chrono::NaiveDate;
use log::info;
use std::collections::HashMap;

use super::assign::{assign_dynamic_shifts_ranked, assign_lead_shifts_ranked};
use super::options::GenerationOptions;
use super::outcome::GenerationOutcome;
use super::recurring::apply_recurring_assignments;
use super::state::ScheduleGenerationState;
use crate::models::{
    LocationOperatingHours, OperatingHoursMap, RecurringShiftAssignment, ShiftTemplate, Worker,
};
use crate::ranking::CandidateRanker;

/// Input container for one location and one week.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    /// Location being scheduled.
    pub location_id: String,
    /// The seven target dates.
    pub week_dates: Vec<NaiveDate>,
    /// Worker roster.
    pub workers: Vec<Worker>,
    /// Templates (other locations' templates are ignored).
    pub templates: Vec<ShiftTemplate>,
    /// Operating hours (other locations' records are ignored).
    pub operating_hours: Vec<LocationOperatingHours>,
    /// Standing assignments (other locations' records are ignored).
    pub recurring_assignments: Vec<RecurringShiftAssignment>,
    /// Hours each worker already holds before this run.
    pub prior_hours: HashMap<String, f64>,
}

impl GenerationRequest {
    /// Creates an empty request.
    pub fn new(location_id: impl Into<String>, week_dates: Vec<NaiveDate>) -> Self {
        Self {
            location_id: location_id.into(),
            week_dates,
            workers: Vec::new(),
            templates: Vec::new(),
            operating_hours: Vec::new(),
            recurring_assignments: Vec::new(),
            prior_hours: HashMap::new(),
        }
    }

    /// Adds a worker.
    pub fn with_worker(mut self, worker: Worker) -> Self {
        self.workers.push(worker);
        self
    }

    /// Adds a template.
    pub fn with_template(mut self, template: ShiftTemplate) -> Self {
        self.templates.push(template);
        self
    }

    /// Adds an operating-hours record.
    pub fn with_operating_hours(mut self, hours: LocationOperatingHours) -> Self {
        self.operating_hours.push(hours);
        self
    }

    /// Adds a recurring assignment.
    pub fn with_recurring(mut self, recurring: RecurringShiftAssignment) -> Self {
        self.recurring_assignments.push(recurring);
        self
    }

    /// Sets a worker's prior hours.
    pub fn with_prior_hours(mut self, worker_id: impl Into<String>, hours: f64) -> Self {
        self.prior_hours.insert(worker_id.into(), hours);
        self
    }

    /// Templates at the requested location, in input order.
    pub fn location_templates(&self) -> impl Iterator<Item = &ShiftTemplate> {
        self.templates
            .iter()
            .filter(|t| t.location_id == self.location_id)
    }

    /// Operating hours of the requested location, keyed by weekday.
    pub fn operating_hours_map(&self) -> OperatingHoursMap {
        OperatingHoursMap::from_records(self.location_id.clone(), &self.operating_hours)
    }
}

/// Greedy weekly shift generator.
///
/// # Example
///
/// ```
/// use chrono::{NaiveDate, NaiveTime};
/// use u_shift::generation::{GenerationRequest, WeeklyScheduler};
/// use u_shift::models::{JobLevel, LocationOperatingHours, ShiftTemplate, Worker};
/// use u_shift::time::{week_dates_from, DayOfWeek};
///
/// let t = |h| NaiveTime::from_hms_opt(h, 0, 0).unwrap();
/// let week = week_dates_from(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
///
/// let request = GenerationRequest::new("store-1", week)
///     .with_template(ShiftTemplate::new("T1", "store-1", "cashier", t(9), t(13)).on(DayOfWeek::Tuesday))
///     .with_operating_hours(LocationOperatingHours::new("store-1", DayOfWeek::Tuesday, t(8), t(20)))
///     .with_worker(Worker::new("W1", JobLevel::L2).with_position("cashier").with_location("store-1"));
///
/// let outcome = WeeklyScheduler::new().generate(&request);
/// assert_eq!(outcome.shift_count(), 1);
/// assert_eq!(outcome.shifts[0].worker_id, "W1");
/// ```
#[derive(Debug, Clone, Default)]
pub struct WeeklyScheduler {
    ranker: CandidateRanker,
    options: GenerationOptions,
}

impl WeeklyScheduler {
    /// Creates a scheduler with the standard ranking and default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the candidate ranking chain.
    pub fn with_ranker(mut self, ranker: CandidateRanker) -> Self {
        self.ranker = ranker;
        self
    }

    /// Sets run options.
    pub fn with_options(mut self, options: GenerationOptions) -> Self {
        self.options = options;
        self
    }

    /// Runs one generation over the request.
    ///
    /// Always completes; skipped instances are reported in
    /// [`GenerationOutcome::warnings`] or, for understaffing, simply absent.
    pub fn generate(&self, request: &GenerationRequest) -> GenerationOutcome {
        let mut state = ScheduleGenerationState::with_options(&self.options);
        for (worker_id, hours) in &request.prior_hours {
            state.seed_worker_hours(worker_id.clone(), *hours);
        }

        let templates: Vec<ShiftTemplate> = request.location_templates().cloned().collect();
        let hours_map = request.operating_hours_map();
        let recurring: Vec<RecurringShiftAssignment> = request
            .recurring_assignments
            .iter()
            .filter(|r| r.location_id == request.location_id)
            .cloned()
            .collect();

        info!(
            "generating schedule for location {}: {} templates, {} workers, {} recurring",
            request.location_id,
            templates.len(),
            request.workers.len(),
            recurring.len()
        );

        let mut warnings = apply_recurring_assignments(
            &recurring,
            &templates,
            &request.workers,
            &mut state,
            &request.week_dates,
        );

        for &date in &request.week_dates {
            for template in templates.iter().filter(|t| t.is_lead() && t.applies_on_date(date)) {
                warnings.extend(assign_lead_shifts_ranked(
                    &self.ranker,
                    template,
                    date,
                    &request.workers,
                    &mut state,
                    &request.week_dates,
                    &hours_map,
                ));
            }
            for template in templates.iter().filter(|t| !t.is_lead() && t.applies_on_date(date)) {
                warnings.extend(assign_dynamic_shifts_ranked(
                    &self.ranker,
                    template,
                    date,
                    &request.workers,
                    &mut state,
                    &request.week_dates,
                    &hours_map,
                ));
            }
        }

        let generated_at = state.generated_at();
        let (shifts, assignments, worker_hours) = state.into_parts();
        info!(
            "generated {} shifts for location {} with {} warnings",
            shifts.len(),
            request.location_id,
            warnings.len()
        );

        GenerationOutcome {
            shifts,
            assignments,
            warnings,
            worker_hours,
            generated_at,
        }
    }
}
