//! Generation summary metrics.
//!
//! Summarizes how well a run covered its template instances and how hours
//! ended up distributed.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Total instances | Template x week-date pairs at the location |
//! | Filled | Instances with a scheduled shift |
//! | Unfilled | Instances left empty, for any reason |
//! | Fill rate | Filled / total (1.0 when there is nothing to fill) |
//! | Hours spread | Max minus min hours among workers who got a shift this run |
//! | Over preference | Workers whose hours exceed their preferred weekly hours |

use chrono::NaiveDate;
use std::collections::{BTreeMap, HashSet};

use crate::generation::{GenerationOutcome, GenerationRequest};

/// Coverage and workload indicators for one run.
#[derive(Debug, Clone)]
pub struct GenerationSummary {
    /// Template instances in the target week.
    pub total_instances: usize,
    /// Instances that received a shift.
    pub filled_instances: usize,
    /// `(template_id, date)` of every instance left empty, in week order.
    pub unfilled: Vec<(String, NaiveDate)>,
    /// Shifts that came from recurring assignments.
    pub recurring_shifts: usize,
    /// Fraction of instances filled (0.0..1.0).
    pub fill_rate: f64,
    /// Hours per worker who received at least one shift this run.
    pub hours_by_worker: BTreeMap<String, f64>,
    /// Max minus min of `hours_by_worker` (0.0 when empty).
    pub hours_spread: f64,
    /// Workers over their preferred weekly hours, sorted by id.
    pub over_preferred_hours: Vec<String>,
    /// Number of warnings raised.
    pub warning_count: usize,
}

impl GenerationSummary {
    /// Computes the summary of `outcome` for the run described by `request`.
    pub fn calculate(outcome: &GenerationOutcome, request: &GenerationRequest) -> Self {
        let filled: HashSet<(&str, NaiveDate)> = outcome
            .shifts
            .iter()
            .map(|s| (s.template_id.as_str(), s.shift_date))
            .collect();

        let mut total_instances = 0;
        let mut unfilled = Vec::new();
        for &date in &request.week_dates {
            for template in request.location_templates().filter(|t| t.applies_on_date(date)) {
                total_instances += 1;
                if !filled.contains(&(template.id.as_str(), date)) {
                    unfilled.push((template.id.clone(), date));
                }
            }
        }
        let filled_instances = total_instances - unfilled.len();

        let fill_rate = if total_instances == 0 {
            1.0
        } else {
            filled_instances as f64 / total_instances as f64
        };

        let hours_by_worker: BTreeMap<String, f64> = outcome
            .shifts
            .iter()
            .map(|s| (s.worker_id.clone(), outcome.hours_for(&s.worker_id)))
            .collect();

        let hours_spread = match (
            hours_by_worker.values().copied().reduce(f64::max),
            hours_by_worker.values().copied().reduce(f64::min),
        ) {
            (Some(max), Some(min)) => max - min,
            _ => 0.0,
        };

        let mut over_preferred_hours: Vec<String> = request
            .workers
            .iter()
            .filter(|w| {
                w.preferred_hours_per_week
                    .is_some_and(|pref| outcome.hours_for(&w.id) > pref)
            })
            .map(|w| w.id.clone())
            .collect();
        over_preferred_hours.sort();

        Self {
            total_instances,
            filled_instances,
            unfilled,
            recurring_shifts: outcome
                .shifts
                .iter()
                .filter(|s| s.is_recurring_generated)
                .count(),
            fill_rate,
            hours_by_worker,
            hours_spread,
            over_preferred_hours,
            warning_count: outcome.warnings.len(),
        }
    }

    /// Whether at least `min_fill_rate` of the instances were filled.
    pub fn meets_fill_rate(&self, min_fill_rate: f64) -> bool {
        self.fill_rate >= min_fill_rate
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::{GenerationOptions, WeeklyScheduler};
    use crate::models::{JobLevel, LocationOperatingHours, RecurringShiftAssignment, ShiftTemplate, Worker};
    use crate::time::{week_dates_from, DayOfWeek};
    use chrono::NaiveTime;

    fn t(h: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, 0, 0).unwrap()
    }

    fn staff(id: &str, level: JobLevel) -> Worker {
        Worker::new(id, level).with_position("P").with_location("L")
    }

    fn request() -> GenerationRequest {
        let week = week_dates_from(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        GenerationRequest::new("L", week)
            // Mon + Tue, two slots each day
            .with_template(
                ShiftTemplate::new("AM", "L", "P", t(9), t(13))
                    .on_days([DayOfWeek::Monday, DayOfWeek::Tuesday]),
            )
            .with_template(
                ShiftTemplate::new("PM", "L", "P", t(14), t(18))
                    .on_days([DayOfWeek::Monday, DayOfWeek::Tuesday]),
            )
            .with_operating_hours(LocationOperatingHours::new("L", DayOfWeek::Monday, t(8), t(20)))
            .with_operating_hours(LocationOperatingHours::new("L", DayOfWeek::Tuesday, t(8), t(20)))
    }

    fn run(request: &GenerationRequest) -> GenerationOutcome {
        WeeklyScheduler::new()
            .with_options(GenerationOptions::new().with_sequential_ids("k"))
            .generate(request)
    }

    #[test]
    fn test_fully_staffed() {
        let request = request()
            .with_worker(staff("A", JobLevel::L2))
            .with_worker(staff("B", JobLevel::L2).with_preferred_hours(6.0))
            .with_recurring(RecurringShiftAssignment::new("R1", "A", "AM", "L", "P"));
        let outcome = run(&request);
        let summary = GenerationSummary::calculate(&outcome, &request);

        assert_eq!(summary.total_instances, 4);
        assert_eq!(summary.filled_instances, 4);
        assert!(summary.unfilled.is_empty());
        assert!((summary.fill_rate - 1.0).abs() < 1e-10);
        assert_eq!(summary.recurring_shifts, 2);
        assert!((summary.hours_by_worker["A"] - 8.0).abs() < 1e-10);
        assert!((summary.hours_by_worker["B"] - 8.0).abs() < 1e-10);
        assert!(summary.hours_spread.abs() < 1e-10);
        assert_eq!(summary.over_preferred_hours, vec!["B".to_string()]);
        assert!(summary.meets_fill_rate(1.0));
    }

    #[test]
    fn test_understaffed() {
        let request = request().with_worker(staff("A", JobLevel::L2));
        let outcome = run(&request);
        let summary = GenerationSummary::calculate(&outcome, &request);

        // One worker, one shift per day: PM stays empty both days
        assert_eq!(summary.filled_instances, 2);
        assert_eq!(
            summary.unfilled,
            vec![
                ("PM".to_string(), NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()),
                ("PM".to_string(), NaiveDate::from_ymd_opt(2024, 1, 2).unwrap()),
            ]
        );
        assert!((summary.fill_rate - 0.5).abs() < 1e-10);
        assert_eq!(summary.warning_count, 0); // shortfall is silent
        assert!(!summary.meets_fill_rate(0.9));
    }

    #[test]
    fn test_empty_week() {
        let week = week_dates_from(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        let request = GenerationRequest::new("L", week);
        let summary = GenerationSummary::calculate(&run(&request), &request);
        assert_eq!(summary.total_instances, 0);
        assert!((summary.fill_rate - 1.0).abs() < 1e-10);
        assert!(summary.hours_spread.abs() < 1e-10);
    }
}
