//! Built-in ranking rules.

use std::cmp::Ordering;

use super::{compare_job_levels, RankingRule};
use crate::generation::ScheduleGenerationState;
use crate::models::Worker;

/// Hour differences below this are ties.
const HOURS_EPSILON: f64 = 1e-9;

/// Higher job level first.
#[derive(Debug, Clone, Copy)]
pub struct SeniorityFirst;

impl RankingRule for SeniorityFirst {
    fn name(&self) -> &'static str {
        "SENIORITY"
    }

    fn compare(&self, a: &Worker, b: &Worker, _state: &ScheduleGenerationState) -> Ordering {
        compare_job_levels(b.job_level, a.job_level)
    }

    fn description(&self) -> &'static str {
        "Highest job level first"
    }
}

/// Fewer accumulated hours first.
#[derive(Debug, Clone, Copy)]
pub struct LeastHoursFirst;

impl RankingRule for LeastHoursFirst {
    fn name(&self) -> &'static str {
        "LEAST_HOURS"
    }

    fn compare(&self, a: &Worker, b: &Worker, state: &ScheduleGenerationState) -> Ordering {
        let hours_a = state.get_worker_hours(&a.id);
        let hours_b = state.get_worker_hours(&b.id);
        if (hours_a - hours_b).abs() <= HOURS_EPSILON {
            return Ordering::Equal;
        }
        hours_a.partial_cmp(&hours_b).unwrap_or(Ordering::Equal)
    }

    fn description(&self) -> &'static str {
        "Least accumulated hours first"
    }
}
