//! Candidate ranking for template instances.
//!
//! Eligible workers are ordered by a chain of [`RankingRule`]s; a later rule
//! only decides when every earlier rule ties. The standard chain is:
//!
//! 1. [`rules::SeniorityFirst`]: higher job level first.
//! 2. [`rules::LeastHoursFirst`]: fewer accumulated hours first, to spread
//!    hours across the week.
//!
//! Rules read the live generation ledger, so rankings made later in a run
//! see the hours committed earlier.
//!
//! # Usage
//!
//! ```
//! use u_shift::ranking::{rules, CandidateRanker};
//!
//! let ranker = CandidateRanker::new()
//!     .with_rule(rules::SeniorityFirst)
//!     .with_rule(rules::LeastHoursFirst);
//! assert_eq!(ranker.rule_names(), vec!["SENIORITY", "LEAST_HOURS"]);
//! ```

mod ranker;
pub mod rules;

pub use ranker::CandidateRanker;

use std::cmp::Ordering;
use std::fmt::Debug;

use crate::generation::ScheduleGenerationState;
use crate::models::{JobLevel, Worker};

/// Natural order of job levels (`L1 < L5`).
///
/// A strict total order over the enumerated levels; ranking reverses it so
/// that seniors are preferred.
pub fn compare_job_levels(a: JobLevel, b: JobLevel) -> Ordering {
    a.rank().cmp(&b.rank())
}

/// A criterion for ordering eligible workers.
///
/// # Ordering Convention
/// **`Less` = preferred.** `compare(a, b)` returns `Less` when `a` should be
/// picked before `b`, and `Equal` to defer to the next rule.
pub trait RankingRule: Send + Sync + Debug {
    /// Rule name (e.g., "SENIORITY").
    fn name(&self) -> &'static str;

    /// Compares two candidates against the current ledger.
    fn compare(&self, a: &Worker, b: &Worker, state: &ScheduleGenerationState) -> Ordering;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
