//! Sequential rule chain.

use std::cmp::Ordering;
use std::sync::Arc;

use super::rules::{LeastHoursFirst, SeniorityFirst};
use super::RankingRule;
use crate::generation::ScheduleGenerationState;
use crate::models::Worker;

/// Orders eligible workers by a chain of rules.
///
/// Rules are applied in sequence; the next rule is consulted only on a tie.
/// The sort is stable, so workers tied on every rule keep their roster order.
#[derive(Clone)]
pub struct CandidateRanker {
    rules: Vec<Arc<dyn RankingRule>>,
}

impl CandidateRanker {
    /// Creates a ranker with no rules (roster order).
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// The standard chain: seniority, then least hours.
    pub fn standard() -> Self {
        Self::new()
            .with_rule(SeniorityFirst)
            .with_rule(LeastHoursFirst)
    }

    /// Appends a rule to the chain.
    pub fn with_rule<R: RankingRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Names of the rules, in evaluation order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Sorts candidates, most preferred first.
    pub fn rank<'w>(
        &self,
        candidates: &[&'w Worker],
        state: &ScheduleGenerationState,
    ) -> Vec<&'w Worker> {
        let mut ranked = candidates.to_vec();
        ranked.sort_by(|a, b| self.compare(a, b, state));
        ranked
    }

    /// The most preferred candidate, if any.
    pub fn select_best<'w>(
        &self,
        candidates: &[&'w Worker],
        state: &ScheduleGenerationState,
    ) -> Option<&'w Worker> {
        candidates
            .iter()
            .copied()
            .reduce(|best, next| {
                if self.compare(next, best, state) == Ordering::Less {
                    next
                } else {
                    best
                }
            })
    }

    fn compare(&self, a: &Worker, b: &Worker, state: &ScheduleGenerationState) -> Ordering {
        for rule in &self.rules {
            let ord = rule.compare(a, b, state);
            if ord != Ordering::Equal {
                return ord;
            }
        }
        Ordering::Equal
    }
}

impl Default for CandidateRanker {
    fn default() -> Self {
        Self::standard()
    }
}

impl std::fmt::Debug for CandidateRanker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CandidateRanker")
            .field("rules", &self.rule_names())
            .finish()
    }
}
