//! Lead and dynamic shift assigners.
//!
//! Both fill one template instance (a template on one date) with the
//! top-ranked eligible worker:
//!
//! 1. Resolve the weekday and its operating hours. Missing hours: warn, skip.
//! 2. Keep the workers that pass the eligibility rules.
//! 3. No candidate: skip silently (understaffing is not an error).
//! 4. Rank candidates and take the first.
//! 5. Compute the shift length. Failure: warn, skip.
//! 6. Commit the shift and its assignment to the ledger.
//!
//! An instance moves `Pending -> Filled`, `Pending -> Unfilled` or
//! `Pending -> Skipped` exactly once; nothing is retried.

use chrono::NaiveDate;
use log::{debug, trace, warn};

use super::state::ScheduleGenerationState;
use super::warning::{GenerationWarning, ShiftKind};
use crate::eligibility::evaluate_eligibility;
use crate::models::{OperatingHoursMap, ScheduledShift, ShiftAssignment, ShiftTemplate, Worker};
use crate::ranking::CandidateRanker;
use crate::time::day_of_week_from_date;

/// Fills a regular (non-lead) template instance using the standard ranking.
///
/// Lead templates are ignored. Returns the warnings raised; an empty list
/// does not imply the instance was filled.
pub fn assign_dynamic_shifts(
    template: &ShiftTemplate,
    date: NaiveDate,
    workers: &[Worker],
    state: &mut ScheduleGenerationState,
    week_dates: &[NaiveDate],
    operating_hours: &OperatingHoursMap,
) -> Vec<GenerationWarning> {
    assign_dynamic_shifts_ranked(
        &CandidateRanker::standard(),
        template,
        date,
        workers,
        state,
        week_dates,
        operating_hours,
    )
}

/// [`assign_dynamic_shifts`] with a custom ranking chain.
pub fn assign_dynamic_shifts_ranked(
    ranker: &CandidateRanker,
    template: &ShiftTemplate,
    date: NaiveDate,
    workers: &[Worker],
    state: &mut ScheduleGenerationState,
    week_dates: &[NaiveDate],
    operating_hours: &OperatingHoursMap,
) -> Vec<GenerationWarning> {
    if template.is_lead() {
        return Vec::new();
    }
    let slot = Slot {
        kind: ShiftKind::Dynamic,
        template,
        date,
    };
    slot.fill(ranker, workers, state, week_dates, operating_hours)
}

/// Fills a lead template instance using the standard ranking.
///
/// Regular templates are ignored. Candidates must additionally be able to
/// lead the template's lead kind.
pub fn assign_lead_shifts(
    template: &ShiftTemplate,
    date: NaiveDate,
    workers: &[Worker],
    state: &mut ScheduleGenerationState,
    week_dates: &[NaiveDate],
    operating_hours: &OperatingHoursMap,
) -> Vec<GenerationWarning> {
    assign_lead_shifts_ranked(
        &CandidateRanker::standard(),
        template,
        date,
        workers,
        state,
        week_dates,
        operating_hours,
    )
}

/// [`assign_lead_shifts`] with a custom ranking chain.
pub fn assign_lead_shifts_ranked(
    ranker: &CandidateRanker,
    template: &ShiftTemplate,
    date: NaiveDate,
    workers: &[Worker],
    state: &mut ScheduleGenerationState,
    week_dates: &[NaiveDate],
    operating_hours: &OperatingHoursMap,
) -> Vec<GenerationWarning> {
    if !template.is_lead() {
        return Vec::new();
    }
    let slot = Slot {
        kind: ShiftKind::Lead,
        template,
        date,
    };
    slot.fill(ranker, workers, state, week_dates, operating_hours)
}

/// One template instance being filled.
struct Slot<'a> {
    kind: ShiftKind,
    template: &'a ShiftTemplate,
    date: NaiveDate,
}

impl Slot<'_> {
    fn fill(
        &self,
        ranker: &CandidateRanker,
        workers: &[Worker],
        state: &mut ScheduleGenerationState,
        week_dates: &[NaiveDate],
        operating_hours: &OperatingHoursMap,
    ) -> Vec<GenerationWarning> {
        let mut warnings = Vec::new();
        let template = self.template;

        if !week_dates.is_empty() && !week_dates.contains(&self.date) {
            emit(
                &mut warnings,
                GenerationWarning::DateOutsideWeek {
                    date: self.date,
                    template_id: template.id.clone(),
                    kind: self.kind,
                },
            );
            return warnings;
        }

        let day = day_of_week_from_date(self.date);
        if !template.applies_on(day) {
            return warnings;
        }
        if state.is_instance_filled(&template.id, self.date) {
            debug!(
                "template {} on {} already filled, skipping {} assignment",
                template.id, self.date, self.kind
            );
            return warnings;
        }

        let Some(hours) = operating_hours
            .get(day)
            .filter(|h| h.location_id == template.location_id)
        else {
            emit(
                &mut warnings,
                GenerationWarning::MissingOperatingHours {
                    day,
                    location_id: template.location_id.clone(),
                    template_id: template.id.clone(),
                    kind: self.kind,
                },
            );
            return warnings;
        };

        let candidates: Vec<&Worker> = workers
            .iter()
            .filter(|w| match evaluate_eligibility(w, template, self.date, state, Some(hours)) {
                Ok(()) => true,
                Err(reason) => {
                    trace!(
                        "worker {} ineligible for template {} on {}: {}",
                        w.id,
                        template.id,
                        self.date,
                        reason
                    );
                    false
                }
            })
            .collect();

        let Some(winner) = ranker.select_best(&candidates, state) else {
            debug!(
                "no eligible worker for {} template {} on {}",
                self.kind, template.id, self.date
            );
            return warnings;
        };

        let duration_hours = match template.duration_hours() {
            Ok(hours) => hours,
            Err(source) => {
                emit(
                    &mut warnings,
                    GenerationWarning::InvalidDuration {
                        template_id: template.id.clone(),
                        date: self.date,
                        kind: self.kind,
                        source,
                    },
                );
                return warnings;
            }
        };

        let shift = ScheduledShift::from_template(
            state.next_id(),
            template,
            winner.id.as_str(),
            self.date,
            state.generated_at(),
        );
        let assignment =
            ShiftAssignment::for_shift(state.next_id(), &shift, self.kind.assignment_type(template));

        match state.add_assignment(shift, assignment, &template.id, duration_hours) {
            Ok(()) => debug!(
                "assigned worker {} to {} template {} on {} ({:.2}h, {:.2}h total)",
                winner.id,
                self.kind,
                template.id,
                self.date,
                duration_hours,
                state.get_worker_hours(&winner.id)
            ),
            Err(source) => emit(
                &mut warnings,
                GenerationWarning::Rejected {
                    template_id: template.id.clone(),
                    date: self.date,
                    kind: self.kind,
                    source,
                },
            ),
        }

        warnings
    }
}

/// Logs and collects a warning.
pub(super) fn emit(warnings: &mut Vec<GenerationWarning>, warning: GenerationWarning) {
    warn!("{warning}");
    warnings.push(warning);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TimeError;
    use crate::generation::GenerationOptions;
    use crate::models::{AssignmentType, JobLevel, LeadType};
    use crate::time::{week_dates_from, DayOfWeek};
    use chrono::NaiveTime;

    fn t(h: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, 0, 0).unwrap()
    }

    fn week() -> Vec<NaiveDate> {
        // Monday 2024-01-01 .. Sunday 2024-01-07
        week_dates_from(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
    }

    fn tuesday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 2).unwrap()
    }

    fn staff(id: &str, level: JobLevel) -> Worker {
        Worker::new(id, level).with_position("P").with_location("L")
    }

    fn tuesday_template() -> ShiftTemplate {
        ShiftTemplate::new("T", "L", "P", t(9), t(13)).on(DayOfWeek::Tuesday)
    }

    fn open_all_week() -> OperatingHoursMap {
        DayOfWeek::ALL
            .into_iter()
            .fold(OperatingHoursMap::new("L"), |m, d| m.with_day(d, t(8), t(20)))
    }

    fn state() -> ScheduleGenerationState {
        ScheduleGenerationState::with_options(&GenerationOptions::new().with_sequential_ids("x"))
    }

    #[test]
    fn test_higher_level_wins_regardless_of_hours() {
        let workers = vec![staff("W1", JobLevel::L2), staff("W2", JobLevel::L3)];
        let mut state = state().with_worker_hours("W2", 30.0);

        let warnings = assign_dynamic_shifts(
            &tuesday_template(),
            tuesday(),
            &workers,
            &mut state,
            &week(),
            &open_all_week(),
        );

        assert!(warnings.is_empty());
        assert_eq!(state.shifts().len(), 1);
        assert_eq!(state.shifts()[0].worker_id, "W2");
        assert!((state.get_worker_hours("W2") - 34.0).abs() < 1e-10);
    }

    #[test]
    fn test_equal_level_least_hours_wins() {
        let workers = vec![staff("W2", JobLevel::L3), staff("W3", JobLevel::L3)];
        let mut state = state().with_worker_hours("W2", 20.0);

        assign_dynamic_shifts(
            &tuesday_template(),
            tuesday(),
            &workers,
            &mut state,
            &week(),
            &open_all_week(),
        );

        assert_eq!(state.shifts()[0].worker_id, "W3");
    }

    #[test]
    fn test_creates_paired_regular_assignment() {
        let workers = vec![staff("W1", JobLevel::L2)];
        let mut state = state();

        assign_dynamic_shifts(
            &tuesday_template(),
            tuesday(),
            &workers,
            &mut state,
            &week(),
            &open_all_week(),
        );

        let shift = &state.shifts()[0];
        let assignment = &state.assignments()[0];
        assert_eq!(shift.shift_date, tuesday());
        assert_eq!(shift.template_id, "T");
        assert_eq!(shift.start_time, t(9));
        assert_eq!(shift.end_time, t(13));
        assert!(!shift.is_recurring_generated);
        assert_eq!(assignment.scheduled_shift_id, shift.id);
        assert_eq!(assignment.assignment_type, AssignmentType::Regular);
        assert!(!assignment.is_manual_override);
        assert_eq!(assignment.assigned_start, Some(t(9)));
        assert_eq!(assignment.assigned_end, Some(t(13)));
    }

    #[test]
    fn test_silent_shortfall() {
        let workers = vec![
            staff("W1", JobLevel::L3).inactive(),
            Worker::new("W2", JobLevel::L3).with_location("L"), // wrong position
        ];
        let mut state = state();

        let warnings = assign_dynamic_shifts(
            &tuesday_template(),
            tuesday(),
            &workers,
            &mut state,
            &week(),
            &open_all_week(),
        );

        assert!(warnings.is_empty());
        assert!(state.shifts().is_empty());
        assert!(state.assignments().is_empty());
    }

    #[test]
    fn test_missing_hours_warns_once() {
        let workers = vec![staff("W1", JobLevel::L3)];
        let mut state = state();
        let hours = OperatingHoursMap::new("L").with_day(DayOfWeek::Monday, t(8), t(20));

        let warnings = assign_dynamic_shifts(
            &tuesday_template(),
            tuesday(),
            &workers,
            &mut state,
            &week(),
            &hours,
        );

        assert_eq!(warnings.len(), 1);
        assert_eq!(
            warnings[0].to_string(),
            "Missing operating hours for Tuesday at location L. Cannot assign dynamic shift for template T."
        );
        assert!(state.shifts().is_empty());
    }

    #[test]
    fn test_invalid_duration_skips_with_warning() {
        let workers = vec![staff("W1", JobLevel::L3)];
        let mut state = state();
        let inverted = ShiftTemplate::new("T", "L", "P", t(13), t(9)).on(DayOfWeek::Tuesday);

        let warnings =
            assign_dynamic_shifts(&inverted, tuesday(), &workers, &mut state, &week(), &open_all_week());

        assert_eq!(warnings.len(), 1);
        assert!(matches!(
            &warnings[0],
            GenerationWarning::InvalidDuration {
                source: TimeError::InvalidRange { .. },
                ..
            }
        ));
        assert!(state.shifts().is_empty());
        assert_eq!(state.get_worker_hours("W1"), 0.0);
    }

    #[test]
    fn test_lead_template_is_noop_for_dynamic() {
        let workers = vec![staff("W1", JobLevel::L3).lead_eligible()];
        let mut state = state();
        let lead = tuesday_template().with_lead(LeadType::Opening);

        let warnings =
            assign_dynamic_shifts(&lead, tuesday(), &workers, &mut state, &week(), &OperatingHoursMap::new("L"));

        assert!(warnings.is_empty()); // no missing-hours warning either
        assert!(state.shifts().is_empty());
    }

    #[test]
    fn test_lead_assignment() {
        let workers = vec![
            staff("senior", JobLevel::L5), // not lead-eligible
            staff("lead", JobLevel::L3).with_lead_type(LeadType::Opening),
        ];
        let mut state = state();
        let lead = tuesday_template().with_lead(LeadType::Opening);

        let warnings =
            assign_lead_shifts(&lead, tuesday(), &workers, &mut state, &week(), &open_all_week());

        assert!(warnings.is_empty());
        assert_eq!(state.shifts()[0].worker_id, "lead");
        assert_eq!(state.assignments()[0].assignment_type, AssignmentType::Lead);
    }

    #[test]
    fn test_regular_template_is_noop_for_lead() {
        let workers = vec![staff("W1", JobLevel::L3).lead_eligible()];
        let mut state = state();

        let warnings = assign_lead_shifts(
            &tuesday_template(),
            tuesday(),
            &workers,
            &mut state,
            &week(),
            &open_all_week(),
        );
        assert!(warnings.is_empty());
        assert!(state.shifts().is_empty());
    }

    #[test]
    fn test_lead_missing_hours_message() {
        let workers = vec![staff("W1", JobLevel::L3).lead_eligible()];
        let mut state = state();
        let lead = tuesday_template().with_lead(LeadType::Closing);

        let warnings =
            assign_lead_shifts(&lead, tuesday(), &workers, &mut state, &week(), &OperatingHoursMap::new("L"));
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].to_string().contains("Cannot assign lead shift for template T."));
    }

    #[test]
    fn test_state_carries_across_instances() {
        // Two Tuesday templates, one qualified worker: only the first is filled
        let workers = vec![staff("W1", JobLevel::L3)];
        let mut state = state();
        let morning = tuesday_template();
        let evening = ShiftTemplate::new("T2", "L", "P", t(14), t(18)).on(DayOfWeek::Tuesday);

        assign_dynamic_shifts(&morning, tuesday(), &workers, &mut state, &week(), &open_all_week());
        let warnings =
            assign_dynamic_shifts(&evening, tuesday(), &workers, &mut state, &week(), &open_all_week());

        assert!(warnings.is_empty());
        assert_eq!(state.shifts().len(), 1);
        assert_eq!(state.shifts()[0].template_id, "T");
    }

    #[test]
    fn test_hours_balance_across_days() {
        let workers = vec![staff("A", JobLevel::L2), staff("B", JobLevel::L2)];
        let mut state = state();
        let tpl = ShiftTemplate::new("T", "L", "P", t(9), t(13))
            .on_days([DayOfWeek::Monday, DayOfWeek::Tuesday, DayOfWeek::Wednesday]);

        for date in week() {
            assign_dynamic_shifts(&tpl, date, &workers, &mut state, &week(), &open_all_week());
        }

        let holders: Vec<&str> = state.shifts().iter().map(|s| s.worker_id.as_str()).collect();
        assert_eq!(holders, vec!["A", "B", "A"]);
    }

    #[test]
    fn test_already_filled_instance_is_skipped() {
        let workers = vec![staff("W1", JobLevel::L3), staff("W2", JobLevel::L3)];
        let mut state = state();

        assign_dynamic_shifts(&tuesday_template(), tuesday(), &workers, &mut state, &week(), &open_all_week());
        assign_dynamic_shifts(&tuesday_template(), tuesday(), &workers, &mut state, &week(), &open_all_week());

        assert_eq!(state.shifts().len(), 1);
    }

    #[test]
    fn test_date_outside_week() {
        let workers = vec![staff("W1", JobLevel::L3)];
        let mut state = state();
        let next_tuesday = NaiveDate::from_ymd_opt(2024, 1, 9).unwrap();

        let warnings = assign_dynamic_shifts(
            &tuesday_template(),
            next_tuesday,
            &workers,
            &mut state,
            &week(),
            &open_all_week(),
        );
        assert_eq!(warnings.len(), 1);
        assert!(matches!(warnings[0], GenerationWarning::DateOutsideWeek { .. }));
        assert!(state.shifts().is_empty());
    }

    #[test]
    fn test_template_not_on_that_day() {
        let workers = vec![staff("W1", JobLevel::L3)];
        let mut state = state();
        let monday = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();

        let warnings =
            assign_dynamic_shifts(&tuesday_template(), monday, &workers, &mut state, &week(), &open_all_week());
        assert!(warnings.is_empty());
        assert!(state.shifts().is_empty());
    }
}
