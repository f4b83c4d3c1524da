//! Recurring-assignment application.
//!
//! Standing commitments are applied before any ranking so regular workers
//! keep their usual slot. They skip qualification and ranking, but never
//! break the ledger's invariants: an inactive worker, a worker already busy
//! that day, or a template instance already taken produces a warning and is
//! skipped.

use chrono::NaiveDate;
use log::debug;

use super::assign::emit;
use super::state::ScheduleGenerationState;
use super::warning::{GenerationWarning, ShiftKind};
use crate::models::{RecurringShiftAssignment, ScheduledShift, ShiftAssignment, ShiftTemplate, Worker};

/// Applies recurring assignments to every matching date of the week.
///
/// Records are processed in input order and, within a record, in
/// `week_dates` order.
pub fn apply_recurring_assignments(
    recurring: &[RecurringShiftAssignment],
    templates: &[ShiftTemplate],
    workers: &[Worker],
    state: &mut ScheduleGenerationState,
    week_dates: &[NaiveDate],
) -> Vec<GenerationWarning> {
    let mut warnings = Vec::new();

    for record in recurring {
        let Some(worker) = workers.iter().find(|w| w.id == record.worker_id) else {
            emit(
                &mut warnings,
                GenerationWarning::RecurringUnknownWorker {
                    assignment_id: record.id.clone(),
                    worker_id: record.worker_id.clone(),
                },
            );
            continue;
        };
        let Some(template) = templates.iter().find(|t| t.id == record.template_id) else {
            emit(
                &mut warnings,
                GenerationWarning::RecurringUnknownTemplate {
                    assignment_id: record.id.clone(),
                    template_id: record.template_id.clone(),
                },
            );
            continue;
        };
        if !worker.is_active {
            emit(
                &mut warnings,
                GenerationWarning::RecurringInactiveWorker {
                    assignment_id: record.id.clone(),
                    worker_id: worker.id.clone(),
                },
            );
            continue;
        }

        for &date in week_dates.iter().filter(|d| template.applies_on_date(**d)) {
            apply_on_date(record, template, worker, date, state, &mut warnings);
        }
    }

    warnings
}

fn apply_on_date(
    record: &RecurringShiftAssignment,
    template: &ShiftTemplate,
    worker: &Worker,
    date: NaiveDate,
    state: &mut ScheduleGenerationState,
    warnings: &mut Vec<GenerationWarning>,
) {
    if state.is_instance_filled(&template.id, date) {
        emit(
            warnings,
            GenerationWarning::RecurringInstanceTaken {
                assignment_id: record.id.clone(),
                template_id: template.id.clone(),
                date,
            },
        );
        return;
    }
    if state.is_worker_scheduled_on(&worker.id, date) {
        emit(
            warnings,
            GenerationWarning::RecurringWorkerOccupied {
                assignment_id: record.id.clone(),
                worker_id: worker.id.clone(),
                date,
            },
        );
        return;
    }

    let duration_hours = match template.duration_hours() {
        Ok(hours) => hours,
        Err(source) => {
            emit(
                warnings,
                GenerationWarning::InvalidDuration {
                    template_id: template.id.clone(),
                    date,
                    kind: ShiftKind::Recurring,
                    source,
                },
            );
            return;
        }
    };

    let shift = ScheduledShift::from_template(
        state.next_id(),
        template,
        worker.id.as_str(),
        date,
        state.generated_at(),
    )
    .recurring();
    let assignment = ShiftAssignment::for_shift(
        state.next_id(),
        &shift,
        ShiftKind::Recurring.assignment_type(template),
    );

    match state.add_assignment(shift, assignment, &template.id, duration_hours) {
        Ok(()) => debug!(
            "recurring assignment {} placed worker {} on template {} for {}",
            record.id, worker.id, template.id, date
        ),
        Err(source) => emit(
            warnings,
            GenerationWarning::Rejected {
                template_id: template.id.clone(),
                date,
                kind: ShiftKind::Recurring,
                source,
            },
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::GenerationOptions;
    use crate::models::{AssignmentType, JobLevel, LeadType};
    use crate::time::{week_dates_from, DayOfWeek};
    use chrono::NaiveTime;

    fn t(h: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, 0, 0).unwrap()
    }

    fn week() -> Vec<NaiveDate> {
        week_dates_from(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
    }

    fn state() -> ScheduleGenerationState {
        ScheduleGenerationState::with_options(&GenerationOptions::new().with_sequential_ids("r"))
    }

    fn record(id: &str, worker: &str, template: &str) -> RecurringShiftAssignment {
        RecurringShiftAssignment::new(id, worker, template, "L", "P")
    }

    fn mon_wed() -> ShiftTemplate {
        ShiftTemplate::new("T", "L", "P", t(9), t(17))
            .on_days([DayOfWeek::Monday, DayOfWeek::Wednesday])
    }

    #[test]
    fn test_applies_every_matching_day() {
        let workers = vec![Worker::new("W1", JobLevel::L1)];
        let templates = vec![mon_wed()];
        let mut state = state();

        let warnings = apply_recurring_assignments(
            &[record("R1", "W1", "T")],
            &templates,
            &workers,
            &mut state,
            &week(),
        );

        assert!(warnings.is_empty());
        assert_eq!(state.shifts().len(), 2);
        assert!(state.shifts().iter().all(|s| s.is_recurring_generated));
        assert!(state
            .assignments()
            .iter()
            .all(|a| a.assignment_type == AssignmentType::Regular));
        assert!((state.get_worker_hours("W1") - 16.0).abs() < 1e-10);
        assert!(state.is_instance_filled("T", NaiveDate::from_ymd_opt(2024, 1, 3).unwrap()));
    }

    #[test]
    fn test_bypasses_qualification() {
        // Worker has no position or location yet still keeps the slot
        let workers = vec![Worker::new("W1", JobLevel::L1)];
        let mut state = state();
        apply_recurring_assignments(&[record("R1", "W1", "T")], &[mon_wed()], &workers, &mut state, &week());
        assert_eq!(state.shifts()[0].worker_id, "W1");
    }

    #[test]
    fn test_lead_template_gives_lead_assignment() {
        let workers = vec![Worker::new("W1", JobLevel::L4)];
        let templates = vec![mon_wed().with_lead(LeadType::Opening)];
        let mut state = state();
        apply_recurring_assignments(&[record("R1", "W1", "T")], &templates, &workers, &mut state, &week());
        assert!(state
            .assignments()
            .iter()
            .all(|a| a.assignment_type == AssignmentType::Lead));
    }

    #[test]
    fn test_unknown_references_and_inactive() {
        let workers = vec![Worker::new("W1", JobLevel::L1).inactive()];
        let templates = vec![mon_wed()];
        let mut state = state();

        let warnings = apply_recurring_assignments(
            &[
                record("R1", "ghost", "T"),
                record("R2", "W1", "missing"),
                record("R3", "W1", "T"),
            ],
            &templates,
            &workers,
            &mut state,
            &week(),
        );

        assert_eq!(warnings.len(), 3);
        assert!(matches!(warnings[0], GenerationWarning::RecurringUnknownWorker { .. }));
        assert!(matches!(warnings[1], GenerationWarning::RecurringUnknownTemplate { .. }));
        assert!(matches!(warnings[2], GenerationWarning::RecurringInactiveWorker { .. }));
        assert!(state.shifts().is_empty());
    }

    #[test]
    fn test_conflicts_are_skipped_per_date() {
        let workers = vec![Worker::new("W1", JobLevel::L1), Worker::new("W2", JobLevel::L1)];
        let evening = ShiftTemplate::new("E", "L", "P", t(18), t(22)).on(DayOfWeek::Monday);
        let templates = vec![mon_wed(), evening];
        let mut state = state();

        let warnings = apply_recurring_assignments(
            &[
                record("R1", "W1", "T"),
                record("R2", "W2", "T"), // same template instances
                record("R3", "W1", "E"), // W1 already busy Monday
            ],
            &templates,
            &workers,
            &mut state,
            &week(),
        );

        assert_eq!(warnings.len(), 3); // R2 Monday + Wednesday, R3 Monday
        assert!(matches!(warnings[0], GenerationWarning::RecurringInstanceTaken { .. }));
        assert!(matches!(warnings[2], GenerationWarning::RecurringWorkerOccupied { .. }));
        assert_eq!(state.shifts().len(), 2);
        assert!(state.shifts().iter().all(|s| s.worker_id == "W1"));
    }

    #[test]
    fn test_invalid_duration() {
        let workers = vec![Worker::new("W1", JobLevel::L1)];
        let templates = vec![ShiftTemplate::new("T", "L", "P", t(17), t(9)).on(DayOfWeek::Friday)];
        let mut state = state();

        let warnings =
            apply_recurring_assignments(&[record("R1", "W1", "T")], &templates, &workers, &mut state, &week());
        assert_eq!(warnings.len(), 1);
        assert!(matches!(
            warnings[0],
            GenerationWarning::InvalidDuration {
                kind: ShiftKind::Recurring,
                ..
            }
        ));
        assert!(state.shifts().is_empty());
    }
}
