//! Worker eligibility for a template instance.
//!
//! A worker may fill a template instance iff all of the following hold:
//! 1. The worker is active.
//! 2. The worker is qualified for the template's position and assigned to
//!    its location.
//! 3. The worker holds no other shift on that date in the current run.
//! 4. The template's window lies inside the location's operating hours for
//!    that weekday.
//! 5. For lead templates only: the worker can lead that lead kind.
//!
//! Checks read the generation ledger, so the answer for the same pair can
//! change after every commit and must be recomputed each time.

use chrono::NaiveDate;
use thiserror::Error;

use crate::generation::ScheduleGenerationState;
use crate::models::{LocationOperatingHours, ShiftTemplate, Worker};
use crate::time::day_of_week_from_date;

/// Why a worker cannot take a template instance.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Ineligibility {
    #[error("worker is inactive")]
    Inactive,
    #[error("not qualified for position {0}")]
    NotQualified(String),
    #[error("not assigned to location {0}")]
    NotAssignedToLocation(String),
    #[error("already scheduled on {0}")]
    AlreadyScheduled(NaiveDate),
    #[error("location has no operating hours that day")]
    NoOperatingHours,
    #[error("shift window falls outside operating hours")]
    OutsideOperatingHours,
    #[error("not qualified to lead this shift")]
    NotLeadQualified,
}

/// Evaluates the eligibility rules in order and reports the first failure.
///
/// `location_hours` must be the record for the template's location on the
/// weekday of `date`; a record for another day or location counts as missing.
pub fn evaluate_eligibility(
    worker: &Worker,
    template: &ShiftTemplate,
    date: NaiveDate,
    state: &ScheduleGenerationState,
    location_hours: Option<&LocationOperatingHours>,
) -> Result<(), Ineligibility> {
    if !worker.is_active {
        return Err(Ineligibility::Inactive);
    }
    if !worker.is_qualified_for(&template.position_id) {
        return Err(Ineligibility::NotQualified(template.position_id.clone()));
    }
    if !worker.is_assigned_to(&template.location_id) {
        return Err(Ineligibility::NotAssignedToLocation(
            template.location_id.clone(),
        ));
    }
    if state.is_worker_scheduled_on(&worker.id, date) {
        return Err(Ineligibility::AlreadyScheduled(date));
    }

    let day = day_of_week_from_date(date);
    let hours = location_hours
        .filter(|h| h.day_of_week == day && h.location_id == template.location_id)
        .ok_or(Ineligibility::NoOperatingHours)?;
    if !hours.covers(template.start_time, template.end_time) {
        return Err(Ineligibility::OutsideOperatingHours);
    }

    if let Some(lead_type) = &template.lead_type {
        if !worker.can_lead(lead_type) {
            return Err(Ineligibility::NotLeadQualified);
        }
    }

    Ok(())
}

/// Whether `worker` may fill `template` on `date` given the current ledger.
pub fn check_worker_shift_eligibility(
    worker: &Worker,
    template: &ShiftTemplate,
    date: NaiveDate,
    state: &ScheduleGenerationState,
    location_hours: Option<&LocationOperatingHours>,
) -> bool {
    evaluate_eligibility(worker, template, date, state, location_hours).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AssignmentType, JobLevel, LeadType, ScheduledShift, ShiftAssignment};
    use crate::time::DayOfWeek;
    use chrono::NaiveTime;

    fn t(h: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, 0, 0).unwrap()
    }

    fn tuesday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 2).unwrap()
    }

    fn worker() -> Worker {
        Worker::new("W1", JobLevel::L2)
            .with_position("P1")
            .with_location("L1")
    }

    fn template() -> ShiftTemplate {
        ShiftTemplate::new("T1", "L1", "P1", t(9), t(13)).on(DayOfWeek::Tuesday)
    }

    fn hours() -> LocationOperatingHours {
        LocationOperatingHours::new("L1", DayOfWeek::Tuesday, t(8), t(20))
    }

    fn check(w: &Worker, tpl: &ShiftTemplate, state: &ScheduleGenerationState) -> Result<(), Ineligibility> {
        evaluate_eligibility(w, tpl, tuesday(), state, Some(&hours()))
    }

    #[test]
    fn test_eligible() {
        let state = ScheduleGenerationState::new();
        assert!(check_worker_shift_eligibility(
            &worker(),
            &template(),
            tuesday(),
            &state,
            Some(&hours())
        ));
    }

    #[test]
    fn test_inactive() {
        let state = ScheduleGenerationState::new();
        assert_eq!(check(&worker().inactive(), &template(), &state), Err(Ineligibility::Inactive));
    }

    #[test]
    fn test_position_and_location() {
        let state = ScheduleGenerationState::new();
        let wrong_position = Worker::new("W1", JobLevel::L2).with_position("P2").with_location("L1");
        assert_eq!(
            check(&wrong_position, &template(), &state),
            Err(Ineligibility::NotQualified("P1".into()))
        );

        let wrong_location = Worker::new("W1", JobLevel::L2).with_position("P1").with_location("L2");
        assert_eq!(
            check(&wrong_location, &template(), &state),
            Err(Ineligibility::NotAssignedToLocation("L1".into()))
        );
    }

    #[test]
    fn test_one_shift_per_day() {
        let mut state = ScheduleGenerationState::new();
        let other = ShiftTemplate::new("T0", "L1", "P1", t(14), t(18));
        let shift = ScheduledShift::from_template("S0", &other, "W1", tuesday(), state.generated_at());
        let assignment = ShiftAssignment::for_shift("A0", &shift, AssignmentType::Regular);
        state.add_assignment(shift, assignment, "T0", 4.0).unwrap();

        assert_eq!(
            check(&worker(), &template(), &state),
            Err(Ineligibility::AlreadyScheduled(tuesday()))
        );
        // A different date is still fine
        let wednesday = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap();
        let wed_hours = LocationOperatingHours::new("L1", DayOfWeek::Wednesday, t(8), t(20));
        assert!(check_worker_shift_eligibility(
            &worker(),
            &template().on(DayOfWeek::Wednesday),
            wednesday,
            &state,
            Some(&wed_hours)
        ));
    }

    #[test]
    fn test_operating_hours() {
        let state = ScheduleGenerationState::new();
        assert_eq!(
            evaluate_eligibility(&worker(), &template(), tuesday(), &state, None),
            Err(Ineligibility::NoOperatingHours)
        );

        let monday_hours = LocationOperatingHours::new("L1", DayOfWeek::Monday, t(8), t(20));
        assert_eq!(
            evaluate_eligibility(&worker(), &template(), tuesday(), &state, Some(&monday_hours)),
            Err(Ineligibility::NoOperatingHours)
        );

        let short_day = LocationOperatingHours::new("L1", DayOfWeek::Tuesday, t(10), t(20));
        assert_eq!(
            evaluate_eligibility(&worker(), &template(), tuesday(), &state, Some(&short_day)),
            Err(Ineligibility::OutsideOperatingHours)
        );
    }

    #[test]
    fn test_lead_clause() {
        let state = ScheduleGenerationState::new();
        let lead_tpl = template().with_lead(LeadType::Opening);

        assert_eq!(check(&worker(), &lead_tpl, &state), Err(Ineligibility::NotLeadQualified));
        assert!(check(&worker().lead_eligible(), &lead_tpl, &state).is_ok());
        assert!(check(&worker().with_lead_type(LeadType::Opening), &lead_tpl, &state).is_ok());
        assert_eq!(
            check(&worker().with_lead_type(LeadType::Closing), &lead_tpl, &state),
            Err(Ineligibility::NotLeadQualified)
        );
        // Lead qualification is irrelevant for regular templates
        assert!(check(&worker(), &template(), &state).is_ok());
    }
}
