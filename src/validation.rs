//! Input validation for generation requests.
//!
//! Checks the structural integrity of a request before it reaches the
//! generator. Detects:
//! - Duplicate worker or template IDs
//! - Templates at a location other than the requested one
//! - Templates with no weekday or an empty/inverted time window
//! - Operating hours with an inverted window or a weekday listed twice
//! - Recurring assignments pointing at unknown workers or templates
//! - A target week that is not seven consecutive dates
//!
//! Validation is optional: the generator tolerates bad records by skipping
//! them with a warning. Hosts that prefer to reject such input up front call
//! [`validate_request`] first.

use std::collections::HashSet;

use crate::generation::GenerationRequest;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same ID.
    DuplicateId,
    /// A template belongs to another location.
    ForeignLocation,
    /// A template applies to no weekday.
    NoApplicableDays,
    /// A template or operating-hours window ends at or before it starts.
    InvalidTimeRange,
    /// A weekday has more than one operating-hours record.
    DuplicateOperatingHours,
    /// A recurring assignment references a worker that doesn't exist.
    UnknownWorker,
    /// A recurring assignment references a template that doesn't exist.
    UnknownTemplate,
    /// The target week is not seven consecutive dates.
    InvalidWeek,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a generation request.
///
/// Only records for the requested location are checked for operating hours
/// and recurring assignments; other locations' records are ignored by the
/// generator anyway.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_request(request: &GenerationRequest) -> ValidationResult {
    let mut errors = Vec::new();

    validate_week(request, &mut errors);

    let mut worker_ids = HashSet::new();
    for w in &request.workers {
        if !worker_ids.insert(w.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate worker ID: {}", w.id),
            ));
        }
    }

    let mut template_ids = HashSet::new();
    for tpl in &request.templates {
        if !template_ids.insert(tpl.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate template ID: {}", tpl.id),
            ));
        }
        if tpl.location_id != request.location_id {
            errors.push(ValidationError::new(
                ValidationErrorKind::ForeignLocation,
                format!(
                    "Template '{}' belongs to location '{}', not '{}'",
                    tpl.id, tpl.location_id, request.location_id
                ),
            ));
        }
        if tpl.days.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::NoApplicableDays,
                format!("Template '{}' applies to no day of the week", tpl.id),
            ));
        }
        if let Err(e) = tpl.time_range() {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidTimeRange,
                format!("Template '{}': {e}", tpl.id),
            ));
        }
    }

    let mut hour_days = HashSet::new();
    for hours in request
        .operating_hours
        .iter()
        .filter(|h| h.location_id == request.location_id)
    {
        if !hour_days.insert(hours.day_of_week) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateOperatingHours,
                format!(
                    "Location '{}' has more than one operating-hours record for {}",
                    hours.location_id, hours.day_of_week
                ),
            ));
        }
        if let Err(e) = hours.range() {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidTimeRange,
                format!(
                    "Operating hours for {} at location '{}': {e}",
                    hours.day_of_week, hours.location_id
                ),
            ));
        }
    }

    for rec in request
        .recurring_assignments
        .iter()
        .filter(|r| r.location_id == request.location_id)
    {
        if !worker_ids.contains(rec.worker_id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownWorker,
                format!(
                    "Recurring assignment '{}' references unknown worker '{}'",
                    rec.id, rec.worker_id
                ),
            ));
        }
        if !template_ids.contains(rec.template_id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownTemplate,
                format!(
                    "Recurring assignment '{}' references unknown template '{}'",
                    rec.id, rec.template_id
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_week(request: &GenerationRequest, errors: &mut Vec<ValidationError>) {
    let dates = &request.week_dates;
    if dates.len() != 7 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidWeek,
            format!("Target week has {} dates, expected 7", dates.len()),
        ));
        return;
    }
    let consecutive = dates
        .windows(2)
        .all(|pair| pair[0].succ_opt() == Some(pair[1]));
    if !consecutive {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidWeek,
            "Target week dates are not consecutive",
        ));
    }
}
