//! Shift template model.
//!
//! A template is a recurring shift shape: one position at one location,
//! between a start and end time, on a set of weekdays. Expanding a template
//! over a target week yields at most one instance per applicable date.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::LeadType;
use crate::error::TimeResult;
use crate::time::{calculate_shift_duration_hours, day_of_week_from_date, DayOfWeek, TimeRange};

/// A recurring shift shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftTemplate {
    /// Unique template identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Location the shift is worked at.
    pub location_id: String,
    /// Position the shift staffs.
    pub position_id: String,
    /// Weekdays the template applies to.
    pub days: BTreeSet<DayOfWeek>,
    /// Nominal start time.
    pub start_time: NaiveTime,
    /// Nominal end time.
    pub end_time: NaiveTime,
    /// Lead kind. `None` = regular shift.
    pub lead_type: Option<LeadType>,
}

impl ShiftTemplate {
    /// Creates a regular template that applies to no day yet.
    pub fn new(
        id: impl Into<String>,
        location_id: impl Into<String>,
        position_id: impl Into<String>,
        start_time: NaiveTime,
        end_time: NaiveTime,
    ) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            location_id: location_id.into(),
            position_id: position_id.into(),
            days: BTreeSet::new(),
            start_time,
            end_time,
            lead_type: None,
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Adds an applicable weekday.
    pub fn on(mut self, day: DayOfWeek) -> Self {
        self.days.insert(day);
        self
    }

    /// Adds several applicable weekdays.
    pub fn on_days(mut self, days: impl IntoIterator<Item = DayOfWeek>) -> Self {
        self.days.extend(days);
        self
    }

    /// Makes this a lead template.
    pub fn with_lead(mut self, lead_type: LeadType) -> Self {
        self.lead_type = Some(lead_type);
        self
    }

    /// Whether this is a lead template.
    #[inline]
    pub fn is_lead(&self) -> bool {
        self.lead_type.is_some()
    }

    /// Whether the template applies on a weekday.
    pub fn applies_on(&self, day: DayOfWeek) -> bool {
        self.days.contains(&day)
    }

    /// Whether the template has an instance on a calendar date.
    pub fn applies_on_date(&self, date: NaiveDate) -> bool {
        self.applies_on(day_of_week_from_date(date))
    }

    /// Nominal time range. Fails if `end_time <= start_time`.
    pub fn time_range(&self) -> TimeResult<TimeRange> {
        TimeRange::new(self.start_time, self.end_time)
    }

    /// Nominal length in hours. Fails if `end_time <= start_time`.
    pub fn duration_hours(&self) -> TimeResult<f64> {
        calculate_shift_duration_hours(self.start_time, self.end_time)
    }
}
