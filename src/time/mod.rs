//! Time-of-day and calendar utilities.
//!
//! Shift times are same-day wall-clock values ([`NaiveTime`](chrono::NaiveTime));
//! shift dates are calendar days ([`NaiveDate`](chrono::NaiveDate)) keyed by
//! their ISO `yyyy-MM-dd` form.
//!
//! # Range Model
//! Ranges are half-open `[start, end)` and must satisfy `start < end`.
//! Overnight shifts are not modelled; a source that needs them splits them
//! into two same-day ranges.

mod calendar;
mod clock;
mod range;

pub use calendar::{
    day_of_week_from_date, format_date_yyyy_mm_dd, map_day_of_week_to_date, week_dates_from,
    DayOfWeek, ParseDayOfWeekError,
};
pub use clock::{format_time, format_time_with_seconds, parse_time, TimeInput};
pub use range::{calculate_shift_duration_hours, is_time_in_range, time_range_overlaps, TimeRange};
