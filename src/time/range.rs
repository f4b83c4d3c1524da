//! Same-day time ranges.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use super::format_time_with_seconds;
use crate::error::{TimeError, TimeResult};

/// A time-of-day interval [start, end).
///
/// Half-open interval: includes start, excludes end. Construction rejects
/// empty and inverted ranges.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimeRange {
    start: NaiveTime,
    end: NaiveTime,
}

impl TimeRange {
    /// Creates a range, failing with [`TimeError::InvalidRange`] if `end <= start`.
    pub fn new(start: NaiveTime, end: NaiveTime) -> TimeResult<Self> {
        if end <= start {
            return Err(TimeError::InvalidRange {
                start: format_time_with_seconds(start),
                end: format_time_with_seconds(end),
            });
        }
        Ok(Self { start, end })
    }

    /// Range start (inclusive).
    #[inline]
    pub fn start(&self) -> NaiveTime {
        self.start
    }

    /// Range end (exclusive).
    #[inline]
    pub fn end(&self) -> NaiveTime {
        self.end
    }

    /// Length of the range in hours.
    pub fn duration_hours(&self) -> f64 {
        (self.end - self.start).num_milliseconds() as f64 / 3_600_000.0
    }

    /// Whether a time falls within this range.
    #[inline]
    pub fn contains(&self, time: NaiveTime) -> bool {
        time >= self.start && time < self.end
    }

    /// Whether two ranges overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Whether `other` lies entirely inside this range.
    pub fn covers(&self, other: &Self) -> bool {
        other.start >= self.start && other.end <= self.end
    }
}

/// Whether two same-day ranges overlap.
///
/// Touching ranges (`a.end == b.start`) do not overlap.
pub fn time_range_overlaps(a: &TimeRange, b: &TimeRange) -> bool {
    a.overlaps(b)
}

/// Whether `time` falls within `range`.
pub fn is_time_in_range(time: NaiveTime, range: &TimeRange) -> bool {
    range.contains(time)
}

/// Shift length in hours.
///
/// # Errors
/// [`TimeError::InvalidRange`] if `end <= start`.
pub fn calculate_shift_duration_hours(start: NaiveTime, end: NaiveTime) -> TimeResult<f64> {
    Ok(TimeRange::new(start, end)?.duration_hours())
}
