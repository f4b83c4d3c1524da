//! Location operating hours.
//!
//! Each location has at most one open/close window per weekday. A template
//! instance can only be staffed when its window lies inside that day's
//! operating hours; a weekday with no record cannot be staffed at all.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::TimeResult;
use crate::time::{DayOfWeek, TimeRange};

/// Open/close window of a location on one weekday.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationOperatingHours {
    /// Location identifier.
    pub location_id: String,
    /// Weekday this window applies to.
    pub day_of_week: DayOfWeek,
    /// Opening time.
    pub open_time: NaiveTime,
    /// Closing time.
    pub close_time: NaiveTime,
}

impl LocationOperatingHours {
    /// Creates an operating-hours record.
    pub fn new(
        location_id: impl Into<String>,
        day_of_week: DayOfWeek,
        open_time: NaiveTime,
        close_time: NaiveTime,
    ) -> Self {
        Self {
            location_id: location_id.into(),
            day_of_week,
            open_time,
            close_time,
        }
    }

    /// Opening window as a range. Fails if `close_time <= open_time`.
    pub fn range(&self) -> TimeResult<TimeRange> {
        TimeRange::new(self.open_time, self.close_time)
    }

    /// Whether `[start, end)` lies inside the opening window.
    ///
    /// Compares bounds only; an inverted `[start, end)` is judged by its
    /// endpoints and left for duration checks to reject.
    pub fn covers(&self, start: NaiveTime, end: NaiveTime) -> bool {
        start >= self.open_time && end <= self.close_time
    }
}

/// Operating hours of one location, keyed by weekday.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OperatingHoursMap {
    /// Location identifier.
    pub location_id: String,
    days: BTreeMap<DayOfWeek, LocationOperatingHours>,
}

impl OperatingHoursMap {
    /// Creates an empty map (location closed every day).
    pub fn new(location_id: impl Into<String>) -> Self {
        Self {
            location_id: location_id.into(),
            days: BTreeMap::new(),
        }
    }

    /// Builds the map for `location_id` from a mixed record list.
    ///
    /// Records for other locations are ignored. If a weekday appears twice,
    /// the last record wins.
    pub fn from_records<'a>(
        location_id: impl Into<String>,
        records: impl IntoIterator<Item = &'a LocationOperatingHours>,
    ) -> Self {
        let mut map = Self::new(location_id);
        for record in records {
            if record.location_id == map.location_id {
                map.days.insert(record.day_of_week, record.clone());
            }
        }
        map
    }

    /// Adds a window for one weekday (builder style).
    pub fn with_day(mut self, day: DayOfWeek, open_time: NaiveTime, close_time: NaiveTime) -> Self {
        let record = LocationOperatingHours::new(self.location_id.clone(), day, open_time, close_time);
        self.days.insert(day, record);
        self
    }

    /// The window for a weekday, if the location opens that day.
    pub fn get(&self, day: DayOfWeek) -> Option<&LocationOperatingHours> {
        self.days.get(&day)
    }

    /// Weekdays with a window.
    pub fn days(&self) -> impl Iterator<Item = DayOfWeek> + '_ {
        self.days.keys().copied()
    }

    /// Number of weekdays with a window.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Whether no weekday has a window.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}
