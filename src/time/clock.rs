//! Wall-clock parsing and formatting.

use chrono::NaiveTime;

use crate::error::{TimeError, TimeResult};

/// Input accepted by [`parse_time`].
///
/// Text is normalized to minute precision. A structured value is passed
/// through untouched, sub-minute fields included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeInput<'a> {
    /// `HH:mm` or `HH:mm:ss`.
    Text(&'a str),
    /// An already-parsed time of day.
    Time(NaiveTime),
}

impl<'a> From<&'a str> for TimeInput<'a> {
    fn from(s: &'a str) -> Self {
        TimeInput::Text(s)
    }
}

impl<'a> From<&'a String> for TimeInput<'a> {
    fn from(s: &'a String) -> Self {
        TimeInput::Text(s.as_str())
    }
}

impl From<NaiveTime> for TimeInput<'_> {
    fn from(t: NaiveTime) -> Self {
        TimeInput::Time(t)
    }
}

/// Parses a time of day.
///
/// Strings must have exactly two or three `:`-separated numeric components
/// with hour in `0..=23` and minute in `0..=59`. Seconds are parsed but
/// dropped: the result always has zero seconds and nanoseconds.
/// A [`NaiveTime`] input is returned as an identical copy.
///
/// # Errors
/// - [`TimeError::InvalidFormat`] when the component count is not 2 or 3.
/// - [`TimeError::InvalidValue`] for non-numeric or out-of-range components.
///
/// # Examples
/// ```
/// use chrono::{NaiveTime, Timelike};
/// use u_shift::time::parse_time;
///
/// let t = parse_time("14:30:15").unwrap();
/// assert_eq!((t.hour(), t.minute(), t.second()), (14, 30, 0));
///
/// let exact = NaiveTime::from_hms_milli_opt(9, 15, 42, 250).unwrap();
/// assert_eq!(parse_time(exact).unwrap(), exact);
///
/// assert!(parse_time("14").is_err());
/// ```
pub fn parse_time<'a>(input: impl Into<TimeInput<'a>>) -> TimeResult<NaiveTime> {
    match input.into() {
        TimeInput::Time(t) => Ok(t),
        TimeInput::Text(s) => parse_time_str(s),
    }
}

fn parse_time_str(input: &str) -> TimeResult<NaiveTime> {
    let parts: Vec<&str> = input.split(':').collect();
    if !(2..=3).contains(&parts.len()) {
        return Err(TimeError::format(input));
    }

    let mut values = [0u32; 3];
    for (slot, part) in values.iter_mut().zip(&parts) {
        *slot = parse_component(part).ok_or_else(|| TimeError::value(input))?;
    }

    let [hour, minute, _seconds] = values;
    if hour > 23 || minute > 59 {
        return Err(TimeError::value(input));
    }

    NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(|| TimeError::value(input))
}

fn parse_component(part: &str) -> Option<u32> {
    let part = part.trim();
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

/// Formats a time of day as `HH:mm`.
pub fn format_time(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

/// Formats a time of day as `HH:mm:ss`.
pub fn format_time_with_seconds(time: NaiveTime) -> String {
    time.format("%H:%M:%S").to_string()
}
