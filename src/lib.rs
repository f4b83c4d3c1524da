//! Weekly shift-schedule generation for multi-location businesses.
//!
//! Given a location's roster, shift templates, operating hours and standing
//! recurring assignments, produces one week of concrete shifts with a worker
//! assigned to each. Generation is single-pass and greedy: recurring
//! assignments are materialized first, then for each date every lead
//! template is filled before any regular one. Candidates are ranked by job
//! level and then by fewest hours accumulated so far this week.
//!
//! # Modules
//!
//! - **`time`**: Clock-time parsing, ranges, weekday/date mapping
//! - **`models`**: Domain types: `Worker`, `ShiftTemplate`,
//!   `LocationOperatingHours`, `RecurringShiftAssignment`, `ScheduledShift`,
//!   `ShiftAssignment`
//! - **`eligibility`**: The predicate deciding whether a worker may take a shift
//! - **`ranking`**: Ordering rules for eligible candidates
//! - **`generation`**: Run state, assigners and the `WeeklyScheduler` driver
//! - **`report`**: Coverage and hours-balance summary of a finished run
//! - **`validation`**: Input integrity checks (duplicate IDs, dangling refs, bad windows)
//!
//! # Example
//!
//! ```
//! use chrono::{NaiveDate, NaiveTime};
//! use u_shift::generation::{GenerationRequest, WeeklyScheduler};
//! use u_shift::models::{JobLevel, LocationOperatingHours, ShiftTemplate, Worker};
//! use u_shift::time::{week_dates_from, DayOfWeek};
//!
//! let t = |h| NaiveTime::from_hms_opt(h, 0, 0).unwrap();
//! let week = week_dates_from(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
//!
//! let request = GenerationRequest::new("store-1", week)
//!     .with_worker(
//!         Worker::new("alice", JobLevel::L3)
//!             .with_position("cashier")
//!             .with_location("store-1"),
//!     )
//!     .with_template(
//!         ShiftTemplate::new("am", "store-1", "cashier", t(9), t(13)).on(DayOfWeek::Monday),
//!     )
//!     .with_operating_hours(LocationOperatingHours::new("store-1", DayOfWeek::Monday, t(8), t(20)));
//!
//! let outcome = WeeklyScheduler::new().generate(&request);
//! assert_eq!(outcome.shifts.len(), 1);
//! assert_eq!(outcome.shifts[0].worker_id, "alice");
//! ```

pub mod eligibility;
pub mod error;
pub mod generation;
pub mod models;
pub mod ranking;
pub mod report;
pub mod time;
pub mod validation;
