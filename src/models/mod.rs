//! Shift-scheduling domain models.
//!
//! Input records ([`Worker`], [`ShiftTemplate`], [`LocationOperatingHours`],
//! [`RecurringShiftAssignment`]) are supplied by the host's data layer and
//! treated as read-only. Output records ([`ScheduledShift`],
//! [`ShiftAssignment`]) are created by the generator and handed back for
//! persistence.
//!
//! # Domain Mappings
//!
//! | u-shift | Retail | Food service | Clinic |
//! |---------|--------|--------------|--------|
//! | Worker | Associate | Crew member | Nurse |
//! | ShiftTemplate | Register slot | Line station | Ward cover |
//! | Lead shift | Key holder | Shift manager | Charge nurse |
//! | Location | Store | Restaurant | Site |

mod location;
mod recurring;
mod shift;
mod template;
mod worker;

pub use location::{LocationOperatingHours, OperatingHoursMap};
pub use recurring::RecurringShiftAssignment;
pub use shift::{AssignmentType, ParseAssignmentTypeError, ScheduledShift, ShiftAssignment};
pub use template::ShiftTemplate;
pub use worker::{JobLevel, LeadType, Worker};
