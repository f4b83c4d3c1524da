//! Schedule generation.
//!
//! Turns templates, workers, operating hours and recurring assignments into
//! scheduled shifts for one location and one week. The run is a
//! deterministic, single-pass greedy allocation: no backtracking, no global
//! optimization, and unfillable slots stay empty.
//!
//! # Components
//!
//! - [`ScheduleGenerationState`]: the run's ledger (hours, per-day occupancy,
//!   output so far)
//! - [`apply_recurring_assignments`]: standing commitments, applied first
//! - [`assign_lead_shifts`] / [`assign_dynamic_shifts`]: fill one template
//!   instance with the best-ranked eligible worker
//! - [`WeeklyScheduler`]: the driver that sequences all of the above
//!
//! # Concurrency
//! A state value belongs to exactly one run. Runs for different locations
//! may execute in parallel, each with its own state.

mod assign;
mod options;
mod outcome;
mod recurring;
mod scheduler;
mod state;
mod warning;

pub use assign::{
    assign_dynamic_shifts, assign_dynamic_shifts_ranked, assign_lead_shifts,
    assign_lead_shifts_ranked,
};
pub use options::{GenerationOptions, IdStrategy};
pub use outcome::GenerationOutcome;
pub use recurring::apply_recurring_assignments;
pub use scheduler::{GenerationRequest, WeeklyScheduler};
pub use state::ScheduleGenerationState;
pub use warning::{GenerationWarning, ShiftKind};
