//! Recurring (standing) shift assignments.

use serde::{Deserialize, Serialize};

/// A standing worker-to-template commitment.
///
/// Applied before ad-hoc generation so the worker keeps their usual slot on
/// every date the template applies to, without competing in ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecurringShiftAssignment {
    /// Unique record identifier.
    pub id: String,
    /// Committed worker.
    pub worker_id: String,
    /// Template the worker holds.
    pub template_id: String,
    /// Location (denormalized from the template).
    pub location_id: String,
    /// Position (denormalized from the template).
    pub position_id: String,
}

impl RecurringShiftAssignment {
    /// Creates a recurring assignment.
    pub fn new(
        id: impl Into<String>,
        worker_id: impl Into<String>,
        template_id: impl Into<String>,
        location_id: impl Into<String>,
        position_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            worker_id: worker_id.into(),
            template_id: template_id.into(),
            location_id: location_id.into(),
            position_id: position_id.into(),
        }
    }
}
