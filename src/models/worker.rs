//! Worker model.
//!
//! Workers are the people shifts are assigned to. Each carries a seniority
//! rank, the positions they are qualified for, the locations they may work
//! at, and an optional lead qualification.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Ordinal seniority rank. Higher = more senior.
///
/// Declaration order is rank order, so the derived `Ord` is the natural
/// comparison (`L1 < L2 < ... < L5`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum JobLevel {
    /// Entry level.
    #[default]
    L1,
    L2,
    L3,
    L4,
    /// Most senior.
    L5,
}

impl JobLevel {
    /// Numeric rank (1-5).
    pub fn rank(&self) -> u8 {
        match self {
            JobLevel::L1 => 1,
            JobLevel::L2 => 2,
            JobLevel::L3 => 3,
            JobLevel::L4 => 4,
            JobLevel::L5 => 5,
        }
    }
}

/// Kind of lead a template requires (or a worker is qualified for).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LeadType {
    /// Opens the location.
    Opening,
    /// Closes the location.
    Closing,
    /// Domain-specific lead kind.
    Custom(String),
}

/// A worker that can be assigned to shifts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Worker {
    /// Unique worker identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Seniority rank.
    pub job_level: JobLevel,
    /// Whether the worker may take lead shifts at all.
    pub is_lead_eligible: bool,
    /// Lead kinds the worker is restricted to. Empty = any kind.
    pub lead_types: BTreeSet<LeadType>,
    /// Positions the worker is qualified for.
    pub position_ids: BTreeSet<String>,
    /// Locations the worker is assigned to.
    pub location_ids: BTreeSet<String>,
    /// Inactive (soft-deleted) workers are never scheduled.
    pub is_active: bool,
    /// Preferred weekly hours. Reported against, never enforced.
    pub preferred_hours_per_week: Option<f64>,
}

impl Worker {
    /// Creates an active, non-lead worker with no qualifications.
    pub fn new(id: impl Into<String>, job_level: JobLevel) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            job_level,
            is_lead_eligible: false,
            lead_types: BTreeSet::new(),
            position_ids: BTreeSet::new(),
            location_ids: BTreeSet::new(),
            is_active: true,
            preferred_hours_per_week: None,
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Adds a qualified position.
    pub fn with_position(mut self, position_id: impl Into<String>) -> Self {
        self.position_ids.insert(position_id.into());
        self
    }

    /// Adds an assigned location.
    pub fn with_location(mut self, location_id: impl Into<String>) -> Self {
        self.location_ids.insert(location_id.into());
        self
    }

    /// Marks the worker lead-eligible for any lead kind.
    pub fn lead_eligible(mut self) -> Self {
        self.is_lead_eligible = true;
        self
    }

    /// Marks the worker lead-eligible and restricts them to `lead_type`
    /// (cumulative with earlier calls).
    pub fn with_lead_type(mut self, lead_type: LeadType) -> Self {
        self.is_lead_eligible = true;
        self.lead_types.insert(lead_type);
        self
    }

    /// Sets preferred weekly hours.
    pub fn with_preferred_hours(mut self, hours: f64) -> Self {
        self.preferred_hours_per_week = Some(hours);
        self
    }

    /// Marks the worker inactive.
    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }

    /// Whether the worker is qualified for a position.
    pub fn is_qualified_for(&self, position_id: &str) -> bool {
        self.position_ids.contains(position_id)
    }

    /// Whether the worker is assigned to a location.
    pub fn is_assigned_to(&self, location_id: &str) -> bool {
        self.location_ids.contains(location_id)
    }

    /// Whether the worker may lead a shift of the given kind.
    pub fn can_lead(&self, lead_type: &LeadType) -> bool {
        self.is_lead_eligible && (self.lead_types.is_empty() || self.lead_types.contains(lead_type))
    }
}
