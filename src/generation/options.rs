//! Run configuration.
//!
//! The generator has no environment or file configuration. A host that wants
//! reproducible output embeds [`GenerationOptions`] in its own config and
//! passes it through.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How fresh shift and assignment ids are produced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IdStrategy {
    /// Random v4 UUIDs.
    #[default]
    Uuid,
    /// `{prefix}-{n}` with a per-run counter starting at 1.
    Sequential {
        /// Id prefix.
        prefix: String,
    },
}

/// Options for one generation run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationOptions {
    /// Id generation strategy.
    pub id_strategy: IdStrategy,
    /// Fixed creation timestamp for all records. `None` = now, taken once per run.
    pub generated_at: Option<DateTime<Utc>>,
}

impl GenerationOptions {
    /// Default options (UUIDs, current time).
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses sequential ids with the given prefix.
    pub fn with_sequential_ids(mut self, prefix: impl Into<String>) -> Self {
        self.id_strategy = IdStrategy::Sequential {
            prefix: prefix.into(),
        };
        self
    }

    /// Pins the creation timestamp.
    pub fn with_generated_at(mut self, at: DateTime<Utc>) -> Self {
        self.generated_at = Some(at);
        self
    }
}
