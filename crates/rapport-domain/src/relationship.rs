//! Relationship module - the record being judged

use crate::judgment::{PolarityLabel, RelationshipJudgment};
use crate::EntityId;
use serde::{Deserialize, Serialize};

/// A directed relationship between two entities
///
/// Owned by the upstream extractor; the engine reads it and returns a
/// judgment as a value. The judgment fields here are the write-back slots
/// the caller fills via [`EntityRelationship::with_judgment`] — the engine
/// itself never mutates shared state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityRelationship {
    /// Source entity ID
    pub source: EntityId,

    /// Target entity ID
    pub target: EntityId,

    /// Free-form relationship label ("supplier", "competitor")
    pub relationship_type: String,

    /// When this relationship was established (seconds since Unix epoch)
    pub created_at: u64,

    /// Last computed polarity score, if judged
    pub polarity_score: Option<f64>,

    /// Last computed polarity label, if judged
    pub polarity_label: Option<PolarityLabel>,

    /// Caller-defined judgment metadata
    pub judgment_metadata: Option<serde_json::Value>,

    /// When the last judgment was produced
    pub judged_at: Option<u64>,

    /// Engine version that produced the last judgment
    pub judgment_version: Option<String>,
}

impl EntityRelationship {
    /// Create a new, not-yet-judged relationship
    pub fn new(
        source: EntityId,
        target: EntityId,
        relationship_type: impl Into<String>,
        created_at: u64,
    ) -> Self {
        Self {
            source,
            target,
            relationship_type: relationship_type.into(),
            created_at,
            polarity_score: None,
            polarity_label: None,
            judgment_metadata: None,
            judged_at: None,
            judgment_version: None,
        }
    }

    /// Return a copy with the judgment fields applied
    ///
    /// This is the caller-side write-back: the engine returns the judgment
    /// value and the caller decides whether to fold it into its own record.
    pub fn with_judgment(mut self, judgment: &RelationshipJudgment) -> Self {
        self.polarity_score = Some(judgment.polarity_score);
        self.polarity_label = Some(judgment.polarity_label);
        self.judged_at = Some(judgment.judged_at);
        self.judgment_version = Some(judgment.judgment_version.clone());
        self
    }
}
