//! Trait definitions for the injected history lookup
//!
//! The history store is an external collaborator; the engine only sees the
//! raw interaction records this trait returns. A lookup that finds nothing
//! must return an empty history rather than an error — only an unrecoverable
//! failure of the lookup itself is an `Err`.

use crate::EntityId;
use serde::{Deserialize, Serialize};

/// Outcome of a single past interaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InteractionOutcome {
    /// The interaction went well for both sides
    Cooperative,
    /// Neither cooperative nor conflicting
    Neutral,
    /// The interaction was a conflict
    Conflict,
}

/// One past interaction between the entity pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractionRecord {
    /// When the interaction happened (seconds since Unix epoch)
    pub timestamp: u64,

    /// How the interaction went
    pub outcome: InteractionOutcome,

    /// Severity of the interaction [0.0, 1.0]; meaningful for conflicts
    pub severity: f64,

    /// Optional label ("pricing dispute", "joint venture")
    pub label: Option<String>,
}

impl InteractionRecord {
    /// Create a new record, clamping severity into [0, 1]
    pub fn new(timestamp: u64, outcome: InteractionOutcome, severity: f64) -> Self {
        Self {
            timestamp,
            outcome,
            severity: severity.clamp(0.0, 1.0),
            label: None,
        }
    }

    /// Attach a label to the record
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// Raw interaction history returned by the lookup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct InteractionHistory {
    /// Past interactions, oldest first
    pub records: Vec<InteractionRecord>,
}

impl InteractionHistory {
    /// An empty history (the "not found" value)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether the history holds any records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }
}

/// Trait for looking up interaction history between two entities
///
/// Implemented by the caller's storage layer and injected into the feature
/// extractor. Must be safe to call repeatedly; "no data" is
/// `Ok(InteractionHistory::empty())`, never an error.
pub trait HistoryProvider {
    /// Error type for unrecoverable lookup failures
    type Error: std::fmt::Display;

    /// Fetch the interaction history between two entities
    fn interaction_history(
        &self,
        source: EntityId,
        target: EntityId,
    ) -> Result<InteractionHistory, Self::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_history() {
        let history = InteractionHistory::empty();
        assert!(history.is_empty());
        assert_eq!(history.len(), 0);
    }

    #[test]
    fn test_record_clamps_severity() {
        let record = InteractionRecord::new(1_000, InteractionOutcome::Conflict, 1.4);
        assert_eq!(record.severity, 1.0);

        let record = InteractionRecord::new(1_000, InteractionOutcome::Neutral, -0.1);
        assert_eq!(record.severity, 0.0);
    }

    #[test]
    fn test_record_label() {
        let record = InteractionRecord::new(1_000, InteractionOutcome::Conflict, 0.8)
            .with_label("pricing dispute");
        assert_eq!(record.label.as_deref(), Some("pricing dispute"));
    }
}
