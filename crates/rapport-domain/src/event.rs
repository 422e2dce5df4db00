//! Event module - free-text observations associated with entities

use crate::EntityId;
use serde::{Deserialize, Serialize};

/// An event observed by an upstream collaborator
///
/// Events carry the free text the pattern detectors and feature extractor
/// scan for trigger and emotion signals. `entity_ids` lists the entities the
/// event mentions, which is how co-mention heuristics relate an event to an
/// entity pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Entities this event mentions
    pub entity_ids: Vec<EntityId>,

    /// Free-form event text
    pub text: String,

    /// When the event occurred (seconds since Unix epoch)
    pub timestamp: u64,
}

impl Event {
    /// Create a new event
    pub fn new(entity_ids: Vec<EntityId>, text: impl Into<String>, timestamp: u64) -> Self {
        Self {
            entity_ids,
            text: text.into(),
            timestamp,
        }
    }

    /// Whether this event mentions the given entity
    pub fn mentions(&self, id: EntityId) -> bool {
        self.entity_ids.contains(&id)
    }

    /// Whether this event mentions both entities of a pair
    pub fn mentions_pair(&self, a: EntityId, b: EntityId) -> bool {
        self.mentions(a) && self.mentions(b)
    }
}
