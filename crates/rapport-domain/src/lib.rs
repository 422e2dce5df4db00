//! Rapport Domain Layer
//!
//! This crate contains the data model and trait interfaces for the rapport
//! relationship polarity judgment engine. It defines the value objects the
//! upstream extractor produces, the feature bundle the engine derives, and
//! the immutable judgment the engine returns.
//!
//! ## Key Concepts
//!
//! - **Entity / Event**: read-only records produced by the upstream extractor
//! - **Pattern match**: one of nine structural cognition-pattern signals
//! - **Contextual features**: the seven derived feature groups
//! - **Polarity**: a signed score in [-1, 1] plus a discrete label
//! - **Judgment**: immutable, serializable result created fresh on every call
//!
//! ## Architecture
//!
//! - Value objects only; no I/O and no mutable shared state
//! - Trait definitions for the one external dependency (history lookup)
//! - Scoring and classification live in the `rapport-judge` crate

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod entity;
pub mod event;
pub mod features;
pub mod history;
pub mod judgment;
pub mod pattern;
pub mod relationship;

// Re-exports for convenience
pub use entity::{Entity, EntityId, EntityType};
pub use event::Event;
pub use features::{
    ConflictSeverity, ContextualFeatures, EmotionalState, PowerAsymmetry, PriorConflict,
    RelationshipHistory, RiskLevel, StanceChange, Trajectory, TriggerEvent,
};
pub use history::{HistoryProvider, InteractionHistory, InteractionOutcome, InteractionRecord};
pub use judgment::{Evidence, EvidenceKind, PolarityLabel, RelationshipJudgment};
pub use pattern::{PatternCode, PatternMatch};
pub use relationship::EntityRelationship;
