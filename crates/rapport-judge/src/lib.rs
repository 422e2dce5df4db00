//! Rapport Judgment Engine
//!
//! Composes pattern detection, feature extraction, scoring, classification,
//! confidence estimation, and explanation into the single public entry point
//! [`Judge::judge`].
//!
//! # Architecture
//!
//! ```text
//! Entities + Events → PatternDetector → FeatureExtractor
//!                          ↓                  ↓
//!                    pattern score → polarity score → label
//!                          ↓                  ↓          ↓
//!                       confidence  →  ambiguous override
//!                                         ↓
//!                        explanation + ranked evidence
//!                                         ↓
//!                              RelationshipJudgment
//! ```
//!
//! Every call is independent and side-effect-free; batch analysis is a plain
//! map over [`Judge::judge_many`]. Configuration is validated once at
//! [`Judge::new`], never at call time.
//!
//! # Example
//!
//! ```
//! use rapport_domain::{
//!     Entity, EntityId, EntityRelationship, EntityType, Event, HistoryProvider,
//!     InteractionHistory,
//! };
//! use rapport_judge::{Judge, JudgeConfig, JudgmentRequest};
//!
//! struct NoHistory;
//!
//! impl HistoryProvider for NoHistory {
//!     type Error = String;
//!     fn interaction_history(
//!         &self,
//!         _source: EntityId,
//!         _target: EntityId,
//!     ) -> Result<InteractionHistory, Self::Error> {
//!         Ok(InteractionHistory::empty())
//!     }
//! }
//!
//! let judge = Judge::new(JudgeConfig::default()).unwrap();
//! let source = Entity::new(EntityId::new(), EntityType::Organization, "Acme");
//! let target = Entity::new(EntityId::new(), EntityType::Organization, "Globex");
//! let request = JudgmentRequest {
//!     relationship: EntityRelationship::new(source.id, target.id, "supplier", 0),
//!     entities: vec![source, target],
//!     events: vec![],
//! };
//!
//! let judgment = judge.judge(&request, &NoHistory).unwrap();
//! assert!((-1.0..=1.0).contains(&judgment.polarity_score));
//! ```

#![warn(missing_docs)]

mod classifier;
mod confidence;
mod config;
mod error;
mod explanation;
mod judge;
mod pattern_score;
mod polarity;

pub use classifier::classify;
pub use confidence::estimate_confidence;
pub use config::{FeatureWeights, JudgeConfig, LabelThresholds};
pub use error::JudgeError;
pub use explanation::generate_explanation;
pub use judge::{Judge, JudgmentRequest};
pub use pattern_score::pattern_score;
pub use polarity::{polarity_score, ComponentBreakdown};
