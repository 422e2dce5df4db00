//! Rapport Feature Extraction
//!
//! Derives the seven contextual feature groups the polarity scorer consumes:
//! trigger event, emotional state, relationship history, risk level, stance
//! change, power asymmetry, and prior conflict.
//!
//! # Overview
//!
//! The extractor is pure apart from one injected dependency, the
//! [`rapport_domain::HistoryProvider`] lookup. Missing data is never an
//! error: an empty history leaves the history-derived fields at their
//! defaults, and the confidence estimator downstream reflects the thinner
//! evidence. Only an unrecoverable lookup failure surfaces as a
//! [`FeatureError`].
//!
//! # Example
//!
//! ```
//! use rapport_domain::{
//!     Entity, EntityId, EntityRelationship, EntityType, HistoryProvider, InteractionHistory,
//! };
//! use rapport_features::{FeatureConfig, FeatureExtractor};
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
//! let extractor = FeatureExtractor::new(FeatureConfig::default());
//! let source = Entity::new(EntityId::new(), EntityType::Organization, "Acme");
//! let target = Entity::new(EntityId::new(), EntityType::Organization, "Globex");
//! let relationship = EntityRelationship::new(source.id, target.id, "supplier", 0);
//!
//! let features = extractor
//!     .extract(&relationship, &source, &target, &[], &[], &NoHistory)
//!     .unwrap();
//! assert!(!features.has_history());
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod extractor;
mod history;

pub use config::FeatureConfig;
pub use error::FeatureError;
pub use extractor::FeatureExtractor;
