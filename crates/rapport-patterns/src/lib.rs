//! Rapport Pattern Detection
//!
//! Nine independent detectors scan an entity pair's events and metadata for
//! structural "cognition pattern" signals. Each detector emits at most one
//! [`rapport_domain::PatternMatch`] per call, with a confidence proportional
//! to heuristic strength (keyword hit density, entity-type matches, timing
//! regularity). Detection is a pure function over the provided inputs.
//!
//! # Example
//!
//! ```
//! use rapport_domain::{Entity, EntityId, EntityType, Event};
//! use rapport_patterns::{DetectorConfig, PatternDetector};
//!
//! let detector = PatternDetector::new(DetectorConfig::default());
//! let acme = Entity::new(EntityId::new(), EntityType::Organization, "Acme");
//! let globex = Entity::new(EntityId::new(), EntityType::Organization, "Globex");
//! let events = vec![Event::new(
//!     vec![acme.id, globex.id],
//!     "Acme always ships to Globex every Monday",
//!     1_000,
//! )];
//!
//! let matches = detector.detect(&acme, &globex, &events);
//! assert!(!matches.is_empty());
//! ```

#![warn(missing_docs)]

mod config;
mod detector;

pub use config::DetectorConfig;
pub use detector::PatternDetector;
