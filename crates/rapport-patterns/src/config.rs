//! Configuration for pattern detection

use serde::{Deserialize, Serialize};

/// Tunable knobs for the nine pattern detectors
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectorConfig {
    /// Confidence added per keyword hit
    pub hit_increment: f64,

    /// Upper bound on any single detector's confidence
    pub confidence_cap: f64,

    /// Bonus when an event mentions both entities of the pair
    pub co_mention_bonus: f64,

    /// Bonus for dynamic entity types in the flow/motion detector
    pub entity_type_bonus: f64,

    /// Bonus when both entities of the pair are locations
    pub location_pair_bonus: f64,

    /// Bonus when event timestamps show near-regular intervals
    pub regular_interval_bonus: f64,

    /// Maximum coefficient of variation still counted as regular timing
    pub regular_interval_cv: f64,
}

impl DetectorConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.hit_increment <= 0.0 || self.hit_increment > 1.0 {
            return Err("hit_increment must be in (0.0, 1.0]".to_string());
        }
        if !(0.0..=1.0).contains(&self.confidence_cap) {
            return Err("confidence_cap must be in [0.0, 1.0]".to_string());
        }
        if self.regular_interval_cv <= 0.0 {
            return Err("regular_interval_cv must be positive".to_string());
        }
        Ok(())
    }
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            hit_increment: 0.3,
            confidence_cap: 0.95,
            co_mention_bonus: 0.2,
            entity_type_bonus: 0.1,
            location_pair_bonus: 0.3,
            regular_interval_bonus: 0.3,
            regular_interval_cv: 0.25,
        }
    }
}
