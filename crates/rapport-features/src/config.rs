//! Configuration for the feature extractor

use serde::{Deserialize, Serialize};

/// Tunable thresholds for feature derivation
///
/// The windowing constants pin down the qualitative "recent vs. historical"
/// comparison: the recent window is the last `recent_window_fraction` of
/// interactions or `recent_window_min`, whichever is larger.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureConfig {
    /// Minimum size of the recent interaction window
    pub recent_window_min: usize,

    /// Fraction of the full history used as the recent window
    pub recent_window_fraction: f64,

    /// Cooperation-ratio delta that counts as an improving/declining trajectory
    pub trajectory_threshold: f64,

    /// Cooperation-ratio delta that counts as a stance shift
    pub shift_threshold: f64,

    /// Recent conflict ratio required for a sudden-negative stance
    pub sudden_recent_conflict_ratio: f64,

    /// Maximum baseline conflict ratio still counted as stable-or-positive
    pub sudden_baseline_conflict_ratio: f64,

    /// Windowed net-sign flips required to call the history volatile
    pub volatile_flip_count: usize,

    /// Influence-scale ratio that makes one side dominant
    pub dominance_ratio: f64,

    /// Influence-scale ratio that counts as extreme asymmetry
    pub extreme_ratio: f64,

    /// Conflict share of interactions that escalates risk
    pub high_conflict_ratio: f64,
}

impl FeatureConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.recent_window_min == 0 {
            return Err("recent_window_min must be greater than 0".to_string());
        }
        if !(0.0..=1.0).contains(&self.recent_window_fraction) {
            return Err("recent_window_fraction must be in [0.0, 1.0]".to_string());
        }
        for (name, value) in [
            ("trajectory_threshold", self.trajectory_threshold),
            ("shift_threshold", self.shift_threshold),
            ("sudden_recent_conflict_ratio", self.sudden_recent_conflict_ratio),
            ("sudden_baseline_conflict_ratio", self.sudden_baseline_conflict_ratio),
            ("high_conflict_ratio", self.high_conflict_ratio),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(format!("{} must be in [0.0, 1.0]", name));
            }
        }
        if self.dominance_ratio <= 1.0 {
            return Err("dominance_ratio must be greater than 1.0".to_string());
        }
        if self.extreme_ratio <= self.dominance_ratio {
            return Err("extreme_ratio must exceed dominance_ratio".to_string());
        }
        Ok(())
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to a TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for FeatureConfig {
    fn default() -> Self {
        Self {
            recent_window_min: 5,
            recent_window_fraction: 0.2,
            trajectory_threshold: 0.1,
            shift_threshold: 0.15,
            sudden_recent_conflict_ratio: 0.6,
            sudden_baseline_conflict_ratio: 0.3,
            volatile_flip_count: 2,
            dominance_ratio: 3.0,
            extreme_ratio: 10.0,
            high_conflict_ratio: 0.5,
        }
    }
}
