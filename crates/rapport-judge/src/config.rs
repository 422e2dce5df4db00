//! Configuration for the judgment engine

use serde::{Deserialize, Serialize};

const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Weights for the six polarity components; must sum to 1.0
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FeatureWeights {
    /// Weight of the relationship-history component
    pub relationship_history: f64,
    /// Weight of the pattern-signal component
    pub pattern_signals: f64,
    /// Weight of the emotional-state component
    pub emotional_state: f64,
    /// Weight of the stance-change component
    pub stance_change: f64,
    /// Weight of the power-asymmetry component
    pub power_asymmetry: f64,
    /// Weight of the risk-level component
    pub risk_level: f64,
}

impl FeatureWeights {
    /// Sum of all six weights
    pub fn sum(&self) -> f64 {
        self.relationship_history
            + self.pattern_signals
            + self.emotional_state
            + self.stance_change
            + self.power_asymmetry
            + self.risk_level
    }

    fn validate(&self) -> Result<(), String> {
        let weights = [
            ("relationship_history", self.relationship_history),
            ("pattern_signals", self.pattern_signals),
            ("emotional_state", self.emotional_state),
            ("stance_change", self.stance_change),
            ("power_asymmetry", self.power_asymmetry),
            ("risk_level", self.risk_level),
        ];
        for (name, value) in weights {
            if !(0.0..=1.0).contains(&value) {
                return Err(format!("weight {} must be in [0.0, 1.0]", name));
            }
        }
        if (self.sum() - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(format!("feature weights must sum to 1.0, got {}", self.sum()));
        }
        Ok(())
    }
}

impl Default for FeatureWeights {
    fn default() -> Self {
        Self {
            relationship_history: 0.30,
            pattern_signals: 0.25,
            emotional_state: 0.15,
            stance_change: 0.15,
            power_asymmetry: 0.10,
            risk_level: 0.05,
        }
    }
}

/// Ordered lower bounds for the six score-derived labels
///
/// Bands are contiguous and left-inclusive: scanning from the top, the first
/// threshold at or below the score wins. `ambiguous` is not a band; the
/// orchestrator assigns it when confidence falls below the floor.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LabelThresholds {
    /// Minimum score for `supportive`
    pub supportive: f64,
    /// Minimum score for `cooperative`
    pub cooperative: f64,
    /// Minimum score for `neutral`
    pub neutral: f64,
    /// Minimum score for `competitive`
    pub competitive: f64,
    /// Minimum score for `adversarial`
    pub adversarial: f64,
    /// Minimum score for `manipulative` (the floor of the scale)
    pub manipulative: f64,
}

impl LabelThresholds {
    /// The six thresholds in descending order
    pub fn ordered(&self) -> [f64; 6] {
        [
            self.supportive,
            self.cooperative,
            self.neutral,
            self.competitive,
            self.adversarial,
            self.manipulative,
        ]
    }

    fn validate(&self) -> Result<(), String> {
        let ordered = self.ordered();
        for pair in ordered.windows(2) {
            if pair[0] <= pair[1] {
                return Err(format!(
                    "label thresholds must be strictly descending, got {} then {}",
                    pair[0], pair[1]
                ));
            }
        }
        for value in ordered {
            if !(-1.0..=1.0).contains(&value) {
                return Err(format!("label threshold {} must be in [-1.0, 1.0]", value));
            }
        }
        Ok(())
    }
}

impl Default for LabelThresholds {
    fn default() -> Self {
        Self {
            supportive: 0.7,
            cooperative: 0.3,
            neutral: -0.2,
            competitive: -0.5,
            adversarial: -0.8,
            manipulative: -1.0,
        }
    }
}

/// Full configuration for a [`crate::Judge`] instance
///
/// Validated once at construction; no ambient global defaults are read at
/// call time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JudgeConfig {
    /// Component weights for the polarity score
    pub feature_weights: FeatureWeights,

    /// Ordered label thresholds
    pub label_thresholds: LabelThresholds,

    /// Confidence below which a weakly polarized score becomes `ambiguous`
    pub confidence_floor: f64,

    /// Absolute score at or above which a label survives low confidence
    pub strong_polarity: f64,

    /// Treat causal-chain signals as positive instead of the default
    /// risk-flavored negative
    pub cause_effect_positive: bool,

    /// Version string stamped on every judgment
    pub judgment_version: String,
}

impl JudgeConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        self.feature_weights.validate()?;
        self.label_thresholds.validate()?;
        if !(0.0..=1.0).contains(&self.confidence_floor) {
            return Err("confidence_floor must be in [0.0, 1.0]".to_string());
        }
        if !(0.0..=1.0).contains(&self.strong_polarity) {
            return Err("strong_polarity must be in [0.0, 1.0]".to_string());
        }
        if self.judgment_version.is_empty() {
            return Err("judgment_version must not be empty".to_string());
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

impl Default for JudgeConfig {
    fn default() -> Self {
        Self {
            feature_weights: FeatureWeights::default(),
            label_thresholds: LabelThresholds::default(),
            confidence_floor: 0.35,
            strong_polarity: 0.6,
            cause_effect_positive: false,
            judgment_version: "1.0.0".to_string(),
        }
    }
}
