//! Pattern module - the nine structural cognition-pattern signals

use serde::{Deserialize, Serialize};

/// One of the nine cognition-pattern codes
///
/// Each code has a fixed role in pattern scoring: the stability codes pull
/// the score positive, the tension codes pull it negative, the context codes
/// add light positive signal, and `CombinationPatterns` amplifies whatever
/// direction the others already established.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternCode {
    /// Movement, trajectory, and speed signals
    FlowMotion,
    /// Cyclic, periodic, or seasonal signals
    NaturalRhythms,
    /// Visual-attribute signals (brightness, contrast, named colors)
    ColorLight,
    /// Routine and frequency signals ("always", "every", "habit")
    RepetitionHabit,
    /// Co-location and overlapping-market signals
    SpatialRelationships,
    /// Regular timing and sequence signals
    TemporalPatterns,
    /// Anomaly and unexpected-change signals
    DeviationSurprise,
    /// Causal-chain phrasing linking two events
    CauseEffect,
    /// Co-occurrence of two or more of the other eight codes
    CombinationPatterns,
}

impl PatternCode {
    /// All nine codes in detector order
    pub const ALL: [PatternCode; 9] = [
        PatternCode::FlowMotion,
        PatternCode::NaturalRhythms,
        PatternCode::ColorLight,
        PatternCode::RepetitionHabit,
        PatternCode::SpatialRelationships,
        PatternCode::TemporalPatterns,
        PatternCode::DeviationSurprise,
        PatternCode::CauseEffect,
        PatternCode::CombinationPatterns,
    ];

    /// Get the code name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            PatternCode::FlowMotion => "flow_motion",
            PatternCode::NaturalRhythms => "natural_rhythms",
            PatternCode::ColorLight => "color_light",
            PatternCode::RepetitionHabit => "repetition_habit",
            PatternCode::SpatialRelationships => "spatial_relationships",
            PatternCode::TemporalPatterns => "temporal_patterns",
            PatternCode::DeviationSurprise => "deviation_surprise",
            PatternCode::CauseEffect => "cause_effect",
            PatternCode::CombinationPatterns => "combination_patterns",
        }
    }

    /// Parse a pattern code from a string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "flow_motion" => Some(PatternCode::FlowMotion),
            "natural_rhythms" => Some(PatternCode::NaturalRhythms),
            "color_light" => Some(PatternCode::ColorLight),
            "repetition_habit" => Some(PatternCode::RepetitionHabit),
            "spatial_relationships" => Some(PatternCode::SpatialRelationships),
            "temporal_patterns" => Some(PatternCode::TemporalPatterns),
            "deviation_surprise" => Some(PatternCode::DeviationSurprise),
            "cause_effect" => Some(PatternCode::CauseEffect),
            "combination_patterns" => Some(PatternCode::CombinationPatterns),
            _ => None,
        }
    }

    /// Human-readable name used in explanations
    pub fn display_name(&self) -> &'static str {
        match self {
            PatternCode::FlowMotion => "flow/motion",
            PatternCode::NaturalRhythms => "natural rhythms",
            PatternCode::ColorLight => "color/light",
            PatternCode::RepetitionHabit => "repetition/habit",
            PatternCode::SpatialRelationships => "spatial relationships",
            PatternCode::TemporalPatterns => "temporal patterns",
            PatternCode::DeviationSurprise => "deviation/surprise",
            PatternCode::CauseEffect => "cause/effect",
            PatternCode::CombinationPatterns => "combination patterns",
        }
    }
}

/// A detected pattern signal for an entity pair
///
/// At most one match per code is produced per analysis call. Matches are
/// never persisted by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternMatch {
    /// Which pattern fired
    pub code: PatternCode,

    /// Detector confidence [0.0, 1.0], proportional to heuristic strength
    pub confidence: f64,

    /// Short context snippet supporting the match
    pub context: String,
}

impl PatternMatch {
    /// Create a new pattern match, clamping confidence into [0, 1]
    pub fn new(code: PatternCode, confidence: f64, context: impl Into<String>) -> Self {
        Self {
            code,
            confidence: confidence.clamp(0.0, 1.0),
            context: context.into(),
        }
    }
}
