//! Polarity scoring - weighted combination of the six contextual components

use crate::config::FeatureWeights;
use rapport_domain::{
    ContextualFeatures, EmotionalState, PowerAsymmetry, RiskLevel, StanceChange, Trajectory,
};

/// Per-component sub-scores behind a polarity score
///
/// `None` means the component carried no signal for this call (no history
/// records, no detected emotion, symmetric power, low risk) and was left out
/// of the weighted combination entirely.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ComponentBreakdown {
    /// Relationship-history sub-score
    pub history: Option<f64>,
    /// Pattern-signal sub-score
    pub patterns: Option<f64>,
    /// Emotional-state sub-score
    pub emotion: Option<f64>,
    /// Stance-change sub-score
    pub stance: Option<f64>,
    /// Power-asymmetry sub-score
    pub power: Option<f64>,
    /// Risk-level sub-score
    pub risk: Option<f64>,
}

impl ComponentBreakdown {
    /// The sub-scores that carried signal
    pub fn present(&self) -> Vec<f64> {
        [
            self.history,
            self.patterns,
            self.emotion,
            self.stance,
            self.power,
            self.risk,
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

fn history_sub_score(features: &ContextualFeatures) -> Option<f64> {
    let history = &features.relationship_history;
    if history.interaction_count == 0 {
        return None;
    }

    let base = (history.cooperation_count as f64 - history.conflict_count as f64)
        / history.interaction_count as f64;

    let adjusted = match history.trajectory {
        Trajectory::Improving => base + 0.2,
        Trajectory::Declining => base - 0.2,
        // a volatile history weakens whatever lean the counts show
        Trajectory::Volatile => base * 0.5,
        Trajectory::Stable => base,
    };

    Some(adjusted.clamp(-1.0, 1.0))
}

/// Square-root emphasis keeps moderate pattern evidence visible next to the
/// history component; the pattern scorer's contributor-count averaging
/// compresses multi-match evidence well below its per-match weights.
fn pattern_sub_score(pattern_score: f64) -> Option<f64> {
    if pattern_score == 0.0 {
        return None;
    }
    Some(pattern_score.signum() * pattern_score.abs().sqrt())
}

fn emotion_sub_score(features: &ContextualFeatures) -> Option<f64> {
    features.emotional_state.map(|state| match state {
        EmotionalState::Positive => 0.6,
        EmotionalState::Calm => 0.3,
        EmotionalState::Anxious => -0.4,
        EmotionalState::Defensive => -0.5,
        EmotionalState::Angry => -0.8,
    })
}

fn stance_sub_score(features: &ContextualFeatures) -> Option<f64> {
    match features.stance_change {
        StanceChange::None => None,
        StanceChange::PositiveShift => Some(0.6),
        StanceChange::NegativeShift => Some(-0.6),
        StanceChange::Volatile => Some(-0.3),
        StanceChange::SuddenNegative => Some(-0.9),
    }
}

fn power_sub_score(features: &ContextualFeatures, negative_evidence: bool) -> Option<f64> {
    match features.power_asymmetry {
        PowerAsymmetry::Symmetric => None,
        PowerAsymmetry::SourceDominant | PowerAsymmetry::TargetDominant => Some(-0.2),
        PowerAsymmetry::ExtremeAsymmetry => {
            if negative_evidence {
                Some(-0.9)
            } else {
                Some(-0.4)
            }
        }
    }
}

fn risk_sub_score(features: &ContextualFeatures, negative_evidence: bool) -> Option<f64> {
    match features.risk_level {
        RiskLevel::Low => None,
        RiskLevel::Medium => Some(-0.1),
        RiskLevel::High => {
            if negative_evidence {
                Some(-0.7)
            } else {
                Some(-0.5)
            }
        }
        RiskLevel::Critical => Some(-0.8),
    }
}

/// Combine the six components into one polarity score in [-1, 1]
///
/// The weighted sum runs over components that carry signal, renormalized by
/// the present weight mass, so absent features dilute nothing. Power and
/// risk darken further when the history or pattern evidence is already
/// negative.
pub fn polarity_score(
    features: &ContextualFeatures,
    pattern_score: f64,
    weights: &FeatureWeights,
) -> (f64, ComponentBreakdown) {
    let history = history_sub_score(features);
    let patterns = pattern_sub_score(pattern_score);

    let negative_evidence =
        history.unwrap_or(0.0) < 0.0 || patterns.unwrap_or(0.0) < 0.0;

    let breakdown = ComponentBreakdown {
        history,
        patterns,
        emotion: emotion_sub_score(features),
        stance: stance_sub_score(features),
        power: power_sub_score(features, negative_evidence),
        risk: risk_sub_score(features, negative_evidence),
    };

    let weighted = [
        (breakdown.history, weights.relationship_history),
        (breakdown.patterns, weights.pattern_signals),
        (breakdown.emotion, weights.emotional_state),
        (breakdown.stance, weights.stance_change),
        (breakdown.power, weights.power_asymmetry),
        (breakdown.risk, weights.risk_level),
    ];

    let mut sum = 0.0;
    let mut mass = 0.0;
    for (sub_score, weight) in weighted {
        if let Some(s) = sub_score {
            sum += s * weight;
            mass += weight;
        }
    }

    let score = if mass > 0.0 { (sum / mass).clamp(-1.0, 1.0) } else { 0.0 };
    (score, breakdown)
}
