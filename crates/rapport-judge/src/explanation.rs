//! Explanation generation - ranked evidence and a human-readable summary

use crate::config::FeatureWeights;
use crate::polarity::ComponentBreakdown;
use rapport_domain::{
    ContextualFeatures, EmotionalState, Evidence, EvidenceKind, PatternCode, PatternMatch,
    PolarityLabel, PowerAsymmetry, RiskLevel, StanceChange, Trajectory, TriggerEvent,
};

/// Nominal weight for the trigger event, which informs the narrative but not
/// the score
const TRIGGER_WEIGHT: f64 = 0.05;

/// How many evidence items a judgment cites
const TOP_EVIDENCE: usize = 5;

fn trajectory_text(trajectory: Trajectory) -> &'static str {
    match trajectory {
        Trajectory::Improving => "improving",
        Trajectory::Declining => "declining",
        Trajectory::Volatile => "volatile",
        Trajectory::Stable => "stable",
    }
}

fn emotion_text(state: EmotionalState) -> &'static str {
    match state {
        EmotionalState::Positive => "positive",
        EmotionalState::Calm => "calm",
        EmotionalState::Anxious => "anxious",
        EmotionalState::Defensive => "defensive",
        EmotionalState::Angry => "angry",
    }
}

fn stance_text(change: StanceChange) -> &'static str {
    match change {
        StanceChange::None => "none",
        StanceChange::PositiveShift => "positive shift",
        StanceChange::NegativeShift => "negative shift",
        StanceChange::Volatile => "volatile swings",
        StanceChange::SuddenNegative => "sudden negative turn",
    }
}

fn power_text(asymmetry: PowerAsymmetry) -> &'static str {
    match asymmetry {
        PowerAsymmetry::Symmetric => "symmetric",
        PowerAsymmetry::SourceDominant => "source dominant",
        PowerAsymmetry::TargetDominant => "target dominant",
        PowerAsymmetry::ExtremeAsymmetry => "extreme asymmetry",
    }
}

fn risk_text(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::Low => "low",
        RiskLevel::Medium => "medium",
        RiskLevel::High => "high",
        RiskLevel::Critical => "critical",
    }
}

fn trigger_text(trigger: TriggerEvent) -> &'static str {
    match trigger {
        TriggerEvent::Dispute => "dispute",
        TriggerEvent::Agreement => "agreement",
        TriggerEvent::Transaction => "transaction",
        TriggerEvent::Announcement => "announcement",
        TriggerEvent::Disruption => "disruption",
    }
}

fn pattern_summary(matches: &[PatternMatch]) -> String {
    let names: Vec<&str> = matches
        .iter()
        .filter(|m| m.code != PatternCode::CombinationPatterns)
        .map(|m| m.code.display_name())
        .collect();
    format!("detected patterns: {}", names.join(", "))
}

fn candidates(
    features: &ContextualFeatures,
    matches: &[PatternMatch],
    breakdown: &ComponentBreakdown,
    weights: &FeatureWeights,
) -> Vec<Evidence> {
    let mut out = Vec::new();
    let history = &features.relationship_history;

    if let Some(sub) = breakdown.history {
        out.push(Evidence {
            kind: EvidenceKind::History,
            description: format!(
                "{} cooperative and {} conflict interactions across {} on record, {} trajectory",
                history.cooperation_count,
                history.conflict_count,
                history.interaction_count,
                trajectory_text(history.trajectory),
            ),
            weight: (weights.relationship_history * sub).abs(),
        });
    }
    if let Some(sub) = breakdown.patterns {
        out.push(Evidence {
            kind: EvidenceKind::Pattern,
            description: pattern_summary(matches),
            weight: (weights.pattern_signals * sub).abs(),
        });
    }
    if let Some(sub) = breakdown.emotion {
        let state = features.emotional_state.map(emotion_text).unwrap_or("unknown");
        out.push(Evidence {
            kind: EvidenceKind::Emotion,
            description: format!("dominant emotional tone: {}", state),
            weight: (weights.emotional_state * sub).abs(),
        });
    }
    if let Some(sub) = breakdown.stance {
        out.push(Evidence {
            kind: EvidenceKind::StanceChange,
            description: format!("stance change: {}", stance_text(features.stance_change)),
            weight: (weights.stance_change * sub).abs(),
        });
    }
    if let Some(sub) = breakdown.power {
        out.push(Evidence {
            kind: EvidenceKind::PowerAsymmetry,
            description: format!(
                "power imbalance: {}",
                power_text(features.power_asymmetry)
            ),
            weight: (weights.power_asymmetry * sub).abs(),
        });
    }
    if let Some(sub) = breakdown.risk {
        out.push(Evidence {
            kind: EvidenceKind::Risk,
            description: format!("risk level: {}", risk_text(features.risk_level)),
            weight: (weights.risk_level * sub).abs(),
        });
    }
    if let Some(trigger) = features.trigger_event {
        out.push(Evidence {
            kind: EvidenceKind::Trigger,
            description: format!("recent trigger event: {}", trigger_text(trigger)),
            weight: TRIGGER_WEIGHT,
        });
    }

    out
}

/// Produce the explanation string and the ranked evidence list
///
/// Evidence weight is each component's absolute contribution to the score,
/// normalized over all candidates so the listed items sum to at most 1.0.
/// The top five survive, sorted by descending weight; the explanation cites
/// them in that order.
pub fn generate_explanation(
    features: &ContextualFeatures,
    matches: &[PatternMatch],
    breakdown: &ComponentBreakdown,
    weights: &FeatureWeights,
    score: f64,
    confidence: f64,
    label: PolarityLabel,
) -> (String, Vec<Evidence>) {
    let mut evidence = candidates(features, matches, breakdown, weights);

    let total: f64 = evidence.iter().map(|e| e.weight).sum();
    if total > 0.0 {
        for item in &mut evidence {
            item.weight /= total;
        }
    } else {
        evidence.clear();
    }

    evidence.sort_by(|a, b| {
        b.weight
            .partial_cmp(&a.weight)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    evidence.truncate(TOP_EVIDENCE);

    let explanation = if evidence.is_empty() {
        format!(
            "Judged {} (score {:.2}, confidence {:.2}): no meaningful signals in the available evidence.",
            label, score, confidence,
        )
    } else {
        let clauses: Vec<&str> = evidence.iter().map(|e| e.description.as_str()).collect();
        format!(
            "Judged {} (score {:.2}, confidence {:.2}) based on: {}.",
            label,
            score,
            confidence,
            clauses.join("; "),
        )
    };

    (explanation, evidence)
}
