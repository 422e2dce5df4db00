//! Confidence estimation - how much the evidence supports the score

use crate::pattern_score::is_positive_role;
use crate::polarity::ComponentBreakdown;
use rapport_domain::{ContextualFeatures, PatternMatch};

/// Matches below this confidence do not count toward pattern strength
const STRONG_MATCH_CONFIDENCE: f64 = 0.6;

fn directional_counts(
    matches: &[PatternMatch],
    cause_effect_positive: bool,
) -> (usize, usize) {
    let mut positive = 0usize;
    let mut negative = 0usize;
    for m in matches {
        if m.confidence <= STRONG_MATCH_CONFIDENCE {
            continue;
        }
        match is_positive_role(m.code, cause_effect_positive) {
            Some(true) => positive += 1,
            Some(false) => negative += 1,
            None => {}
        }
    }
    (positive, negative)
}

fn data_volume_term(features: &ContextualFeatures) -> f64 {
    let count = features.relationship_history.interaction_count;
    if count >= 10 {
        0.3
    } else if count >= 5 {
        0.2
    } else {
        0.1
    }
}

/// Pattern strength counts the directional majority of strong matches.
/// Opposed strong matches subtract from each other; a pile of contradictory
/// evidence is weak evidence, not strong evidence.
fn pattern_strength_term(positive: usize, negative: usize) -> f64 {
    match positive.abs_diff(negative) {
        0 => 0.0,
        1 => 0.15,
        _ => 0.3,
    }
}

fn consistency_term(breakdown: &ComponentBreakdown, contradictory: bool) -> f64 {
    if contradictory {
        return 0.0;
    }
    let signals: Vec<f64> = breakdown
        .present()
        .into_iter()
        .filter(|s| *s != 0.0)
        .collect();
    if signals.is_empty() {
        return 0.1;
    }
    let all_positive = signals.iter().all(|s| *s > 0.0);
    let all_negative = signals.iter().all(|s| *s < 0.0);
    if all_positive || all_negative {
        0.2
    } else {
        0.1
    }
}

/// Estimate confidence in a judgment from evidence volume and coherence
///
/// Four additive terms: data volume (up to 0.3), pattern strength (up to
/// 0.3), signal consistency (up to 0.2), and a 0.2 bonus for any recorded
/// history at all. Clamped into [0, 1]. Strong but opposed pattern matches
/// zero out the consistency term entirely.
pub fn estimate_confidence(
    features: &ContextualFeatures,
    matches: &[PatternMatch],
    breakdown: &ComponentBreakdown,
    cause_effect_positive: bool,
) -> f64 {
    let (positive, negative) = directional_counts(matches, cause_effect_positive);
    let contradictory = positive > 0 && negative > 0;

    let mut confidence = data_volume_term(features);
    confidence += pattern_strength_term(positive, negative);
    confidence += consistency_term(breakdown, contradictory);
    if features.has_history() {
        confidence += 0.2;
    }

    confidence.clamp(0.0, 1.0)
}
