//! Pattern scoring - reduce pattern matches to one bounded signal

use rapport_domain::{PatternCode, PatternMatch};

/// Per-code contribution weight, signed by role
///
/// Stability codes pull positive, context codes lightly positive, tension
/// codes negative. Causal chains are treated as potentially risky by default
/// because outcome valence is not inspected; `cause_effect_positive` flips
/// that term for callers that judge causal chains favorable.
fn role_weight(code: PatternCode, cause_effect_positive: bool) -> f64 {
    match code {
        // Stability
        PatternCode::RepetitionHabit => 0.4,
        PatternCode::NaturalRhythms => 0.35,
        PatternCode::TemporalPatterns => 0.3,
        // Context
        PatternCode::SpatialRelationships => 0.2,
        PatternCode::FlowMotion => 0.2,
        PatternCode::ColorLight => 0.15,
        // Tension
        PatternCode::DeviationSurprise => -0.4,
        PatternCode::CauseEffect => {
            if cause_effect_positive {
                0.25
            } else {
                -0.25
            }
        }
        // Amplifier, applied separately
        PatternCode::CombinationPatterns => 0.0,
    }
}

/// Whether the code contributes positively when it matches
pub(crate) fn is_positive_role(code: PatternCode, cause_effect_positive: bool) -> Option<bool> {
    match code {
        PatternCode::CombinationPatterns => None,
        _ => Some(role_weight(code, cause_effect_positive) > 0.0),
    }
}

/// Reduce a set of pattern matches to one score in [-1, 1]
///
/// The base score is the mean of the non-zero weighted contributions. If any
/// combination-pattern matches exist and the base score is non-zero, an
/// amplifier of `0.2 * mean(combo confidence)` is added in the direction of
/// the base score: co-occurrence reinforces the established direction rather
/// than acting as an independent signal.
pub fn pattern_score(matches: &[PatternMatch], cause_effect_positive: bool) -> f64 {
    let mut sum = 0.0;
    let mut contributors = 0usize;
    let mut combo_sum = 0.0;
    let mut combo_count = 0usize;

    for m in matches {
        if m.code == PatternCode::CombinationPatterns {
            combo_sum += m.confidence;
            combo_count += 1;
            continue;
        }

        let contribution = role_weight(m.code, cause_effect_positive) * m.confidence;
        if contribution != 0.0 {
            sum += contribution;
            contributors += 1;
        }
    }

    let base = if contributors > 0 {
        sum / contributors as f64
    } else {
        0.0
    };

    let amplified = if combo_count > 0 && base != 0.0 {
        base + 0.2 * (combo_sum / combo_count as f64) * base.signum()
    } else {
        base
    };

    amplified.clamp(-1.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m(code: PatternCode, confidence: f64) -> PatternMatch {
        PatternMatch::new(code, confidence, "test")
    }

    #[test]
    fn test_no_matches_scores_zero() {
        assert_eq!(pattern_score(&[], false), 0.0);
    }

    #[test]
    fn test_stability_matches_average() {
        let matches = vec![
            m(PatternCode::RepetitionHabit, 0.8),
            m(PatternCode::TemporalPatterns, 0.8),
        ];
        // (0.4*0.8 + 0.3*0.8) / 2 = 0.28
        let score = pattern_score(&matches, false);
        assert!((score - 0.28).abs() < 1e-9);
    }

    #[test]
    fn test_tension_pulls_negative() {
        let matches = vec![m(PatternCode::DeviationSurprise, 0.7)];
        let score = pattern_score(&matches, false);
        assert!((score + 0.28).abs() < 1e-9);
    }

    #[test]
    fn test_contradictory_matches_cancel() {
        // +0.4*0.8 and -0.4*0.8 average to zero
        let matches = vec![
            m(PatternCode::RepetitionHabit, 0.8),
            m(PatternCode::DeviationSurprise, 0.8),
        ];
        assert_eq!(pattern_score(&matches, false), 0.0);
    }

    #[test]
    fn test_amplifier_reinforces_direction() {
        let matches = vec![
            m(PatternCode::RepetitionHabit, 0.8),
            m(PatternCode::TemporalPatterns, 0.8),
            m(PatternCode::CombinationPatterns, 0.5),
        ];
        // base 0.28 + 0.2 * 0.5 = 0.38
        let score = pattern_score(&matches, false);
        assert!((score - 0.38).abs() < 1e-9);

        let matches = vec![
            m(PatternCode::DeviationSurprise, 0.7),
            m(PatternCode::CauseEffect, 0.6),
            m(PatternCode::CombinationPatterns, 0.5),
        ];
        // base (-0.28 + -0.15) / 2 = -0.215, amplifier -0.1
        let score = pattern_score(&matches, false);
        assert!((score + 0.315).abs() < 1e-9);
    }

    #[test]
    fn test_amplifier_needs_a_base_direction() {
        // combination alone is not an independent signal
        let matches = vec![m(PatternCode::CombinationPatterns, 0.9)];
        assert_eq!(pattern_score(&matches, false), 0.0);
    }

    #[test]
    fn test_cause_effect_override() {
        let matches = vec![m(PatternCode::CauseEffect, 0.8)];
        let default_score = pattern_score(&matches, false);
        let flipped_score = pattern_score(&matches, true);

        assert!((default_score + 0.2).abs() < 1e-9);
        assert!((flipped_score - 0.2).abs() < 1e-9);
    }

    #[test]
    fn test_score_is_clamped() {
        let matches: Vec<_> = vec![
            m(PatternCode::RepetitionHabit, 1.0),
            m(PatternCode::CombinationPatterns, 1.0),
        ];
        let score = pattern_score(&matches, false);
        assert!(score <= 1.0);
        // 0.4 + 0.2 = 0.6, well inside the bound
        assert!((score - 0.6).abs() < 1e-9);
    }
}
