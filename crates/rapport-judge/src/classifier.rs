//! Score-to-label classification

use crate::config::LabelThresholds;
use rapport_domain::PolarityLabel;

const LABELS: [PolarityLabel; 6] = [
    PolarityLabel::Supportive,
    PolarityLabel::Cooperative,
    PolarityLabel::Neutral,
    PolarityLabel::Competitive,
    PolarityLabel::Adversarial,
    PolarityLabel::Manipulative,
];

/// Map a polarity score to its label band
///
/// Scans the thresholds from the top; the first lower bound at or below the
/// score wins, so bands are contiguous and left-inclusive. A score below
/// every bound falls into the lowest band. The ambiguous label is not
/// produced here; the orchestrator applies it when confidence is too low.
pub fn classify(score: f64, thresholds: &LabelThresholds) -> PolarityLabel {
    let ordered = thresholds.ordered();
    for (label, bound) in LABELS.iter().zip(ordered) {
        if score >= bound {
            return *label;
        }
    }
    PolarityLabel::Manipulative
}
