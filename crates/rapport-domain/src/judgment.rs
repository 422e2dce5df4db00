//! Judgment module - the immutable output value of the engine

use crate::ContextualFeatures;
use serde::{Deserialize, Serialize};

/// Discrete relationship category derived from score and confidence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolarityLabel {
    /// Strongly favorable relationship
    Supportive,
    /// Favorable, working relationship
    Cooperative,
    /// No meaningful lean either way
    Neutral,
    /// Rivalrous but within normal bounds
    Competitive,
    /// Openly hostile relationship
    Adversarial,
    /// One-sided exploitation signals
    Manipulative,
    /// Evidence is contradictory or too thin to classify
    Ambiguous,
}

impl PolarityLabel {
    /// Get the label name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            PolarityLabel::Supportive => "supportive",
            PolarityLabel::Cooperative => "cooperative",
            PolarityLabel::Neutral => "neutral",
            PolarityLabel::Competitive => "competitive",
            PolarityLabel::Adversarial => "adversarial",
            PolarityLabel::Manipulative => "manipulative",
            PolarityLabel::Ambiguous => "ambiguous",
        }
    }

    /// Parse a label from a string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "supportive" => Some(PolarityLabel::Supportive),
            "cooperative" => Some(PolarityLabel::Cooperative),
            "neutral" => Some(PolarityLabel::Neutral),
            "competitive" => Some(PolarityLabel::Competitive),
            "adversarial" => Some(PolarityLabel::Adversarial),
            "manipulative" => Some(PolarityLabel::Manipulative),
            "ambiguous" => Some(PolarityLabel::Ambiguous),
            _ => None,
        }
    }
}

impl std::fmt::Display for PolarityLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of evidence cited in an explanation
///
/// One kind per scoring component, plus the trigger event, so every term
/// that contributed to the score can be cited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvidenceKind {
    /// Structural pattern signal
    Pattern,
    /// Interaction history
    History,
    /// Emotional tone
    Emotion,
    /// Trigger event
    Trigger,
    /// Stance shift
    StanceChange,
    /// Power imbalance
    PowerAsymmetry,
    /// Risk level
    Risk,
}

/// One ranked evidence item behind a judgment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evidence {
    /// What kind of signal this is
    pub kind: EvidenceKind,

    /// Short human-readable description
    pub description: String,

    /// Normalized absolute contribution to the final score; the listed
    /// items sum to at most 1.0
    pub weight: f64,
}

/// The immutable result of one judgment call
///
/// Created fresh on every call and never mutated afterwards; callers decide
/// whether and how to persist it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationshipJudgment {
    /// Continuous polarity score [-1.0, 1.0]
    pub polarity_score: f64,

    /// Discrete label derived from score and confidence
    pub polarity_label: PolarityLabel,

    /// Confidence in the judgment [0.0, 1.0]
    pub confidence: f64,

    /// Human-readable, evidence-citing explanation
    pub explanation: String,

    /// Top contributing evidence, sorted by descending weight
    pub top_evidence: Vec<Evidence>,

    /// The feature bundle the judgment was computed from
    pub contextual_features: ContextualFeatures,

    /// When the judgment was produced (seconds since Unix epoch)
    pub judged_at: u64,

    /// Engine version string from the configuration
    pub judgment_version: String,
}

impl RelationshipJudgment {
    /// Whether the evidence list is sorted by descending weight and sums to ≤ 1
    pub fn evidence_is_well_formed(&self) -> bool {
        let sorted = self
            .top_evidence
            .windows(2)
            .all(|pair| pair[0].weight >= pair[1].weight);
        let total: f64 = self.top_evidence.iter().map(|e| e.weight).sum();
        sorted && total <= 1.0 + 1e-9
    }
}
