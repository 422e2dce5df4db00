//! Contextual feature bundle derived per judgment call

use serde::{Deserialize, Serialize};

/// Classification of the most recent salient event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriggerEvent {
    /// Lawsuit, dispute, or open disagreement
    Dispute,
    /// Agreement, deal, or partnership
    Agreement,
    /// Payment, acquisition, or other transaction
    Transaction,
    /// Public announcement or launch
    Announcement,
    /// Breach, failure, recall, or other disruption
    Disruption,
}

/// Dominant emotional tone detected in recent event text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmotionalState {
    /// Explicitly positive tone
    Positive,
    /// Calm or confident tone
    Calm,
    /// Anxious or worried tone
    Anxious,
    /// Defensive tone
    Defensive,
    /// Angry or hostile tone
    Angry,
}

/// Direction of the relationship over time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Trajectory {
    /// Recent cooperation ratio exceeds the full-history ratio
    Improving,
    /// Recent cooperation ratio trails the full-history ratio
    Declining,
    /// Net sign flips repeatedly across recent windows
    Volatile,
    /// No significant movement either way
    #[default]
    Stable,
}

/// Aggregated interaction history for the entity pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct RelationshipHistory {
    /// Total interactions on record
    pub interaction_count: usize,
    /// Interactions with a cooperative outcome
    pub cooperation_count: usize,
    /// Interactions with a conflict outcome
    pub conflict_count: usize,
    /// Days between the oldest and newest record
    pub relationship_age_days: u64,
    /// Direction of the relationship over time
    pub trajectory: Trajectory,
}

/// Risk escalation level for the pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    /// No notable risk signals
    #[default]
    Low,
    /// Some escalating signal present
    Medium,
    /// Strong escalating signal present
    High,
    /// Multiple strong escalating signals present
    Critical,
}

/// Detected directional shift in relationship tone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum StanceChange {
    /// No shift detected (or no history to compare)
    #[default]
    None,
    /// Recent interactions warmer than the baseline
    PositiveShift,
    /// Recent interactions cooler than the baseline
    NegativeShift,
    /// Signs alternate across recent windows
    Volatile,
    /// High-confidence negative turn after a stable-or-positive baseline
    SuddenNegative,
}

/// Relative influence/resource imbalance between the two entities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PowerAsymmetry {
    /// Influence scales are comparable
    #[default]
    Symmetric,
    /// Source entity dominates
    SourceDominant,
    /// Target entity dominates
    TargetDominant,
    /// One side's scale exceeds the other by a large multiplier
    ExtremeAsymmetry,
}

/// Severity bucket for past conflict
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictSeverity {
    /// Sparse, old conflict
    Minor,
    /// Recurring or recent conflict
    Moderate,
    /// Frequent or very recent conflict
    Severe,
}

/// Direct aggregation of past conflict between the pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PriorConflict {
    /// Whether any conflict is on record
    pub has_conflict: bool,
    /// Number of conflict interactions
    pub conflict_count: usize,
    /// Days since the most recent conflict, relative to the newest record
    pub last_conflict_days_ago: Option<u64>,
    /// Severity bucket from conflict frequency and recency
    pub severity: Option<ConflictSeverity>,
    /// Distinct conflict labels seen in the history
    pub conflict_types: Vec<String>,
}

/// The seven contextual feature groups derived for one judgment call
///
/// Missing data is never an error: absent features stay `None`/default and
/// are reflected through a lower confidence score instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ContextualFeatures {
    /// Classification of the most recent salient event
    pub trigger_event: Option<TriggerEvent>,

    /// Dominant emotional tone in recent event text
    pub emotional_state: Option<EmotionalState>,

    /// Aggregated interaction history
    pub relationship_history: RelationshipHistory,

    /// Risk escalation level
    pub risk_level: RiskLevel,

    /// Detected stance shift
    pub stance_change: StanceChange,

    /// Influence imbalance between the entities
    pub power_asymmetry: PowerAsymmetry,

    /// Aggregated past conflict
    pub prior_conflict: PriorConflict,
}

impl ContextualFeatures {
    /// Whether the history lookup returned any data for this pair
    pub fn has_history(&self) -> bool {
        self.relationship_history.interaction_count > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_empty() {
        let features = ContextualFeatures::default();

        assert!(features.trigger_event.is_none());
        assert!(features.emotional_state.is_none());
        assert_eq!(features.relationship_history.trajectory, Trajectory::Stable);
        assert_eq!(features.risk_level, RiskLevel::Low);
        assert_eq!(features.stance_change, StanceChange::None);
        assert_eq!(features.power_asymmetry, PowerAsymmetry::Symmetric);
        assert!(!features.prior_conflict.has_conflict);
        assert!(!features.has_history());
    }

    #[test]
    fn test_risk_level_ordering() {
        assert!(RiskLevel::Low < RiskLevel::Medium);
        assert!(RiskLevel::Medium < RiskLevel::High);
        assert!(RiskLevel::High < RiskLevel::Critical);
    }

    #[test]
    fn test_conflict_severity_ordering() {
        assert!(ConflictSeverity::Minor < ConflictSeverity::Moderate);
        assert!(ConflictSeverity::Moderate < ConflictSeverity::Severe);
    }
}
