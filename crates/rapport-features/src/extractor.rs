//! Core FeatureExtractor implementation

use crate::config::FeatureConfig;
use crate::error::FeatureError;
use crate::history;
use rapport_domain::{
    ContextualFeatures, EmotionalState, Entity, EntityRelationship, EntityType, Event,
    HistoryProvider, PatternCode, PatternMatch, PowerAsymmetry, RiskLevel, TriggerEvent,
};
use tracing::debug;

const ANGRY_KEYWORDS: &[&str] = &["angry", "furious", "hostile", "outraged", "enraged", "fury"];
const DEFENSIVE_KEYWORDS: &[&str] = &["defensive", "denied", "pushed back", "deflected", "refuted"];
const ANXIOUS_KEYWORDS: &[&str] = &["anxious", "worried", "concerned", "nervous", "fear", "uneasy"];
const CALM_KEYWORDS: &[&str] = &["calm", "confident", "steady", "measured", "composed"];
const POSITIVE_KEYWORDS: &[&str] = &["pleased", "delighted", "thrilled", "welcomed", "praised"];

const DISPUTE_KEYWORDS: &[&str] = &["lawsuit", "sued", "dispute", "disagreement", "litigation"];
const DISRUPTION_KEYWORDS: &[&str] = &["breach", "failure", "recall", "outage", "disruption", "walked away"];
const TRANSACTION_KEYWORDS: &[&str] = &["payment", "paid", "acquisition", "acquired", "purchase", "invested"];
const AGREEMENT_KEYWORDS: &[&str] = &["agreement", "deal", "partnership", "signed", "alliance"];
const ANNOUNCEMENT_KEYWORDS: &[&str] = &["announced", "announcement", "launch", "unveiled"];

const FINANCIAL_MAGNITUDE_KEYWORDS: &[&str] = &["million", "billion"];

/// Derives the contextual feature bundle for one entity pair
///
/// Pure apart from the injected history lookup. Detected pattern matches are
/// passed in because risk escalation reads the deviation/surprise signal.
pub struct FeatureExtractor {
    config: FeatureConfig,
}

impl FeatureExtractor {
    /// Create an extractor with the given configuration
    pub fn new(config: FeatureConfig) -> Self {
        Self { config }
    }

    /// Create an extractor with default configuration
    pub fn default_config() -> Self {
        Self::new(FeatureConfig::default())
    }

    /// Derive the seven feature groups for the relationship
    ///
    /// An empty history leaves every history-derived field at its default;
    /// only a failing lookup is an error.
    pub fn extract<H: HistoryProvider>(
        &self,
        relationship: &EntityRelationship,
        source: &Entity,
        target: &Entity,
        events: &[Event],
        matches: &[PatternMatch],
        provider: &H,
    ) -> Result<ContextualFeatures, FeatureError> {
        let raw = provider
            .interaction_history(relationship.source, relationship.target)
            .map_err(|e| FeatureError::HistoryLookup(e.to_string()))?;

        debug!(
            "Extracting features: {} history records, {} events, {} pattern matches",
            raw.len(),
            events.len(),
            matches.len()
        );

        let relationship_history = history::summarize(&raw.records, &self.config);
        let stance_change = history::stance_change(&raw.records, &self.config);
        let prior_conflict = history::prior_conflict(&raw.records);

        // Newest-first scan so the latest tone wins
        let mut ordered: Vec<&Event> = events.iter().collect();
        ordered.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

        let emotional_state = ordered.iter().find_map(|e| classify_emotion(&e.text));
        let trigger_event = ordered.iter().find_map(|e| classify_trigger(&e.text));

        let power_asymmetry = self.power_asymmetry(source, target, events);

        let risk_level = self.risk_level(
            source,
            target,
            events,
            matches,
            relationship_history.interaction_count,
            relationship_history.conflict_count,
        );

        Ok(ContextualFeatures {
            trigger_event,
            emotional_state,
            relationship_history,
            risk_level,
            stance_change,
            power_asymmetry,
            prior_conflict,
        })
    }

    /// Compare coarse influence scales derived from entity type and
    /// magnitude mentions
    fn power_asymmetry(&self, source: &Entity, target: &Entity, events: &[Event]) -> PowerAsymmetry {
        let source_scale = influence_scale(source, events);
        let target_scale = influence_scale(target, events);

        let (bigger, smaller) = if source_scale >= target_scale {
            (source_scale, target_scale)
        } else {
            (target_scale, source_scale)
        };
        if smaller <= 0.0 {
            return PowerAsymmetry::Symmetric;
        }

        let ratio = bigger / smaller;
        if ratio >= self.config.extreme_ratio {
            PowerAsymmetry::ExtremeAsymmetry
        } else if ratio >= self.config.dominance_ratio {
            if source_scale >= target_scale {
                PowerAsymmetry::SourceDominant
            } else {
                PowerAsymmetry::TargetDominant
            }
        } else {
            PowerAsymmetry::Symmetric
        }
    }

    /// Escalate risk with financial magnitude, deviation signals, and
    /// conflict share
    fn risk_level(
        &self,
        source: &Entity,
        target: &Entity,
        events: &[Event],
        matches: &[PatternMatch],
        interaction_count: usize,
        conflict_count: usize,
    ) -> RiskLevel {
        let mut signals = 0;

        let financial_entity = source.entity_type == EntityType::Money
            || target.entity_type == EntityType::Money;
        let magnitude_mention = events.iter().any(|e| {
            let text = e.text.to_lowercase();
            FINANCIAL_MAGNITUDE_KEYWORDS.iter().any(|k| text.contains(k))
        });
        if financial_entity || magnitude_mention {
            signals += 1;
        }

        if matches
            .iter()
            .any(|m| m.code == PatternCode::DeviationSurprise)
        {
            signals += 1;
        }

        if interaction_count > 0
            && conflict_count as f64 > self.config.high_conflict_ratio * interaction_count as f64
        {
            signals += 1;
        }

        match signals {
            0 => RiskLevel::Low,
            1 => RiskLevel::Medium,
            2 => RiskLevel::High,
            _ => RiskLevel::Critical,
        }
    }
}

/// Coarse influence scale from entity type plus magnitude mentions
fn influence_scale(entity: &Entity, events: &[Event]) -> f64 {
    let base = match entity.entity_type {
        EntityType::Organization => 3.0,
        EntityType::Law => 2.5,
        EntityType::Product => 1.5,
        EntityType::Person | EntityType::Location | EntityType::Event | EntityType::Money => 1.0,
        EntityType::Date => 0.5,
    };

    let multiplier = events
        .iter()
        .filter(|e| e.mentions(entity.id))
        .map(|e| {
            let text = e.text.to_lowercase();
            if text.contains("billion") {
                4.0
            } else if text.contains("million") {
                2.0
            } else {
                1.0
            }
        })
        .fold(1.0_f64, f64::max);

    base * multiplier
}

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| text.contains(k))
}

fn classify_emotion(text: &str) -> Option<EmotionalState> {
    let text = text.to_lowercase();
    if contains_any(&text, ANGRY_KEYWORDS) {
        Some(EmotionalState::Angry)
    } else if contains_any(&text, DEFENSIVE_KEYWORDS) {
        Some(EmotionalState::Defensive)
    } else if contains_any(&text, ANXIOUS_KEYWORDS) {
        Some(EmotionalState::Anxious)
    } else if contains_any(&text, POSITIVE_KEYWORDS) {
        Some(EmotionalState::Positive)
    } else if contains_any(&text, CALM_KEYWORDS) {
        Some(EmotionalState::Calm)
    } else {
        None
    }
}

fn classify_trigger(text: &str) -> Option<TriggerEvent> {
    let text = text.to_lowercase();
    if contains_any(&text, DISPUTE_KEYWORDS) {
        Some(TriggerEvent::Dispute)
    } else if contains_any(&text, DISRUPTION_KEYWORDS) {
        Some(TriggerEvent::Disruption)
    } else if contains_any(&text, TRANSACTION_KEYWORDS) {
        Some(TriggerEvent::Transaction)
    } else if contains_any(&text, AGREEMENT_KEYWORDS) {
        Some(TriggerEvent::Agreement)
    } else if contains_any(&text, ANNOUNCEMENT_KEYWORDS) {
        Some(TriggerEvent::Announcement)
    } else {
        None
    }
}
