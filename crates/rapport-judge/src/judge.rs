//! The judgment orchestrator

use crate::classifier::classify;
use crate::confidence::estimate_confidence;
use crate::config::JudgeConfig;
use crate::error::JudgeError;
use crate::explanation::generate_explanation;
use crate::pattern_score::pattern_score;
use crate::polarity::polarity_score;
use rapport_domain::{
    Entity, EntityRelationship, Event, HistoryProvider, PolarityLabel, RelationshipJudgment,
};
use rapport_features::{FeatureConfig, FeatureExtractor};
use rapport_patterns::{DetectorConfig, PatternDetector};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::debug;

/// Everything one judgment call needs
///
/// The entity list must contain both relationship endpoints; events are the
/// free-text observations the detectors and extractor scan.
#[derive(Debug, Clone)]
pub struct JudgmentRequest {
    /// The relationship to judge
    pub relationship: EntityRelationship,

    /// Entities referenced by the relationship and events
    pub entities: Vec<Entity>,

    /// Observed events for the pair
    pub events: Vec<Event>,
}

/// The polarity judgment engine
///
/// Holds validated configuration plus the pattern detector and feature
/// extractor it composes. Every [`Judge::judge`] call is independent; the
/// engine keeps no state between calls and never mutates its inputs.
pub struct Judge {
    config: JudgeConfig,
    detector: PatternDetector,
    extractor: FeatureExtractor,
}

impl Judge {
    /// Create a judge with default detector and extractor configuration
    pub fn new(config: JudgeConfig) -> Result<Self, JudgeError> {
        Self::with_configs(config, DetectorConfig::default(), FeatureConfig::default())
    }

    /// Create a judge with explicit sub-component configuration
    pub fn with_configs(
        config: JudgeConfig,
        detector_config: DetectorConfig,
        feature_config: FeatureConfig,
    ) -> Result<Self, JudgeError> {
        config.validate().map_err(JudgeError::Configuration)?;
        detector_config
            .validate()
            .map_err(JudgeError::Configuration)?;
        feature_config
            .validate()
            .map_err(JudgeError::Configuration)?;

        Ok(Self {
            config,
            detector: PatternDetector::new(detector_config),
            extractor: FeatureExtractor::new(feature_config),
        })
    }

    /// The configuration this judge was built with
    pub fn config(&self) -> &JudgeConfig {
        &self.config
    }

    /// Judge one relationship
    ///
    /// Runs the full pipeline: pattern detection, feature extraction,
    /// pattern and polarity scoring, classification, confidence estimation,
    /// and explanation. Thin evidence lowers confidence rather than
    /// erroring; only malformed input, a failing history lookup, or a bad
    /// configuration raise.
    pub fn judge<H: HistoryProvider>(
        &self,
        request: &JudgmentRequest,
        provider: &H,
    ) -> Result<RelationshipJudgment, JudgeError> {
        let (source, target) = self.resolve_endpoints(request)?;

        let matches = self
            .detector
            .detect(source, target, &request.events);
        debug!(
            "Detected {} pattern matches for {} -> {}",
            matches.len(),
            source.text,
            target.text
        );

        let features = self.extractor.extract(
            &request.relationship,
            source,
            target,
            &request.events,
            &matches,
            provider,
        )?;

        let pattern = pattern_score(&matches, self.config.cause_effect_positive);
        let (score, breakdown) =
            polarity_score(&features, pattern, &self.config.feature_weights);
        let confidence = estimate_confidence(
            &features,
            &matches,
            &breakdown,
            self.config.cause_effect_positive,
        );

        let mut label = classify(score, &self.config.label_thresholds);
        if confidence < self.config.confidence_floor && score.abs() < self.config.strong_polarity
        {
            label = PolarityLabel::Ambiguous;
        }

        debug!(
            "Judged {} -> {}: score {:.3}, confidence {:.2}, label {}",
            source.text, target.text, score, confidence, label
        );

        let (explanation, top_evidence) = generate_explanation(
            &features,
            &matches,
            &breakdown,
            &self.config.feature_weights,
            score,
            confidence,
            label,
        );

        Ok(RelationshipJudgment {
            polarity_score: score,
            polarity_label: label,
            confidence,
            explanation,
            top_evidence,
            contextual_features: features,
            judged_at: unix_now(),
            judgment_version: self.config.judgment_version.clone(),
        })
    }

    /// Judge a batch of relationships, preserving input order
    ///
    /// Each request is judged independently; one malformed request does not
    /// sink the rest of the batch.
    pub fn judge_many<H: HistoryProvider>(
        &self,
        requests: &[JudgmentRequest],
        provider: &H,
    ) -> Vec<Result<RelationshipJudgment, JudgeError>> {
        requests.iter().map(|r| self.judge(r, provider)).collect()
    }

    fn resolve_endpoints<'a>(
        &self,
        request: &'a JudgmentRequest,
    ) -> Result<(&'a Entity, &'a Entity), JudgeError> {
        let find = |id| request.entities.iter().find(|e| e.id == id);

        let source = find(request.relationship.source).ok_or_else(|| {
            JudgeError::InvalidInput(format!(
                "source entity {} not present in request entities",
                request.relationship.source
            ))
        })?;
        let target = find(request.relationship.target).ok_or_else(|| {
            JudgeError::InvalidInput(format!(
                "target entity {} not present in request entities",
                request.relationship.target
            ))
        })?;

        if request.relationship.source == request.relationship.target {
            return Err(JudgeError::InvalidInput(
                "relationship endpoints must be distinct entities".to_string(),
            ));
        }
        for entity in [source, target] {
            if entity.text.trim().is_empty() {
                return Err(JudgeError::InvalidInput(format!(
                    "entity {} has empty text",
                    entity.id
                )));
            }
        }

        Ok((source, target))
    }
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rapport_domain::{EntityId, EntityType, InteractionHistory};

    struct NoHistory;

    impl HistoryProvider for NoHistory {
        type Error = String;
        fn interaction_history(
            &self,
            _source: EntityId,
            _target: EntityId,
        ) -> Result<InteractionHistory, Self::Error> {
            Ok(InteractionHistory::empty())
        }
    }

    struct BrokenHistory;

    impl HistoryProvider for BrokenHistory {
        type Error = String;
        fn interaction_history(
            &self,
            _source: EntityId,
            _target: EntityId,
        ) -> Result<InteractionHistory, Self::Error> {
            Err("store offline".to_string())
        }
    }

    fn request() -> JudgmentRequest {
        let source = Entity::new(EntityId::from_value(1), EntityType::Organization, "Acme");
        let target = Entity::new(EntityId::from_value(2), EntityType::Organization, "Globex");
        JudgmentRequest {
            relationship: EntityRelationship::new(source.id, target.id, "supplier", 1_000),
            entities: vec![source, target],
            events: vec![],
        }
    }

    #[test]
    fn test_invalid_config_rejected_at_construction() {
        let mut config = JudgeConfig::default();
        config.confidence_floor = 1.5;
        assert!(matches!(
            Judge::new(config),
            Err(JudgeError::Configuration(_))
        ));
    }

    #[test]
    fn test_missing_endpoint_is_invalid_input() {
        let judge = Judge::new(JudgeConfig::default()).unwrap();
        let mut req = request();
        req.entities.pop();

        assert!(matches!(
            judge.judge(&req, &NoHistory),
            Err(JudgeError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_self_relationship_is_invalid_input() {
        let judge = Judge::new(JudgeConfig::default()).unwrap();
        let entity = Entity::new(EntityId::from_value(1), EntityType::Person, "Alice");
        let req = JudgmentRequest {
            relationship: EntityRelationship::new(entity.id, entity.id, "self", 1_000),
            entities: vec![entity],
            events: vec![],
        };

        assert!(matches!(
            judge.judge(&req, &NoHistory),
            Err(JudgeError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_empty_entity_text_is_invalid_input() {
        let judge = Judge::new(JudgeConfig::default()).unwrap();
        let source = Entity::new(EntityId::from_value(1), EntityType::Organization, "  ");
        let target = Entity::new(EntityId::from_value(2), EntityType::Organization, "Globex");
        let req = JudgmentRequest {
            relationship: EntityRelationship::new(source.id, target.id, "supplier", 1_000),
            entities: vec![source, target],
            events: vec![],
        };

        assert!(matches!(
            judge.judge(&req, &NoHistory),
            Err(JudgeError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_failing_lookup_propagates() {
        let judge = Judge::new(JudgeConfig::default()).unwrap();
        let err = judge.judge(&request(), &BrokenHistory).unwrap_err();
        assert!(matches!(err, JudgeError::FeatureExtraction(_)));
        assert!(err.to_string().contains("store offline"));
    }

    #[test]
    fn test_judge_many_isolates_failures() {
        let judge = Judge::new(JudgeConfig::default()).unwrap();
        let good = request();
        let mut bad = request();
        bad.entities.clear();

        let results = judge.judge_many(&[good, bad], &NoHistory);
        assert_eq!(results.len(), 2);
        assert!(results[0].is_ok());
        assert!(results[1].is_err());
    }

    #[test]
    fn test_judgment_is_stamped() {
        let judge = Judge::new(JudgeConfig::default()).unwrap();
        let judgment = judge.judge(&request(), &NoHistory).unwrap();

        assert_eq!(judgment.judgment_version, "1.0.0");
        assert!(judgment.judged_at > 0);
        assert!(judgment.evidence_is_well_formed());
    }
}
