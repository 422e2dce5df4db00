//! The nine cognition-pattern detectors

use crate::DetectorConfig;
use rapport_domain::{Entity, EntityType, Event, PatternCode, PatternMatch};

const FLOW_MOTION_KEYWORDS: &[&str] = &[
    "moving", "movement", "shift", "shifting", "accelerat", "momentum", "trajectory", "speed",
    "rapid", "flow", "surge",
];

const NATURAL_RHYTHMS_KEYWORDS: &[&str] = &[
    "seasonal", "cycle", "cyclical", "periodic", "annual", "quarterly", "rhythm", "ebb and flow",
];

const COLOR_LIGHT_KEYWORDS: &[&str] = &[
    "bright", "dark", "shadow", "contrast", "color", "colour", "visible", "transparent", "opaque",
    "light", "glow",
];

const REPETITION_HABIT_KEYWORDS: &[&str] = &[
    "always", "every", "habit", "routine", "consistently", "regularly", "repeated", "again and again",
];

const SPATIAL_KEYWORDS: &[&str] = &[
    "nearby", "adjacent", "region", "territory", "same market", "overlapping market", "co-located",
    "next door", "local",
];

const TEMPORAL_KEYWORDS: &[&str] = &[
    "schedule", "scheduled", "timeline", "sequence", "weekly", "monthly", "interval", "on time",
    "like clockwork",
];

const DEVIATION_KEYWORDS: &[&str] = &[
    "unexpected", "sudden", "suddenly", "surprise", "surprising", "anomal", "unusual", "abrupt",
    "shock", "deviat", "out of character",
];

const CAUSE_EFFECT_KEYWORDS: &[&str] = &[
    "because", "led to", "resulted in", "caused", "causing", "therefore", "due to", "consequence",
    "triggered", "as a result",
];

/// Scans an entity pair's events for the nine cognition patterns
///
/// Pure function over its inputs: no I/O, no retained state beyond the
/// configuration.
pub struct PatternDetector {
    config: DetectorConfig,
}

impl PatternDetector {
    /// Create a detector with the given configuration
    pub fn new(config: DetectorConfig) -> Self {
        Self { config }
    }

    /// Create a detector with default configuration
    pub fn default_config() -> Self {
        Self::new(DetectorConfig::default())
    }

    /// Run all nine detectors over the pair's events
    ///
    /// Returns at most one match per code, in detector order. Events that
    /// mention neither entity are ignored unless no event carries entity
    /// associations at all, in which case every event is considered.
    pub fn detect(&self, source: &Entity, target: &Entity, events: &[Event]) -> Vec<PatternMatch> {
        let relevant: Vec<&Event> = {
            let associated: Vec<&Event> = events
                .iter()
                .filter(|e| e.mentions(source.id) || e.mentions(target.id))
                .collect();
            if associated.is_empty() {
                events.iter().collect()
            } else {
                associated
            }
        };

        let mut texts: Vec<String> = relevant.iter().map(|e| e.text.to_lowercase()).collect();
        texts.push(source.text.to_lowercase());
        texts.push(target.text.to_lowercase());

        let mut matches = Vec::new();

        if let Some(m) = self.detect_flow_motion(source, target, &texts) {
            matches.push(m);
        }
        if let Some(m) = self.keyword_match(PatternCode::NaturalRhythms, &texts, NATURAL_RHYTHMS_KEYWORDS) {
            matches.push(m);
        }
        if let Some(m) = self.keyword_match(PatternCode::ColorLight, &texts, COLOR_LIGHT_KEYWORDS) {
            matches.push(m);
        }
        if let Some(m) = self.keyword_match(PatternCode::RepetitionHabit, &texts, REPETITION_HABIT_KEYWORDS) {
            matches.push(m);
        }
        if let Some(m) = self.detect_spatial(source, target, &relevant, &texts) {
            matches.push(m);
        }
        if let Some(m) = self.detect_temporal(&relevant, &texts) {
            matches.push(m);
        }
        if let Some(m) = self.keyword_match(PatternCode::DeviationSurprise, &texts, DEVIATION_KEYWORDS) {
            matches.push(m);
        }
        if let Some(m) = self.keyword_match(PatternCode::CauseEffect, &texts, CAUSE_EFFECT_KEYWORDS) {
            matches.push(m);
        }
        if let Some(m) = self.detect_combination(&matches) {
            matches.push(m);
        }

        matches
    }

    /// Count keyword hits across the texts
    ///
    /// Returns the total hit count and the distinct keywords that matched.
    fn scan(&self, texts: &[String], keywords: &[&'static str]) -> (usize, Vec<&'static str>) {
        let mut hits = 0;
        let mut matched: Vec<&'static str> = Vec::new();

        for &keyword in keywords {
            let count: usize = texts.iter().map(|t| t.matches(keyword).count()).sum();
            if count > 0 {
                hits += count;
                matched.push(keyword);
            }
        }

        (hits, matched)
    }

    fn hit_confidence(&self, hits: usize) -> f64 {
        (hits as f64 * self.config.hit_increment).min(self.config.confidence_cap)
    }

    /// Generic keyword-density detector
    fn keyword_match(
        &self,
        code: PatternCode,
        texts: &[String],
        keywords: &[&'static str],
    ) -> Option<PatternMatch> {
        let (hits, matched) = self.scan(texts, keywords);
        if hits == 0 {
            return None;
        }
        Some(PatternMatch::new(
            code,
            self.hit_confidence(hits),
            format!("keywords: {}", matched.join(", ")),
        ))
    }

    /// Movement keywords plus a bonus for dynamic entity types
    fn detect_flow_motion(
        &self,
        source: &Entity,
        target: &Entity,
        texts: &[String],
    ) -> Option<PatternMatch> {
        let (hits, matched) = self.scan(texts, FLOW_MOTION_KEYWORDS);
        if hits == 0 {
            return None;
        }

        let dynamic = |ty: EntityType| matches!(ty, EntityType::Event | EntityType::Product);
        let mut confidence = self.hit_confidence(hits);
        if dynamic(source.entity_type) || dynamic(target.entity_type) {
            confidence = (confidence + self.config.entity_type_bonus).min(self.config.confidence_cap);
        }

        Some(PatternMatch::new(
            PatternCode::FlowMotion,
            confidence,
            format!("keywords: {}", matched.join(", ")),
        ))
    }

    /// Co-location keywords, location entity types, and pair co-mentions
    fn detect_spatial(
        &self,
        source: &Entity,
        target: &Entity,
        relevant: &[&Event],
        texts: &[String],
    ) -> Option<PatternMatch> {
        let (hits, matched) = self.scan(texts, SPATIAL_KEYWORDS);
        let mut matched_parts: Vec<String> = if matched.is_empty() {
            Vec::new()
        } else {
            vec![format!("keywords: {}", matched.join(", "))]
        };

        let mut confidence = if hits > 0 { self.hit_confidence(hits) } else { 0.0 };

        if source.entity_type == EntityType::Location && target.entity_type == EntityType::Location {
            confidence += self.config.location_pair_bonus;
            matched_parts.push("both entities are locations".to_string());
        }

        let co_mentions = relevant
            .iter()
            .filter(|e| e.mentions_pair(source.id, target.id))
            .count();
        if co_mentions >= 2 {
            confidence += self.config.co_mention_bonus;
            matched_parts.push(format!("{} shared events", co_mentions));
        }

        if confidence <= 0.0 {
            return None;
        }

        Some(PatternMatch::new(
            PatternCode::SpatialRelationships,
            confidence.min(self.config.confidence_cap),
            matched_parts.join("; "),
        ))
    }

    /// Timing keywords plus near-regular event spacing
    fn detect_temporal(&self, relevant: &[&Event], texts: &[String]) -> Option<PatternMatch> {
        let (hits, matched) = self.scan(texts, TEMPORAL_KEYWORDS);
        let mut confidence = if hits > 0 { self.hit_confidence(hits) } else { 0.0 };
        let mut parts: Vec<String> = if matched.is_empty() {
            Vec::new()
        } else {
            vec![format!("keywords: {}", matched.join(", "))]
        };

        if let Some(cv) = interval_variation(relevant) {
            if cv <= self.config.regular_interval_cv {
                confidence += self.config.regular_interval_bonus;
                parts.push(format!("regular event spacing (cv {:.2})", cv));
            }
        }

        if confidence <= 0.0 {
            return None;
        }

        Some(PatternMatch::new(
            PatternCode::TemporalPatterns,
            confidence.min(self.config.confidence_cap),
            parts.join("; "),
        ))
    }

    /// Fires when two or more other codes matched in the same window
    fn detect_combination(&self, others: &[PatternMatch]) -> Option<PatternMatch> {
        if others.len() < 2 {
            return None;
        }

        let mean: f64 =
            others.iter().map(|m| m.confidence).sum::<f64>() / others.len() as f64;
        let names: Vec<&str> = others.iter().map(|m| m.code.display_name()).collect();

        Some(PatternMatch::new(
            PatternCode::CombinationPatterns,
            mean.min(self.config.confidence_cap),
            format!("co-occurring: {}", names.join(", ")),
        ))
    }
}

/// Coefficient of variation of inter-event intervals
///
/// `None` when fewer than three events or when the events share a timestamp.
fn interval_variation(events: &[&Event]) -> Option<f64> {
    if events.len() < 3 {
        return None;
    }

    let mut timestamps: Vec<u64> = events.iter().map(|e| e.timestamp).collect();
    timestamps.sort_unstable();

    let intervals: Vec<f64> = timestamps
        .windows(2)
        .map(|pair| (pair[1] - pair[0]) as f64)
        .collect();

    let mean = intervals.iter().sum::<f64>() / intervals.len() as f64;
    if mean <= 0.0 {
        return None;
    }

    let variance = intervals.iter().map(|i| (i - mean).powi(2)).sum::<f64>() / intervals.len() as f64;
    Some(variance.sqrt() / mean)
}
