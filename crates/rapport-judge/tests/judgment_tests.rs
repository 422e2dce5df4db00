//! End-to-end judgment scenarios through the full pipeline

use proptest::prelude::*;
use rapport_domain::{
    Entity, EntityId, EntityRelationship, EntityType, Event, HistoryProvider, InteractionHistory,
    InteractionOutcome, InteractionRecord, PolarityLabel,
};
use rapport_judge::{Judge, JudgeConfig, JudgmentRequest};

const DAY: u64 = 86_400;

struct FixedHistory(InteractionHistory);

impl HistoryProvider for FixedHistory {
    type Error = String;

    fn interaction_history(
        &self,
        _source: EntityId,
        _target: EntityId,
    ) -> Result<InteractionHistory, Self::Error> {
        Ok(self.0.clone())
    }
}

fn records(outcomes: &[InteractionOutcome]) -> InteractionHistory {
    let records = outcomes
        .iter()
        .enumerate()
        .map(|(i, outcome)| {
            let severity = match outcome {
                InteractionOutcome::Conflict => 0.7,
                _ => 0.1,
            };
            InteractionRecord::new(1_000_000 + i as u64 * DAY, *outcome, severity)
        })
        .collect();
    InteractionHistory { records }
}

fn pair(
    source_type: EntityType,
    source_name: &str,
    target_type: EntityType,
    target_name: &str,
) -> (Entity, Entity, EntityRelationship) {
    let source = Entity::new(EntityId::from_value(1), source_type, source_name);
    let target = Entity::new(EntityId::from_value(2), target_type, target_name);
    let relationship = EntityRelationship::new(source.id, target.id, "partner", 500_000);
    (source, target, relationship)
}

fn judge() -> Judge {
    Judge::new(JudgeConfig::default()).unwrap()
}

#[test]
fn long_cooperative_history_with_stable_patterns_is_supportive() {
    let (source, target, relationship) = pair(
        EntityType::Organization,
        "Acme Logistics",
        EntityType::Organization,
        "Globex Retail",
    );
    let history = records(&[InteractionOutcome::Cooperative; 50]);

    let events = vec![
        Event::new(
            vec![source.id, target.id],
            "Acme Logistics always ships to Globex Retail every Monday, consistently on schedule",
            1_000,
        ),
        Event::new(
            vec![source.id],
            "Deliveries follow a weekly schedule, arriving like clockwork",
            2_000,
        ),
        Event::new(
            vec![target.id],
            "Globex Retail signed a renewed supply agreement",
            3_000,
        ),
    ];

    let request = JudgmentRequest {
        relationship,
        entities: vec![source, target],
        events,
    };
    let judgment = judge().judge(&request, &FixedHistory(history)).unwrap();

    assert_eq!(judgment.polarity_label, PolarityLabel::Supportive);
    assert!(judgment.polarity_score >= 0.7, "got {}", judgment.polarity_score);
    assert!((judgment.confidence - 1.0).abs() < 1e-9, "got {}", judgment.confidence);
    assert!(judgment.evidence_is_well_formed());
    assert!(judgment.explanation.contains("supportive"));
}

#[test]
fn conflict_escalation_with_hostile_tone_is_adversarial() {
    let (source, target, relationship) = pair(
        EntityType::Organization,
        "Acme Logistics",
        EntityType::Organization,
        "Vertex Holdings",
    );

    // calm baseline, then five straight conflicts
    let mut outcomes = vec![
        InteractionOutcome::Cooperative,
        InteractionOutcome::Cooperative,
        InteractionOutcome::Neutral,
        InteractionOutcome::Neutral,
        InteractionOutcome::Conflict,
    ];
    outcomes.extend([InteractionOutcome::Conflict; 5]);
    let history = records(&outcomes);

    let events = vec![
        Event::new(
            vec![source.id, target.id],
            "The partnership suddenly collapsed after an unexpected pricing dispute",
            1_000,
        ),
        Event::new(
            vec![target.id],
            "Executives at Vertex were furious and filed a lawsuit",
            2_000,
        ),
    ];

    let request = JudgmentRequest {
        relationship,
        entities: vec![source, target],
        events,
    };
    let judgment = judge().judge(&request, &FixedHistory(history)).unwrap();

    assert_eq!(judgment.polarity_label, PolarityLabel::Adversarial);
    assert!(
        (-0.8..=-0.5).contains(&judgment.polarity_score),
        "got {}",
        judgment.polarity_score
    );
    assert!((judgment.confidence - 0.85).abs() < 1e-9, "got {}", judgment.confidence);
    assert!(judgment.explanation.contains("adversarial"));
    assert!(judgment.explanation.contains("conflict"));
}

#[test]
fn one_sided_conflict_under_extreme_asymmetry_is_manipulative() {
    let (source, target, relationship) = pair(
        EntityType::Organization,
        "MegaCorp Industries",
        EntityType::Person,
        "Dana Reyes",
    );
    let history = records(&[InteractionOutcome::Conflict; 12]);

    let events = vec![Event::new(
        vec![source.id],
        "MegaCorp Industries controls a 30 billion dollar budget and dictated revised contract terms",
        1_000,
    )];

    let request = JudgmentRequest {
        relationship,
        entities: vec![source, target],
        events,
    };
    let judgment = judge().judge(&request, &FixedHistory(history)).unwrap();

    assert_eq!(judgment.polarity_label, PolarityLabel::Manipulative);
    assert!(judgment.polarity_score < -0.8, "got {}", judgment.polarity_score);
    // rich history keeps confidence above the ambiguity floor
    assert!((judgment.confidence - 0.7).abs() < 1e-9, "got {}", judgment.confidence);
}

#[test]
fn contradictory_strong_patterns_over_thin_history_are_ambiguous() {
    let (source, target, relationship) = pair(
        EntityType::Organization,
        "Acme Logistics",
        EntityType::Organization,
        "Globex Retail",
    );
    let history = records(&[
        InteractionOutcome::Cooperative,
        InteractionOutcome::Neutral,
        InteractionOutcome::Conflict,
    ]);

    let events = vec![
        Event::new(
            vec![source.id, target.id],
            "They always cooperate, consistently and routinely working together",
            1_000,
        ),
        Event::new(
            vec![source.id],
            "an unexpected and sudden reversal shocked observers",
            2_000,
        ),
    ];

    let request = JudgmentRequest {
        relationship,
        entities: vec![source, target],
        events,
    };
    let judgment = judge().judge(&request, &FixedHistory(history)).unwrap();

    assert_eq!(judgment.polarity_label, PolarityLabel::Ambiguous);
    assert!((judgment.confidence - 0.3).abs() < 1e-9, "got {}", judgment.confidence);
    assert!(judgment.polarity_score.abs() < 0.6);
}

#[test]
fn no_history_and_no_events_is_ambiguous_with_low_confidence() {
    let (source, target, relationship) = pair(
        EntityType::Organization,
        "Acme Logistics",
        EntityType::Organization,
        "Globex Retail",
    );

    let request = JudgmentRequest {
        relationship,
        entities: vec![source, target],
        events: vec![],
    };
    let judgment = judge()
        .judge(&request, &FixedHistory(InteractionHistory::empty()))
        .unwrap();

    assert_eq!(judgment.polarity_label, PolarityLabel::Ambiguous);
    assert_eq!(judgment.polarity_score, 0.0);
    assert!((judgment.confidence - 0.2).abs() < 1e-9, "got {}", judgment.confidence);
    assert!(judgment.top_evidence.is_empty());
    assert!(judgment.explanation.contains("no meaningful signals"));
}

#[test]
fn judgments_are_deterministic_for_identical_input() {
    let (source, target, relationship) = pair(
        EntityType::Organization,
        "Acme Logistics",
        EntityType::Organization,
        "Globex Retail",
    );
    let history = records(&[InteractionOutcome::Cooperative; 20]);

    let events = vec![Event::new(
        vec![source.id, target.id],
        "Acme always ships on a weekly schedule",
        1_000,
    )];

    let request = JudgmentRequest {
        relationship,
        entities: vec![source, target],
        events,
    };
    let judge = judge();
    let provider = FixedHistory(history);

    let first = judge.judge(&request, &provider).unwrap();
    let second = judge.judge(&request, &provider).unwrap();

    assert_eq!(first.polarity_score, second.polarity_score);
    assert_eq!(first.polarity_label, second.polarity_label);
    assert_eq!(first.confidence, second.confidence);
    assert_eq!(first.explanation, second.explanation);
    assert_eq!(first.top_evidence, second.top_evidence);
}

#[test]
fn growing_conflict_share_never_raises_the_score() {
    let (source, target, relationship) = pair(
        EntityType::Organization,
        "Acme Logistics",
        EntityType::Organization,
        "Globex Retail",
    );
    let judge = judge();

    let mut previous = f64::INFINITY;
    for conflicts in 0..=10usize {
        let mut outcomes = vec![InteractionOutcome::Cooperative; 10 - conflicts];
        outcomes.extend(vec![InteractionOutcome::Conflict; conflicts]);

        let request = JudgmentRequest {
            relationship: relationship.clone(),
            entities: vec![source.clone(), target.clone()],
            events: vec![],
        };
        let judgment = judge
            .judge(&request, &FixedHistory(records(&outcomes)))
            .unwrap();

        assert!(
            judgment.polarity_score <= previous + 1e-9,
            "score rose from {} to {} at {} conflicts",
            previous,
            judgment.polarity_score,
            conflicts
        );
        previous = judgment.polarity_score;
    }
}

const EVENT_TEXTS: &[&str] = &[
    "Acme always ships every Monday, consistently on schedule",
    "an unexpected and sudden reversal shocked observers",
    "Executives were furious and filed a lawsuit",
    "the companies signed a partnership agreement",
    "a 40 million dollar payment changed hands",
    "the seasonal cycle repeated as every year",
    "nothing of note happened this week",
];

fn outcome_strategy() -> impl Strategy<Value = InteractionOutcome> {
    prop_oneof![
        Just(InteractionOutcome::Cooperative),
        Just(InteractionOutcome::Neutral),
        Just(InteractionOutcome::Conflict),
    ]
}

proptest! {
    #[test]
    fn judgment_outputs_stay_bounded(
        outcomes in prop::collection::vec(outcome_strategy(), 0..40),
        texts in prop::collection::vec(prop::sample::select(EVENT_TEXTS), 0..4),
    ) {
        let (source, target, relationship) = pair(
            EntityType::Organization,
            "Acme Logistics",
            EntityType::Organization,
            "Globex Retail",
        );

        let events: Vec<Event> = texts
            .iter()
            .enumerate()
            .map(|(i, text)| Event::new(vec![source.id, target.id], *text, 1_000 + i as u64 * 500))
            .collect();

        let request = JudgmentRequest {
            relationship,
            entities: vec![source, target],
            events,
        };
        let judgment = judge()
            .judge(&request, &FixedHistory(records(&outcomes)))
            .unwrap();

        prop_assert!((-1.0..=1.0).contains(&judgment.polarity_score));
        prop_assert!((0.0..=1.0).contains(&judgment.confidence));
        prop_assert!(judgment.evidence_is_well_formed());
        prop_assert!(!judgment.explanation.is_empty());
    }
}
