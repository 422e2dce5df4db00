//! History aggregation - trajectory, stance, and prior-conflict derivation

use crate::FeatureConfig;
use rapport_domain::{
    ConflictSeverity, InteractionOutcome, InteractionRecord, PriorConflict, RelationshipHistory,
    StanceChange, Trajectory,
};

const SECS_PER_DAY: u64 = 86_400;

// Severity buckets from conflict frequency and recency
const SEVERE_CONFLICT_RATIO: f64 = 0.5;
const MODERATE_CONFLICT_RATIO: f64 = 0.25;
const SEVERE_RECENT_DAYS: u64 = 7;
const MODERATE_RECENT_DAYS: u64 = 30;

/// Size of the "recent" window: the last 20% of interactions or the
/// configured minimum, whichever is larger, capped at the history length.
pub(crate) fn recent_window_len(total: usize, config: &FeatureConfig) -> usize {
    let fractional = (total as f64 * config.recent_window_fraction).ceil() as usize;
    fractional.max(config.recent_window_min).min(total)
}

fn cooperation_share(records: &[InteractionRecord]) -> f64 {
    if records.is_empty() {
        return 0.0;
    }
    let coop = records
        .iter()
        .filter(|r| r.outcome == InteractionOutcome::Cooperative)
        .count();
    coop as f64 / records.len() as f64
}

fn conflict_share(records: &[InteractionRecord]) -> f64 {
    if records.is_empty() {
        return 0.0;
    }
    let conflict = records
        .iter()
        .filter(|r| r.outcome == InteractionOutcome::Conflict)
        .count();
    conflict as f64 / records.len() as f64
}

/// Count net-sign flips across consecutive windows of the recent-window size
fn window_sign_flips(records: &[InteractionRecord], window: usize) -> usize {
    if window == 0 {
        return 0;
    }

    let signs: Vec<i8> = records
        .chunks(window)
        .filter_map(|chunk| {
            let coop = chunk
                .iter()
                .filter(|r| r.outcome == InteractionOutcome::Cooperative)
                .count() as i64;
            let conflict = chunk
                .iter()
                .filter(|r| r.outcome == InteractionOutcome::Conflict)
                .count() as i64;
            match (coop - conflict).signum() {
                0 => None,
                s => Some(s as i8),
            }
        })
        .collect();

    signs.windows(2).filter(|pair| pair[0] != pair[1]).count()
}

/// Aggregate the raw records into the history feature group
pub(crate) fn summarize(records: &[InteractionRecord], config: &FeatureConfig) -> RelationshipHistory {
    if records.is_empty() {
        return RelationshipHistory::default();
    }

    let cooperation_count = records
        .iter()
        .filter(|r| r.outcome == InteractionOutcome::Cooperative)
        .count();
    let conflict_count = records
        .iter()
        .filter(|r| r.outcome == InteractionOutcome::Conflict)
        .count();

    let oldest = records.iter().map(|r| r.timestamp).min().unwrap_or(0);
    let newest = records.iter().map(|r| r.timestamp).max().unwrap_or(0);

    RelationshipHistory {
        interaction_count: records.len(),
        cooperation_count,
        conflict_count,
        relationship_age_days: newest.saturating_sub(oldest) / SECS_PER_DAY,
        trajectory: trajectory(records, config),
    }
}

/// Compare the recent cooperation share against the full-history share
pub(crate) fn trajectory(records: &[InteractionRecord], config: &FeatureConfig) -> Trajectory {
    if records.is_empty() {
        return Trajectory::Stable;
    }

    let window = recent_window_len(records.len(), config);
    if window_sign_flips(records, window) >= config.volatile_flip_count {
        return Trajectory::Volatile;
    }

    let recent = &records[records.len() - window..];
    let recent_share = cooperation_share(recent) - conflict_share(recent);
    let overall_share = cooperation_share(records) - conflict_share(records);

    if recent_share > overall_share + config.trajectory_threshold {
        Trajectory::Improving
    } else if recent_share < overall_share - config.trajectory_threshold {
        Trajectory::Declining
    } else {
        Trajectory::Stable
    }
}

/// Derive the stance change from the recent window against its baseline
pub(crate) fn stance_change(records: &[InteractionRecord], config: &FeatureConfig) -> StanceChange {
    if records.is_empty() {
        return StanceChange::None;
    }

    let window = recent_window_len(records.len(), config);
    let split = records.len() - window;
    let (baseline, recent) = records.split_at(split);

    if baseline.is_empty() {
        // Nothing to compare against
        return StanceChange::None;
    }

    if conflict_share(recent) >= config.sudden_recent_conflict_ratio
        && conflict_share(baseline) <= config.sudden_baseline_conflict_ratio
    {
        return StanceChange::SuddenNegative;
    }

    if window_sign_flips(records, window) >= config.volatile_flip_count {
        return StanceChange::Volatile;
    }

    let delta = (cooperation_share(recent) - conflict_share(recent))
        - (cooperation_share(baseline) - conflict_share(baseline));
    if delta >= config.shift_threshold {
        StanceChange::PositiveShift
    } else if delta <= -config.shift_threshold {
        StanceChange::NegativeShift
    } else {
        StanceChange::None
    }
}

/// Aggregate past conflict: counts, recency, severity bucket, labels
///
/// Recency is measured against the newest record timestamp rather than the
/// wall clock, so identical inputs always produce identical output.
pub(crate) fn prior_conflict(records: &[InteractionRecord]) -> PriorConflict {
    let conflicts: Vec<&InteractionRecord> = records
        .iter()
        .filter(|r| r.outcome == InteractionOutcome::Conflict)
        .collect();

    if conflicts.is_empty() {
        return PriorConflict::default();
    }

    let newest = records.iter().map(|r| r.timestamp).max().unwrap_or(0);
    let last_conflict = conflicts.iter().map(|r| r.timestamp).max().unwrap_or(0);
    let last_conflict_days_ago = newest.saturating_sub(last_conflict) / SECS_PER_DAY;

    let ratio = conflicts.len() as f64 / records.len() as f64;
    let severity = if ratio >= SEVERE_CONFLICT_RATIO || last_conflict_days_ago <= SEVERE_RECENT_DAYS
    {
        ConflictSeverity::Severe
    } else if ratio >= MODERATE_CONFLICT_RATIO || last_conflict_days_ago <= MODERATE_RECENT_DAYS {
        ConflictSeverity::Moderate
    } else {
        ConflictSeverity::Minor
    };

    let mut conflict_types: Vec<String> = Vec::new();
    for conflict in &conflicts {
        if let Some(label) = &conflict.label {
            if !conflict_types.contains(label) {
                conflict_types.push(label.clone());
            }
        }
    }

    PriorConflict {
        has_conflict: true,
        conflict_count: conflicts.len(),
        last_conflict_days_ago: Some(last_conflict_days_ago),
        severity: Some(severity),
        conflict_types,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coop(ts: u64) -> InteractionRecord {
        InteractionRecord::new(ts, InteractionOutcome::Cooperative, 0.2)
    }

    fn conflict(ts: u64) -> InteractionRecord {
        InteractionRecord::new(ts, InteractionOutcome::Conflict, 0.8)
    }

    fn neutral(ts: u64) -> InteractionRecord {
        InteractionRecord::new(ts, InteractionOutcome::Neutral, 0.1)
    }

    #[test]
    fn test_recent_window_len() {
        let config = FeatureConfig::default();
        // minimum wins for short histories
        assert_eq!(recent_window_len(3, &config), 3);
        assert_eq!(recent_window_len(10, &config), 5);
        // 20% wins for long histories
        assert_eq!(recent_window_len(50, &config), 10);
    }

    #[test]
    fn test_trajectory_stable() {
        let config = FeatureConfig::default();
        let records: Vec<_> = (0..20).map(|i| coop(i * 100)).collect();
        assert_eq!(trajectory(&records, &config), Trajectory::Stable);
    }

    #[test]
    fn test_trajectory_declining() {
        let config = FeatureConfig::default();
        // 15 cooperative then 5 conflicts
        let mut records: Vec<_> = (0..15).map(|i| coop(i * 100)).collect();
        records.extend((15..20).map(|i| conflict(i * 100)));
        assert_eq!(trajectory(&records, &config), Trajectory::Declining);
    }

    #[test]
    fn test_trajectory_improving() {
        let config = FeatureConfig::default();
        let mut records: Vec<_> = (0..15).map(|i| conflict(i * 100)).collect();
        records.extend((15..20).map(|i| coop(i * 100)));
        assert_eq!(trajectory(&records, &config), Trajectory::Improving);
    }

    #[test]
    fn test_trajectory_volatile() {
        let config = FeatureConfig::default();
        // alternating five-record blocks: +, -, +, -
        let mut records = Vec::new();
        for block in 0..4 {
            for i in 0..5u64 {
                let ts = (block * 5 + i as usize) as u64 * 100;
                if block % 2 == 0 {
                    records.push(coop(ts));
                } else {
                    records.push(conflict(ts));
                }
            }
        }
        assert_eq!(trajectory(&records, &config), Trajectory::Volatile);
    }

    #[test]
    fn test_stance_sudden_negative() {
        let config = FeatureConfig::default();
        // calm baseline, then a fully conflicting recent window
        let mut records: Vec<_> = (0..10).map(|i| coop(i * 100)).collect();
        records.extend((10..15).map(|i| conflict(i * 100)));
        assert_eq!(stance_change(&records, &config), StanceChange::SuddenNegative);
    }

    #[test]
    fn test_stance_positive_shift() {
        let config = FeatureConfig::default();
        let mut records: Vec<_> = (0..10).map(|i| neutral(i * 100)).collect();
        records.extend((10..15).map(|i| coop(i * 100)));
        assert_eq!(stance_change(&records, &config), StanceChange::PositiveShift);
    }

    #[test]
    fn test_stance_none_for_empty_or_short_history() {
        let config = FeatureConfig::default();
        assert_eq!(stance_change(&[], &config), StanceChange::None);

        // whole history fits in the recent window: no baseline
        let records: Vec<_> = (0..4).map(|i| conflict(i * 100)).collect();
        assert_eq!(stance_change(&records, &config), StanceChange::None);
    }

    #[test]
    fn test_summarize_counts_and_age() {
        let config = FeatureConfig::default();
        let records = vec![
            coop(0),
            conflict(SECS_PER_DAY * 10),
            neutral(SECS_PER_DAY * 30),
        ];
        let history = summarize(&records, &config);

        assert_eq!(history.interaction_count, 3);
        assert_eq!(history.cooperation_count, 1);
        assert_eq!(history.conflict_count, 1);
        assert_eq!(history.relationship_age_days, 30);
    }

    #[test]
    fn test_prior_conflict_empty() {
        let pc = prior_conflict(&[coop(0), neutral(100)]);
        assert!(!pc.has_conflict);
        assert!(pc.severity.is_none());
    }

    #[test]
    fn test_prior_conflict_severe_by_ratio() {
        let records = vec![conflict(0), conflict(100), coop(SECS_PER_DAY * 60)];
        let pc = prior_conflict(&records);

        assert!(pc.has_conflict);
        assert_eq!(pc.conflict_count, 2);
        assert_eq!(pc.severity, Some(ConflictSeverity::Severe));
    }

    #[test]
    fn test_prior_conflict_moderate_by_recency() {
        // one conflict out of eight, but only 26 days before the newest record
        let mut records: Vec<_> = (0..7).map(|i| coop(i * SECS_PER_DAY)).collect();
        records.push(conflict(0));
        records.push(coop(26 * SECS_PER_DAY));
        let pc = prior_conflict(&records);

        // conflict at day 0, newest at day 26
        assert_eq!(pc.last_conflict_days_ago, Some(26));
        assert_eq!(pc.severity, Some(ConflictSeverity::Moderate));
    }

    #[test]
    fn test_prior_conflict_types_deduplicated() {
        let records = vec![
            conflict(0).with_label("pricing dispute"),
            conflict(100).with_label("pricing dispute"),
            conflict(200).with_label("late delivery"),
            coop(300),
        ];
        let pc = prior_conflict(&records);

        assert_eq!(pc.conflict_types, vec!["pricing dispute", "late delivery"]);
    }
}
