// Score Combination
// Folds group flags into two capped bases and normalizes them into a score pair

use crate::models::{FeatureFlag, ScorePair};

pub const AI_BASELINE: f64 = 0.15;
pub const HUMAN_BASELINE: f64 = 0.10;
pub const BASE_CAP: f64 = 0.95;

/// Sum of weights of the active flags.
pub fn group_sum(flags: &[FeatureFlag]) -> f64 {
    flags.iter().map(FeatureFlag::contribution).sum()
}

/// Group sum plus baseline, capped.
pub fn group_base(flags: &[FeatureFlag], baseline: f64) -> f64 {
    (group_sum(flags) + baseline).min(BASE_CAP)
}

/// Normalize the AI and human bases into a probability pair.
pub fn combine_scores(ai_flags: &[FeatureFlag], human_flags: &[FeatureFlag]) -> ScorePair {
    let ai_base = group_base(ai_flags, AI_BASELINE);
    let human_base = group_base(human_flags, HUMAN_BASELINE);

    let total = ai_base + human_base;
    let ai_score = if total > 0.0 { ai_base / total } else { 0.5 };
    ScorePair::from_ai(ai_score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FeatureGroup, FeatureKind};

    fn flag(group: FeatureGroup, active: bool, weight: f64) -> FeatureFlag {
        FeatureFlag {
            kind: FeatureKind::FormalLanguage,
            name: "test".to_string(),
            group,
            active,
            weight,
        }
    }

    #[test]
    fn test_no_flags_uses_baselines() {
        let pair = combine_scores(&[], &[]);
        assert!((pair.ai_probability - 0.15 / 0.25).abs() < 1e-12);
        assert!((pair.human_probability - 0.10 / 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_inactive_flags_ignored() {
        let ai = vec![flag(FeatureGroup::Ai, false, 0.15)];
        assert_eq!(group_sum(&ai), 0.0);
        assert_eq!(combine_scores(&ai, &[]), combine_scores(&[], &[]));
    }

    #[test]
    fn test_base_capped() {
        let ai: Vec<FeatureFlag> = (0..10).map(|_| flag(FeatureGroup::Ai, true, 0.15)).collect();
        assert_eq!(group_base(&ai, AI_BASELINE), BASE_CAP);
        let pair = combine_scores(&ai, &[]);
        assert!((pair.ai_probability - 0.95 / 1.05).abs() < 1e-12);
    }

    #[test]
    fn test_pair_sums_to_one() {
        let ai = vec![flag(FeatureGroup::Ai, true, 0.12), flag(FeatureGroup::Ai, true, 0.10)];
        let human = vec![flag(FeatureGroup::Human, true, 0.15)];
        let pair = combine_scores(&ai, &human);
        assert!((pair.ai_probability + pair.human_probability - 1.0).abs() < 1e-12);
        assert!((pair.ai_probability - 0.37 / 0.62).abs() < 1e-12);
    }

    #[test]
    fn test_zero_total_is_neutral() {
        let ai = vec![flag(FeatureGroup::Ai, true, -0.15)];
        let human = vec![flag(FeatureGroup::Human, true, -0.10)];
        assert_eq!(combine_scores(&ai, &human), ScorePair::neutral());
    }
}
