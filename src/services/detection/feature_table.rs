// Feature Table
// Declarative aggregation policy: which extractor feeds which group, the
// threshold that turns its signal into a flag, and the flag's weight.

use crate::models::{FeatureFlag, FeatureGroup, FeatureKind, FeatureSignals, SignalValue};

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Threshold {
    /// Signal strictly greater than the bound.
    Above(f64),
    /// Boolean signal is true.
    IsTrue,
}

impl Threshold {
    pub fn passes(&self, value: SignalValue) -> bool {
        match (*self, value) {
            (Threshold::Above(bound), SignalValue::Count(n)) => n as f64 > bound,
            (Threshold::Above(bound), SignalValue::Score(x)) => x > bound,
            (Threshold::Above(_), SignalValue::Flag(b)) => b,
            (Threshold::IsTrue, SignalValue::Flag(b)) => b,
            (Threshold::IsTrue, SignalValue::Count(n)) => n > 0,
            (Threshold::IsTrue, SignalValue::Score(x)) => x > 0.0,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FeatureRule {
    pub kind: FeatureKind,
    pub group: FeatureGroup,
    pub label: &'static str,
    pub threshold: Threshold,
    pub weight: f64,
}

/// All rules in display order: AI group first, then human group.
pub static FEATURE_RULES: [FeatureRule; 10] = [
    FeatureRule {
        kind: FeatureKind::RepeatedPhrases,
        group: FeatureGroup::Ai,
        label: "重複短語多/Repetition",
        threshold: Threshold::Above(3.0),
        weight: 0.15,
    },
    FeatureRule {
        kind: FeatureKind::FormalLanguage,
        group: FeatureGroup::Ai,
        label: "過度正式/Formal",
        threshold: Threshold::Above(0.6),
        weight: 0.12,
    },
    FeatureRule {
        kind: FeatureKind::GrammarPerfection,
        group: FeatureGroup::Ai,
        label: "語法完美/Grammar",
        threshold: Threshold::Above(0.8),
        weight: 0.12,
    },
    FeatureRule {
        kind: FeatureKind::FormulaicPatterns,
        group: FeatureGroup::Ai,
        label: "模式化短語/Formulaic",
        threshold: Threshold::IsTrue,
        weight: 0.10,
    },
    FeatureRule {
        kind: FeatureKind::StructuralRegularity,
        group: FeatureGroup::Ai,
        label: "結構過規律/Structure",
        threshold: Threshold::Above(0.7),
        weight: 0.10,
    },
    FeatureRule {
        kind: FeatureKind::Contractions,
        group: FeatureGroup::Human,
        label: "使用縮寫/Contraction",
        threshold: Threshold::Above(1.0),
        weight: 0.15,
    },
    FeatureRule {
        kind: FeatureKind::NaturalErrors,
        group: FeatureGroup::Human,
        label: "自然錯誤/Typos",
        threshold: Threshold::Above(0.01),
        weight: 0.12,
    },
    FeatureRule {
        kind: FeatureKind::EmotionalLanguage,
        group: FeatureGroup::Human,
        label: "情感表現/Emotional",
        threshold: Threshold::Above(0.05),
        weight: 0.15,
    },
    FeatureRule {
        kind: FeatureKind::CasualLanguage,
        group: FeatureGroup::Human,
        label: "口語用詞/Casual",
        threshold: Threshold::Above(0.05),
        weight: 0.12,
    },
    FeatureRule {
        kind: FeatureKind::PersonalOpinions,
        group: FeatureGroup::Human,
        label: "個人觀點/Opinion",
        threshold: Threshold::Above(0.05),
        weight: 0.10,
    },
];

pub fn rule_for(kind: FeatureKind) -> Option<&'static FeatureRule> {
    FEATURE_RULES.iter().find(|r| r.kind == kind)
}

pub fn rules_in_group(group: FeatureGroup) -> impl Iterator<Item = &'static FeatureRule> {
    FEATURE_RULES.iter().filter(move |r| r.group == group)
}

fn flag_for(rule: &FeatureRule, signals: &FeatureSignals) -> FeatureFlag {
    FeatureFlag {
        kind: rule.kind,
        name: rule.label.to_string(),
        group: rule.group,
        active: rule.threshold.passes(signals.value(rule.kind)),
        weight: rule.weight,
    }
}

/// Threshold every signal into ordered (AI flags, human flags).
pub fn aggregate_features(signals: &FeatureSignals) -> (Vec<FeatureFlag>, Vec<FeatureFlag>) {
    let ai = rules_in_group(FeatureGroup::Ai)
        .map(|r| flag_for(r, signals))
        .collect();
    let human = rules_in_group(FeatureGroup::Human)
        .map(|r| flag_for(r, signals))
        .collect();
    (ai, human)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_covers_each_kind_once() {
        let kinds = [
            FeatureKind::RepeatedPhrases,
            FeatureKind::FormalLanguage,
            FeatureKind::GrammarPerfection,
            FeatureKind::FormulaicPatterns,
            FeatureKind::StructuralRegularity,
            FeatureKind::Contractions,
            FeatureKind::NaturalErrors,
            FeatureKind::EmotionalLanguage,
            FeatureKind::CasualLanguage,
            FeatureKind::PersonalOpinions,
        ];
        for kind in kinds {
            assert_eq!(FEATURE_RULES.iter().filter(|r| r.kind == kind).count(), 1);
        }
        assert_eq!(rules_in_group(FeatureGroup::Ai).count(), 5);
        assert_eq!(rules_in_group(FeatureGroup::Human).count(), 5);
    }

    #[test]
    fn test_display_order() {
        let signals = FeatureSignals::default();
        let (ai, human) = aggregate_features(&signals);
        let ai_names: Vec<&str> = ai.iter().map(|f| f.name.as_str()).collect();
        let human_names: Vec<&str> = human.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(
            ai_names,
            vec![
                "重複短語多/Repetition",
                "過度正式/Formal",
                "語法完美/Grammar",
                "模式化短語/Formulaic",
                "結構過規律/Structure",
            ]
        );
        assert_eq!(
            human_names,
            vec![
                "使用縮寫/Contraction",
                "自然錯誤/Typos",
                "情感表現/Emotional",
                "口語用詞/Casual",
                "個人觀點/Opinion",
            ]
        );
    }

    #[test]
    fn test_thresholds_are_strict() {
        let at_bound = FeatureSignals {
            repeated_phrases: 3,
            formal_language: 0.6,
            grammar_perfection: 0.8,
            formulaic_patterns: false,
            structural_regularity: 0.7,
            contractions: 1,
            natural_errors: 0.01,
            emotional_language: 0.05,
            casual_language: 0.05,
            personal_opinions: 0.05,
        };
        let (ai, human) = aggregate_features(&at_bound);
        assert!(ai.iter().chain(human.iter()).all(|f| !f.active));

        let above = FeatureSignals {
            repeated_phrases: 4,
            formal_language: 0.61,
            grammar_perfection: 0.81,
            formulaic_patterns: true,
            structural_regularity: 0.71,
            contractions: 2,
            natural_errors: 0.011,
            emotional_language: 0.051,
            casual_language: 0.051,
            personal_opinions: 0.051,
        };
        let (ai, human) = aggregate_features(&above);
        assert!(ai.iter().chain(human.iter()).all(|f| f.active));
    }

    #[test]
    fn test_weights() {
        assert_eq!(rule_for(FeatureKind::RepeatedPhrases).map(|r| r.weight), Some(0.15));
        assert_eq!(rule_for(FeatureKind::EmotionalLanguage).map(|r| r.weight), Some(0.15));
        assert_eq!(rule_for(FeatureKind::NaturalErrors).map(|r| r.weight), Some(0.12));
        assert_eq!(rule_for(FeatureKind::PersonalOpinions).map(|r| r.weight), Some(0.10));
        let ai_total: f64 = rules_in_group(FeatureGroup::Ai).map(|r| r.weight).sum();
        assert!((ai_total - 0.59).abs() < 1e-12);
    }

    #[test]
    fn test_threshold_passes() {
        assert!(Threshold::IsTrue.passes(SignalValue::Flag(true)));
        assert!(!Threshold::IsTrue.passes(SignalValue::Flag(false)));
        assert!(Threshold::Above(3.0).passes(SignalValue::Count(4)));
        assert!(!Threshold::Above(3.0).passes(SignalValue::Count(3)));
    }
}
