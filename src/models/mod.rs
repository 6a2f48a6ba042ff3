// AuthorCheck Data Models

use serde::{Deserialize, Serialize};

// ============ Feature Groups & Kinds ============

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FeatureGroup {
    Ai,
    Human,
}

/// One of the ten text analyzers.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FeatureKind {
    RepeatedPhrases,
    FormalLanguage,
    GrammarPerfection,
    FormulaicPatterns,
    StructuralRegularity,
    Contractions,
    NaturalErrors,
    EmotionalLanguage,
    CasualLanguage,
    PersonalOpinions,
}

// ============ Signals ============

/// Raw output of a single extractor.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SignalValue {
    Count(usize),
    Score(f64),
    Flag(bool),
}

/// Every extractor's output for one text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct FeatureSignals {
    pub repeated_phrases: usize,
    pub formal_language: f64,
    pub grammar_perfection: f64,
    pub formulaic_patterns: bool,
    pub structural_regularity: f64,
    pub contractions: usize,
    pub natural_errors: f64,
    pub emotional_language: f64,
    pub casual_language: f64,
    pub personal_opinions: f64,
}

impl FeatureSignals {
    pub fn value(&self, kind: FeatureKind) -> SignalValue {
        match kind {
            FeatureKind::RepeatedPhrases => SignalValue::Count(self.repeated_phrases),
            FeatureKind::FormalLanguage => SignalValue::Score(self.formal_language),
            FeatureKind::GrammarPerfection => SignalValue::Score(self.grammar_perfection),
            FeatureKind::FormulaicPatterns => SignalValue::Flag(self.formulaic_patterns),
            FeatureKind::StructuralRegularity => SignalValue::Score(self.structural_regularity),
            FeatureKind::Contractions => SignalValue::Count(self.contractions),
            FeatureKind::NaturalErrors => SignalValue::Score(self.natural_errors),
            FeatureKind::EmotionalLanguage => SignalValue::Score(self.emotional_language),
            FeatureKind::CasualLanguage => SignalValue::Score(self.casual_language),
            FeatureKind::PersonalOpinions => SignalValue::Score(self.personal_opinions),
        }
    }
}

// ============ Flags & Scores ============

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureFlag {
    pub kind: FeatureKind,
    /// Bilingual display label, e.g. `使用縮寫/Contraction`.
    pub name: String,
    pub group: FeatureGroup,
    pub active: bool,
    /// Amount added to the group sum when `active`.
    pub weight: f64,
}

impl FeatureFlag {
    pub fn contribution(&self) -> f64 {
        if self.active {
            self.weight
        } else {
            0.0
        }
    }
}

/// (AI probability, Human probability), always summing to 1.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScorePair {
    pub ai_probability: f64,
    pub human_probability: f64,
}

impl ScorePair {
    /// Builds a pair from the AI side; the human side is its complement.
    pub fn from_ai(ai_probability: f64) -> Self {
        let ai = if ai_probability.is_finite() {
            ai_probability.clamp(0.0, 1.0)
        } else {
            0.5
        };
        Self {
            ai_probability: ai,
            human_probability: 1.0 - ai,
        }
    }

    pub fn neutral() -> Self {
        Self::from_ai(0.5)
    }
}

impl Default for ScorePair {
    fn default() -> Self {
        Self::neutral()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub scores: ScorePair,
    /// AI-indicative flags in display order.
    pub ai_features: Vec<FeatureFlag>,
    /// Human-indicative flags in display order.
    pub human_features: Vec<FeatureFlag>,
    pub signals: FeatureSignals,
}

impl AnalysisResult {
    pub fn flag(&self, kind: FeatureKind) -> Option<bool> {
        self.ai_features
            .iter()
            .chain(self.human_features.iter())
            .find(|f| f.kind == kind)
            .map(|f| f.active)
    }

    pub fn flag_by_name(&self, name: &str) -> Option<bool> {
        self.ai_features
            .iter()
            .chain(self.human_features.iter())
            .find(|f| f.name == name)
            .map(|f| f.active)
    }
}

// ============ Verdict ============

/// Conclusion banner selected from the final AI probability.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Verdict {
    LikelyAi,
    PossiblyAiAssisted,
    LikelyHuman,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_pair_complement() {
        let pair = ScorePair::from_ai(0.3);
        assert!((pair.ai_probability + pair.human_probability - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_score_pair_clamps_out_of_range() {
        assert_eq!(ScorePair::from_ai(1.7).ai_probability, 1.0);
        assert_eq!(ScorePair::from_ai(-0.2).human_probability, 1.0);
        assert_eq!(ScorePair::from_ai(f64::NAN), ScorePair::neutral());
    }

    #[test]
    fn test_score_pair_serialization() {
        let json = serde_json::to_string(&ScorePair::from_ai(0.25)).unwrap();
        assert_eq!(json, r#"{"aiProbability":0.25,"humanProbability":0.75}"#);
    }

    #[test]
    fn test_signal_value_untagged() {
        assert_eq!(serde_json::to_string(&SignalValue::Count(4)).unwrap(), "4");
        assert_eq!(serde_json::to_string(&SignalValue::Flag(true)).unwrap(), "true");
    }

    #[test]
    fn test_inactive_flag_contributes_nothing() {
        let flag = FeatureFlag {
            kind: FeatureKind::Contractions,
            name: "使用縮寫/Contraction".to_string(),
            group: FeatureGroup::Human,
            active: false,
            weight: 0.15,
        };
        assert_eq!(flag.contribution(), 0.0);
    }
}
