// Text Analyzer
// Single-pass pipeline: extract -> threshold -> combine -> sensitivity

use crate::models::{AnalysisResult, FeatureFlag};
use crate::services::vocabulary::Vocabulary;
use super::aggregation::combine_scores;
use super::extractors::extract_signals;
use super::feature_table::aggregate_features;
use super::sensitivity::apply_sensitivity;
use tracing::debug;

/// Analyze `text` with the built-in vocabulary.
pub fn analyze_text(text: &str, sensitivity: f64) -> AnalysisResult {
    analyze_text_with_vocabulary(text, sensitivity, &Vocabulary::builtin())
}

pub fn analyze_text_with_vocabulary(
    text: &str,
    sensitivity: f64,
    vocab: &Vocabulary,
) -> AnalysisResult {
    let signals = extract_signals(text, vocab);
    let (ai_features, human_features) = aggregate_features(&signals);

    let base = combine_scores(&ai_features, &human_features);
    let scores = apply_sensitivity(base, sensitivity);

    debug!(
        ai_active = %active_names(&ai_features),
        human_active = %active_names(&human_features),
        base_ai = base.ai_probability,
        ai = scores.ai_probability,
        sensitivity,
        "analysis.scored"
    );

    AnalysisResult {
        scores,
        ai_features,
        human_features,
        signals,
    }
}

fn active_names(flags: &[FeatureFlag]) -> String {
    flags
        .iter()
        .filter(|f| f.active)
        .map(|f| f.name.as_str())
        .collect::<Vec<_>>()
        .join(",")
}
