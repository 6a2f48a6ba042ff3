// Detection Module
// Heuristic AI/human scoring organized into specialized submodules:
// - extractors: ten independent text analyzers producing raw signals
// - feature_table: thresholds and weights turning signals into grouped flags
// - aggregation: combines group flags into a normalized score pair
// - sensitivity: sensitivity adjustment and the conclusion verdict
// - analyzer: the end-to-end pipeline

pub mod extractors;
pub mod feature_table;
pub mod aggregation;
pub mod sensitivity;
pub mod analyzer;

// Re-export commonly used functions
pub use extractors::{
    analyze_structure,
    check_formulaic_patterns,
    check_grammar_perfection,
    count_contractions,
    count_repeated_phrases,
    detect_casual_language,
    detect_emotional_language,
    detect_formal_language,
    detect_natural_errors,
    detect_personal_opinions,
    extract_signals,
};
pub use feature_table::{aggregate_features, FeatureRule, Threshold, FEATURE_RULES};
pub use aggregation::combine_scores;
pub use sensitivity::{apply_sensitivity, is_valid_sensitivity, DetectionSensitivity, DEFAULT_SENSITIVITY};
pub use analyzer::{analyze_text, analyze_text_with_vocabulary};
