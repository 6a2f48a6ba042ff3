// AuthorCheck Core Services

pub mod text_processor;
pub mod vocabulary;
pub mod config_store;
pub mod document_loader;
pub mod detection;

pub use text_processor::*;
pub use vocabulary::Vocabulary;
pub use config_store::*;
pub use document_loader::*;

// Re-export detection module functions
pub use detection::{
    aggregate_features,
    analyze_text,
    analyze_text_with_vocabulary,
    apply_sensitivity,
    combine_scores,
    extract_signals,
    is_valid_sensitivity,
    DetectionSensitivity,
    DEFAULT_SENSITIVITY,
};
