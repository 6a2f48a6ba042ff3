// AuthorCheck API
// Request/response surface for presentation shells (CLI today). Owns input
// validation; the scoring core underneath never fails.

use crate::models::{AnalysisResult, Verdict};
use crate::services::config_store::DetectionConfig;
use crate::services::detection::{analyze_text, is_valid_sensitivity, DEFAULT_SENSITIVITY};
use crate::services::document_loader::{extract_document_text, DocumentError};
use crate::services::text_processor::{compute_text_stats, normalize_punctuation, TextStats};
use serde::{Deserialize, Serialize};
use std::time::Instant;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Error, Debug)]
pub enum DetectError {
    #[error("Text too short: need at least {min} characters, got {actual}")]
    TextTooShort { min: usize, actual: usize },
    #[error("Sensitivity {0} is outside [0.5, 1.0]")]
    InvalidSensitivity(f64),
    #[error(transparent)]
    Load(#[from] DocumentError),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectRequest {
    pub text: String,
    #[serde(default = "default_sensitivity")]
    pub sensitivity: f64,
    #[serde(default)]
    pub normalize: bool,
}

impl DetectRequest {
    pub fn new(text: impl Into<String>, sensitivity: f64) -> Self {
        Self {
            text: text.into(),
            sensitivity,
            normalize: false,
        }
    }
}

fn default_sensitivity() -> f64 {
    DEFAULT_SENSITIVITY
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectResponse {
    pub analysis: AnalysisResult,
    pub stats: TextStats,
    pub verdict: Verdict,
    /// AI probability as a percentage, one decimal.
    pub ai_percent: f64,
    pub human_percent: f64,
    pub sensitivity: f64,
}

fn percent(p: f64) -> f64 {
    (p * 1000.0).round() / 10.0
}

/// Validate a request and score it.
pub fn detect_text(request: &DetectRequest, config: &DetectionConfig) -> Result<DetectResponse, DetectError> {
    let t0 = Instant::now();

    let actual = request.text.trim().chars().count();
    if actual < config.min_chars {
        warn!(min = config.min_chars, actual, "detect.rejected_short_text");
        return Err(DetectError::TextTooShort {
            min: config.min_chars,
            actual,
        });
    }
    if !is_valid_sensitivity(request.sensitivity) {
        warn!(sensitivity = request.sensitivity, "detect.rejected_sensitivity");
        return Err(DetectError::InvalidSensitivity(request.sensitivity));
    }

    let normalized;
    let text = if request.normalize {
        normalized = normalize_punctuation(&request.text);
        normalized.as_str()
    } else {
        request.text.as_str()
    };

    let analysis = analyze_text(text, request.sensitivity);
    let scores = analysis.scores;
    let verdict = Verdict::from_ai_probability(scores.ai_probability);

    info!(
        chars = actual,
        ai = scores.ai_probability,
        verdict = ?verdict,
        elapsed_us = t0.elapsed().as_micros() as u64,
        "detect.completed"
    );

    Ok(DetectResponse {
        stats: compute_text_stats(&request.text),
        verdict,
        ai_percent: percent(scores.ai_probability),
        human_percent: percent(scores.human_probability),
        sensitivity: request.sensitivity,
        analysis,
    })
}

/// Extract text from an uploaded file.
pub fn preprocess_file(file_name: &str, bytes: &[u8]) -> Result<String, DetectError> {
    Ok(extract_document_text(file_name, bytes)?)
}
