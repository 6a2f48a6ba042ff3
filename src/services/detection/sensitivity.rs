// Sensitivity utilities
// Sensitivity rescales the AI probability; the human side is always re-derived as its complement.

use crate::models::{ScorePair, Verdict};

pub const LOW_BOUND: f64 = 0.75;
pub const HIGH_BOUND: f64 = 0.85;
pub const LOW_MULTIPLIER: f64 = 0.85;
pub const HIGH_MULTIPLIER: f64 = 1.15;
pub const HIGH_CAP: f64 = 0.99;

pub const MIN_SENSITIVITY: f64 = 0.5;
pub const MAX_SENSITIVITY: f64 = 1.0;
pub const DEFAULT_SENSITIVITY: f64 = 0.75;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum DetectionSensitivity {
    Low,
    Medium,
    High,
}

impl DetectionSensitivity {
    /// Both band edges belong to `Medium`.
    pub fn from_value(val: f64) -> Self {
        if val < LOW_BOUND {
            Self::Low
        } else if val > HIGH_BOUND {
            Self::High
        } else {
            Self::Medium
        }
    }
}

pub fn is_valid_sensitivity(val: f64) -> bool {
    val.is_finite() && (MIN_SENSITIVITY..=MAX_SENSITIVITY).contains(&val)
}

/// Rescale the AI probability for the given sensitivity, returning a new pair.
pub fn apply_sensitivity(scores: ScorePair, sensitivity: f64) -> ScorePair {
    let ai = scores.ai_probability;
    let adjusted = match DetectionSensitivity::from_value(sensitivity) {
        DetectionSensitivity::Low => ai * LOW_MULTIPLIER,
        DetectionSensitivity::High => (ai * HIGH_MULTIPLIER).min(HIGH_CAP),
        DetectionSensitivity::Medium => ai,
    };
    ScorePair::from_ai(adjusted)
}

const LIKELY_AI_MIN: f64 = 0.75;
const POSSIBLY_AI_MIN: f64 = 0.55;

impl Verdict {
    pub fn from_ai_probability(p: f64) -> Self {
        if p > LIKELY_AI_MIN {
            Self::LikelyAi
        } else if p > POSSIBLY_AI_MIN {
            Self::PossiblyAiAssisted
        } else {
            Self::LikelyHuman
        }
    }

    pub fn headline(&self) -> &'static str {
        match self {
            Self::LikelyAi => "高度可能是 AI 生成 / Likely AI-generated",
            Self::PossiblyAiAssisted => "可能包含 AI 成分 / Possibly AI-assisted",
            Self::LikelyHuman => "很可能是人類撰寫 / Likely human-written",
        }
    }

    pub fn explanation(&self) -> &'static str {
        match self {
            Self::LikelyAi => "特徵: 高度結構化、語法完美、缺乏個人風格 / Highly structured, flawless grammar, no personal voice",
            Self::PossiblyAiAssisted => "這篇文章可能由 AI 部分撰寫或大量編輯 / Parts may be AI-written or heavily AI-edited",
            Self::LikelyHuman => "特徵: 自然表達、個人風格、情感表現 / Natural phrasing, personal style, emotional expression",
        }
    }
}
