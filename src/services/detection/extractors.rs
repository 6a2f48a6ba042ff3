// Feature Extractors
// Ten independent text analyzers. Each is pure and returns a neutral value
// (usually 0) for empty or degenerate input instead of failing.

use crate::models::FeatureSignals;
use crate::services::text_processor::{non_empty_sentences, split_sentences, token_count, tokenize};
use crate::services::vocabulary::Vocabulary;
use std::collections::HashMap;

const PHRASE_LEN: usize = 3;
const PHRASE_REPEAT_MIN: usize = 3;

/// Number of vocabulary terms that appear at least once.
fn count_present(text_lower: &str, terms: &[&str]) -> usize {
    terms.iter().filter(|t| text_lower.contains(**t)).count()
}

/// Total non-overlapping occurrences across all terms.
fn count_occurrences(text_lower: &str, terms: &[&str]) -> usize {
    terms.iter().map(|t| text_lower.matches(*t).count()).sum()
}

/// Divides by one token-block, floored at 1 so short texts never divide by zero.
fn per_tokens(count: usize, tokens: usize, block: f64) -> f64 {
    count as f64 / (tokens as f64 / block).max(1.0)
}

/// Distinct 3-token windows occurring more than twice.
pub fn count_repeated_phrases(text: &str) -> usize {
    let lower = text.to_lowercase();
    let words = tokenize(&lower);
    if words.len() < PHRASE_LEN {
        return 0;
    }

    let mut phrases: HashMap<&[&str], usize> = HashMap::new();
    for window in words.windows(PHRASE_LEN) {
        *phrases.entry(window).or_insert(0) += 1;
    }

    phrases.values().filter(|&&c| c >= PHRASE_REPEAT_MIN).count()
}

/// Share of formal connectives present, saturating at three terms. Range [0, 1].
pub fn detect_formal_language(text: &str, vocab: &Vocabulary) -> f64 {
    let count = count_present(&text.to_lowercase(), vocab.formal);
    (count as f64 / 3.0).min(1.0)
}

/// 1.0 for text with no double spaces and capitalized sentences. Range [0, 1].
pub fn check_grammar_perfection(text: &str) -> f64 {
    let double_spaces = text.matches("  ").count();

    let cap_errors = split_sentences(text)
        .into_iter()
        .filter_map(|s| s.trim().chars().next())
        .filter(|c| !c.is_uppercase())
        .count();

    let errors = (double_spaces + cap_errors) as f64;
    let allowance = (token_count(text) as f64 / 10.0).max(1.0);
    (1.0 - errors / allowance).max(0.0)
}

pub fn check_formulaic_patterns(text: &str, vocab: &Vocabulary) -> bool {
    count_present(&text.to_lowercase(), vocab.formulaic) >= 2
}

/// How uniform sentence lengths are; 1.0 means identical lengths. Range [0, 1].
pub fn analyze_structure(text: &str) -> f64 {
    let lengths: Vec<f64> = non_empty_sentences(text)
        .into_iter()
        .map(|s| token_count(s) as f64)
        .collect();
    if lengths.len() < 2 {
        return 0.0;
    }

    let n = lengths.len() as f64;
    let mean = lengths.iter().sum::<f64>() / n;
    let variance = lengths.iter().map(|l| (l - mean).powi(2)).sum::<f64>() / n;

    let cv = variance / (mean + 1.0);
    1.0 - (cv / 3.0).min(1.0)
}

pub fn count_contractions(text: &str, vocab: &Vocabulary) -> usize {
    count_occurrences(&text.to_lowercase(), vocab.contractions)
}

/// Doubled-word typos per ten tokens.
pub fn detect_natural_errors(text: &str, vocab: &Vocabulary) -> f64 {
    let errors = count_occurrences(&text.to_lowercase(), vocab.doubled_words);
    per_tokens(errors, token_count(text), 10.0)
}

pub fn detect_emotional_language(text: &str, vocab: &Vocabulary) -> f64 {
    let count = count_present(&text.to_lowercase(), vocab.emotional);
    per_tokens(count, token_count(text), 5.0)
}

pub fn detect_casual_language(text: &str, vocab: &Vocabulary) -> f64 {
    let count = count_present(&text.to_lowercase(), vocab.casual);
    per_tokens(count, token_count(text), 5.0)
}

pub fn detect_personal_opinions(text: &str, vocab: &Vocabulary) -> f64 {
    let count = count_present(&text.to_lowercase(), vocab.opinion);
    per_tokens(count, token_count(text), 5.0)
}

/// Run every extractor over `text`.
pub fn extract_signals(text: &str, vocab: &Vocabulary) -> FeatureSignals {
    FeatureSignals {
        repeated_phrases: count_repeated_phrases(text),
        formal_language: detect_formal_language(text, vocab),
        grammar_perfection: check_grammar_perfection(text),
        formulaic_patterns: check_formulaic_patterns(text, vocab),
        structural_regularity: analyze_structure(text),
        contractions: count_contractions(text, vocab),
        natural_errors: detect_natural_errors(text, vocab),
        emotional_language: detect_emotional_language(text, vocab),
        casual_language: detect_casual_language(text, vocab),
        personal_opinions: detect_personal_opinions(text, vocab),
    }
}
