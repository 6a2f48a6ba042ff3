// Text Processing Service
// Naive tokenization, sentence splitting and optional punctuation normalization

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Sentence terminator used for sentence-level features.
pub const SENTENCE_TERMINATOR: char = '。';

fn extra_space_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[\u{3000}\u{00A0}]").expect("extra space regex"))
}

/// Normalize punctuation in text (Chinese/English)
///
/// Runs of spaces are left alone: the grammar feature counts double spaces.
pub fn normalize_punctuation(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let s = text
        .replace(['\u{201c}', '\u{201d}'], "\"")
        .replace(['\u{2018}', '\u{2019}'], "'")
        .replace('\u{2014}', "-");

    // Ideographic space and non-breaking space
    let s = extra_space_re().replace_all(&s, " ");

    s.replace("\r\n", "\n").replace('\r', "\n")
}

/// Whitespace-delimited tokens.
pub fn tokenize(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

pub fn token_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Raw pieces between sentence terminators, empty pieces included.
pub fn split_sentences(text: &str) -> Vec<&str> {
    text.split(SENTENCE_TERMINATOR).collect()
}

/// Sentences with at least one non-whitespace character, trimmed.
pub fn non_empty_sentences(text: &str) -> Vec<&str> {
    split_sentences(text)
        .into_iter()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TextStats {
    pub chars: usize,
    pub words: usize,
}

/// Character and word counts shown next to the input.
pub fn compute_text_stats(text: &str) -> TextStats {
    TextStats {
        chars: text.chars().count(),
        words: token_count(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_punctuation() {
        let input = "Hello\u{201c}World\u{201d} it\u{2019}s\u{3000}fine\r\n";
        let output = normalize_punctuation(input);
        assert_eq!(output, "Hello\"World\" it's fine\n");
    }

    #[test]
    fn test_normalize_keeps_double_spaces() {
        assert_eq!(normalize_punctuation("a  b"), "a  b");
    }

    #[test]
    fn test_tokenize_splits_on_any_whitespace() {
        assert_eq!(tokenize("  one\ttwo\nthree  "), vec!["one", "two", "three"]);
        assert_eq!(token_count(""), 0);
    }

    #[test]
    fn test_split_sentences() {
        let text = "这是第一句。这是第二句。";
        assert_eq!(split_sentences(text), vec!["这是第一句", "这是第二句", ""]);
        assert_eq!(non_empty_sentences(text).len(), 2);
    }

    #[test]
    fn test_english_text_is_one_sentence() {
        let text = "First sentence. Second sentence.";
        assert_eq!(non_empty_sentences(text).len(), 1);
    }

    #[test]
    fn test_text_stats_counts_chars_not_bytes() {
        let stats = compute_text_stats("你好 world");
        assert_eq!(stats.chars, 8);
        assert_eq!(stats.words, 2);
    }
}
