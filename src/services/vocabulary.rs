// Vocabulary Tables
// Fixed bilingual word lists (English + Traditional Chinese) read by the feature extractors.

/// Formal connectives typical of generated prose.
pub const FORMAL_TERMS: &[&str] = &[
    "furthermore",
    "moreover",
    "consequently",
    "therefore",
    "nevertheless",
    "however",
    "regarding",
    "facilitate",
    "implement",
    "subsequent",
    "adjacent",
    "因此",
    "然而",
    "儘管",
];

/// Stock phrases; two or more in one text trips the formulaic flag.
pub const FORMULAIC_PHRASES: &[&str] = &[
    "in today's world",
    "it is important to",
    "in conclusion",
    "furthermore",
    "在當今世界",
    "重要的是",
    "總之",
    "此外",
];

pub const CONTRACTIONS: &[&str] = &[
    "can't",
    "don't",
    "won't",
    "isn't",
    "hasn't",
    "haven't",
    "shouldn't",
    "couldn't",
    "wouldn't",
    "that's",
    "it's",
    "i'm",
    "you're",
    "i've",
];

/// Accidentally doubled words.
pub const DOUBLED_WORDS: &[&str] = &["the the", "and and", "a a", "的的", "和和"];

pub const EMOTIONAL_TERMS: &[&str] = &[
    "love",
    "hate",
    "beautiful",
    "terrible",
    "wonderful",
    "awful",
    "amazing",
    "fantastic",
    "horrible",
    "feel",
    "喜歡",
    "討厭",
    "美",
    "可怕",
    "棒",
    "糟糕",
    "感受",
];

pub const CASUAL_TERMS: &[&str] = &[
    "like",
    "you know",
    "basically",
    "literally",
    "actually",
    "honestly",
    "pretty",
    "kind of",
    "sort of",
    "gonna",
    "wanna",
    "就像",
    "你知道",
    "基本上",
];

pub const OPINION_PHRASES: &[&str] = &[
    "i think",
    "i believe",
    "my opinion",
    "i would say",
    "personally",
    "to me",
    "in my view",
    "我認為",
    "我相信",
    "我的看法",
    "個人來說",
];

/// The full set of word lists used by one analysis.
///
/// Extractors take a `&Vocabulary` so a caller can swap in extended or
/// retuned lists without touching extraction logic. All built-in entries
/// are lower-case because matching runs against lower-cased text.
#[derive(Debug, Clone, Copy)]
pub struct Vocabulary {
    pub formal: &'static [&'static str],
    pub formulaic: &'static [&'static str],
    pub contractions: &'static [&'static str],
    pub doubled_words: &'static [&'static str],
    pub emotional: &'static [&'static str],
    pub casual: &'static [&'static str],
    pub opinion: &'static [&'static str],
}

impl Vocabulary {
    pub const fn builtin() -> Self {
        Self {
            formal: FORMAL_TERMS,
            formulaic: FORMULAIC_PHRASES,
            contractions: CONTRACTIONS,
            doubled_words: DOUBLED_WORDS,
            emotional: EMOTIONAL_TERMS,
            casual: CASUAL_TERMS,
            opinion: OPINION_PHRASES,
        }
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::builtin()
    }
}
