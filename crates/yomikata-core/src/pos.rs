//! Part-of-speech classes used by the romaji spacing rules.
//!
//! Analyzers disagree on tag spelling: IPADIC emits Japanese tags (名詞,
//! 助詞, ...) while wrappers often translate them to English names. Both are
//! accepted; anything unrecognized falls into `Other`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PosClass {
    Noun,
    Verb,
    Adjective,
    Adverb,
    Particle,
    Auxiliary,
    Symbol,
    Conjunction,
    Interjection,
    Other,
}

impl PosClass {
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim() {
            "名詞" | "代名詞" => PosClass::Noun,
            "動詞" => PosClass::Verb,
            "形容詞" | "形容動詞" | "形状詞" => PosClass::Adjective,
            "副詞" => PosClass::Adverb,
            "助詞" => PosClass::Particle,
            "助動詞" => PosClass::Auxiliary,
            "記号" | "補助記号" | "空白" => PosClass::Symbol,
            "接続詞" => PosClass::Conjunction,
            "感動詞" => PosClass::Interjection,
            other => Self::from_english(other),
        }
    }

    fn from_english(tag: &str) -> Self {
        match tag.to_ascii_lowercase().as_str() {
            "noun" | "pronoun" => PosClass::Noun,
            "verb" => PosClass::Verb,
            "adjective" | "adj" => PosClass::Adjective,
            "adverb" | "adv" => PosClass::Adverb,
            "particle" => PosClass::Particle,
            "auxiliary" | "aux" | "auxiliary_verb" => PosClass::Auxiliary,
            "symbol" | "punctuation" | "punct" => PosClass::Symbol,
            "conjunction" | "conj" => PosClass::Conjunction,
            "interjection" | "intj" => PosClass::Interjection,
            _ => PosClass::Other,
        }
    }

    /// Content words always start a new romaji word.
    pub fn is_content(self) -> bool {
        matches!(
            self,
            PosClass::Noun
                | PosClass::Verb
                | PosClass::Adjective
                | PosClass::Adverb
                | PosClass::Conjunction
                | PosClass::Interjection
        )
    }

    /// Particles and auxiliaries.
    pub fn is_function(self) -> bool {
        matches!(self, PosClass::Particle | PosClass::Auxiliary)
    }
}
