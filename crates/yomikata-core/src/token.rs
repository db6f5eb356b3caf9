//! Input tokens from the morphological analyzer and the annotated output.

use serde::{Deserialize, Serialize};

use crate::pos::PosClass;

/// Reading placeholder used by MeCab-style analyzers for unknown words.
pub const READING_PLACEHOLDER: &str = "*";

/// One morphological unit as produced by the external analyzer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MorphToken {
    pub surface: String,
    #[serde(default)]
    pub reading: Option<String>,
    #[serde(default)]
    pub base_form: Option<String>,
    /// Major part-of-speech tag as emitted by the analyzer.
    #[serde(default)]
    pub pos: String,
}

impl MorphToken {
    pub fn new(surface: &str, reading: &str, pos: &str) -> Self {
        Self {
            surface: surface.to_string(),
            reading: Some(reading.to_string()),
            base_form: None,
            pos: pos.to_string(),
        }
    }

    /// A token the analyzer could not assign a reading to.
    pub fn unread(surface: &str, pos: &str) -> Self {
        Self {
            surface: surface.to_string(),
            reading: None,
            base_form: None,
            pos: pos.to_string(),
        }
    }

    pub fn with_base_form(mut self, base_form: &str) -> Self {
        self.base_form = Some(base_form.to_string());
        self
    }

    /// The reading, unless it is missing, empty or equal to `placeholder`.
    pub fn reading_or_none(&self, placeholder: &str) -> Option<&str> {
        present(self.reading.as_deref(), placeholder)
    }

    /// The base form, unless it is missing, empty or equal to `placeholder`.
    pub fn base_form_or_none(&self, placeholder: &str) -> Option<&str> {
        present(self.base_form.as_deref(), placeholder)
    }

    pub fn pos_class(&self) -> PosClass {
        PosClass::from_tag(&self.pos)
    }
}

fn present<'a>(value: Option<&'a str>, placeholder: &str) -> Option<&'a str> {
    value.filter(|v| !v.is_empty() && *v != placeholder)
}

/// A token with its romaji, ruby markup and optional gloss.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatedToken {
    pub surface: String,
    pub romaji: String,
    pub furigana_html: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meaning: Option<String>,
}

/// Annotated tokens of one sentence, in text order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentenceResult {
    pub text: String,
    pub tokens: Vec<AnnotatedToken>,
}

/// Whole-text output of a transcription run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transcript {
    pub romaji: String,
    pub furigana_html: String,
    pub sentences: Vec<SentenceResult>,
}

impl Transcript {
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}
