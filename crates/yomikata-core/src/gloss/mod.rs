//! Gloss (meaning) lookup for annotated tokens.
//!
//! The caller's vocabulary wins over the built-in fallback dictionary, and
//! the surface form wins over the base form.

use std::collections::{BTreeMap, HashMap};
use std::io;
use std::path::Path;
use std::sync::{Arc, OnceLock};

use serde::Deserialize;

use crate::token::MorphToken;

pub const DEFAULT_GLOSSES_TOML: &str = include_str!("default_glosses.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Caller-supplied word → meaning map for the current context.
pub type Vocabulary = HashMap<String, String>;

#[derive(Debug, thiserror::Error)]
pub enum GlossError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("empty key in [glosses]")]
    EmptyKey,
    #[error("gloss dictionary already initialized")]
    AlreadyInitialized,
}

#[derive(Deserialize)]
struct GlossConfig {
    glosses: BTreeMap<String, String>,
}

/// Read-only fallback dictionary, loaded once.
#[derive(Debug, Clone, Default)]
pub struct GlossDictionary {
    entries: HashMap<String, String>,
}

impl GlossDictionary {
    /// Set custom TOML before first `global()` call.
    pub fn init_custom(toml_content: String) -> Result<(), GlossError> {
        parse_glosses_toml(&toml_content)?;
        CUSTOM_TOML
            .set(toml_content)
            .map_err(|_| GlossError::AlreadyInitialized)
    }

    /// Get or initialize the shared dictionary.
    pub fn global() -> Arc<GlossDictionary> {
        static INSTANCE: OnceLock<Arc<GlossDictionary>> = OnceLock::new();
        let dict = INSTANCE.get_or_init(|| {
            let toml_str = CUSTOM_TOML
                .get()
                .map(|s| s.as_str())
                .unwrap_or(DEFAULT_GLOSSES_TOML);
            Arc::new(parse_glosses_toml(toml_str).expect("glosses TOML must be valid"))
        });
        Arc::clone(dict)
    }

    pub fn from_toml(toml_str: &str) -> Result<Self, GlossError> {
        parse_glosses_toml(toml_str)
    }

    pub fn open(path: &Path) -> Result<Self, GlossError> {
        let content = std::fs::read_to_string(path)?;
        parse_glosses_toml(&content)
    }

    pub fn get(&self, word: &str) -> Option<&str> {
        self.entries.get(word).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Use the entries as a caller vocabulary (same file format).
    pub fn into_vocabulary(self) -> Vocabulary {
        self.entries
    }
}

pub fn parse_glosses_toml(toml_str: &str) -> Result<GlossDictionary, GlossError> {
    let config: GlossConfig =
        toml::from_str(toml_str).map_err(|e| GlossError::Parse(e.to_string()))?;
    if config.glosses.keys().any(|k| k.is_empty()) {
        return Err(GlossError::EmptyKey);
    }
    Ok(GlossDictionary {
        entries: config.glosses.into_iter().collect(),
    })
}

/// Returns the embedded default glosses TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_GLOSSES_TOML
}

/// Meaning for `token`: vocabulary by surface, vocabulary by base form,
/// fallback by surface, fallback by base form.
pub fn enrich(
    token: &MorphToken,
    placeholder: &str,
    vocabulary: &Vocabulary,
    fallback: &GlossDictionary,
) -> Option<String> {
    let base_form = token.base_form_or_none(placeholder);
    let keys = || std::iter::once(token.surface.as_str()).chain(base_form);

    keys()
        .find_map(|k| vocabulary.get(k).map(String::as_str))
        .or_else(|| keys().find_map(|k| fallback.get(k)))
        .map(str::to_string)
}
