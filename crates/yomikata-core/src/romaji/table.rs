use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use super::config::{parse_romaji_toml, ParsedRomaji, RomajiConfigError};

pub(crate) const DEFAULT_TOML: &str = include_str!("default_romaji.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Immutable kana → romaji lookup tables.
///
/// Digraphs (two-character sequences such as きゃ or ふぁ) are kept apart
/// from single characters so callers can try the longer match first.
#[derive(Debug, Clone)]
pub struct RomajiTable {
    single: HashMap<char, String>,
    digraph: HashMap<[char; 2], String>,
}

impl RomajiTable {
    /// Set custom TOML before first `global()` call.
    pub fn init_custom(toml_content: String) -> Result<(), RomajiConfigError> {
        // Validate eagerly
        parse_romaji_toml(&toml_content)?;
        CUSTOM_TOML
            .set(toml_content)
            .map_err(|_| RomajiConfigError::AlreadyInitialized)
    }

    /// Get or initialize the shared table.
    pub fn global() -> Arc<RomajiTable> {
        static INSTANCE: OnceLock<Arc<RomajiTable>> = OnceLock::new();
        let table = INSTANCE.get_or_init(|| {
            let toml_str = CUSTOM_TOML
                .get()
                .map(|s| s.as_str())
                .unwrap_or(DEFAULT_TOML);
            // Both candidates were validated: the default by build.rs, the
            // custom one by init_custom.
            let parsed = parse_romaji_toml(toml_str).expect("romaji TOML must be valid");
            Arc::new(RomajiTable::from_parsed(parsed))
        });
        Arc::clone(table)
    }

    /// Build a standalone table from TOML text, bypassing the global.
    pub fn from_toml(toml_str: &str) -> Result<Self, RomajiConfigError> {
        parse_romaji_toml(toml_str).map(Self::from_parsed)
    }

    fn from_parsed(parsed: ParsedRomaji) -> Self {
        Self {
            single: parsed.single.into_iter().collect(),
            digraph: parsed.digraph.into_iter().collect(),
        }
    }

    pub fn single(&self, c: char) -> Option<&str> {
        self.single.get(&c).map(String::as_str)
    }

    pub fn digraph(&self, first: char, second: char) -> Option<&str> {
        self.digraph.get(&[first, second]).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.single.len() + self.digraph.len()
    }

    pub fn is_empty(&self) -> bool {
        self.single.is_empty() && self.digraph.is_empty()
    }
}

impl Default for RomajiTable {
    fn default() -> Self {
        Self::global().as_ref().clone()
    }
}

/// Returns the embedded default romaji TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_TOML
}
