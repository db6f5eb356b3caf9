//! Global settings loaded from TOML, following the same OnceLock pattern as the
//! romaji table and the gloss dictionary.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`

use std::sync::OnceLock;

use serde::Deserialize;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Set custom TOML before first `settings()` call.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
pub fn settings() -> &'static Settings {
    static INSTANCE: OnceLock<Settings> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        parse_settings_toml(toml_str).expect("settings TOML must be valid")
    })
}

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub reading: ReadingSettings,
    pub furigana: FuriganaSettings,
    pub segment: SegmentSettings,
    pub romaji: RomajiSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReadingSettings {
    pub placeholder: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FuriganaSettings {
    pub blank: String,
    pub escape_html: bool,
    pub split_okurigana: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SegmentSettings {
    pub delimiter: char,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RomajiSettings {
    pub attach: Vec<char>,
    pub long_vowel_fallback: char,
}

impl Default for Settings {
    fn default() -> Self {
        settings().clone()
    }
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    macro_rules! check_non_empty {
        ($section:ident . $field:ident) => {
            if s.$section.$field.is_empty() {
                return Err(SettingsError::InvalidValue {
                    field: concat!(stringify!($section), ".", stringify!($field)).to_string(),
                    reason: "must not be empty".to_string(),
                });
            }
        };
    }

    check_non_empty!(reading.placeholder);
    check_non_empty!(furigana.blank);

    if s.segment.delimiter.is_whitespace() {
        return Err(SettingsError::InvalidValue {
            field: "segment.delimiter".to_string(),
            reason: "must not be whitespace".to_string(),
        });
    }

    if !matches!(s.romaji.long_vowel_fallback, 'a' | 'i' | 'u' | 'e' | 'o') {
        return Err(SettingsError::InvalidValue {
            field: "romaji.long_vowel_fallback".to_string(),
            reason: "must be one of a, i, u, e, o".to_string(),
        });
    }

    if let Some(c) = s.romaji.attach.iter().find(|c| c.is_whitespace()) {
        return Err(SettingsError::InvalidValue {
            field: "romaji.attach".to_string(),
            reason: format!("whitespace entry {c:?}"),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = r#"
[reading]
placeholder = "*"

[furigana]
blank = "&nbsp;"
escape_html = true
split_okurigana = true

[segment]
delimiter = "。"

[romaji]
attach = [".", ","]
long_vowel_fallback = "u"
"#;

    #[test]
    fn parse_default_toml() {
        let s = parse_settings_toml(DEFAULT_SETTINGS_TOML).unwrap();
        assert_eq!(s.reading.placeholder, "*");
        assert_eq!(s.furigana.blank, "&nbsp;");
        assert!(s.furigana.escape_html);
        assert!(!s.furigana.split_okurigana);
        assert_eq!(s.segment.delimiter, '。');
        assert_eq!(s.romaji.attach, vec!['.', ',', '?', '!', '-']);
        assert_eq!(s.romaji.long_vowel_fallback, 'u');
    }

    #[test]
    fn parse_valid_custom_toml() {
        let toml = VALID.replace("blank = \"&nbsp;\"", "blank = \"&#8203;\"");
        let s = parse_settings_toml(&toml).unwrap();
        assert_eq!(s.furigana.blank, "&#8203;");
        assert_eq!(s.romaji.attach, vec!['.', ',']);
    }

    #[test]
    fn error_empty_placeholder() {
        let toml = VALID.replace("placeholder = \"*\"", "placeholder = \"\"");
        let err = parse_settings_toml(&toml).unwrap_err();
        assert!(matches!(err, SettingsError::InvalidValue { .. }));
        assert!(err.to_string().contains("reading.placeholder"));
    }

    #[test]
    fn error_whitespace_delimiter() {
        let toml = VALID.replace("delimiter = \"。\"", "delimiter = \" \"");
        let err = parse_settings_toml(&toml).unwrap_err();
        assert!(err.to_string().contains("segment.delimiter"));
    }

    #[test]
    fn error_multi_char_delimiter() {
        let toml = VALID.replace("delimiter = \"。\"", "delimiter = \"。。\"");
        let err = parse_settings_toml(&toml).unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn error_consonant_fallback() {
        let toml = VALID.replace("long_vowel_fallback = \"u\"", "long_vowel_fallback = \"k\"");
        let err = parse_settings_toml(&toml).unwrap_err();
        assert!(err.to_string().contains("long_vowel_fallback"));
    }

    #[test]
    fn error_invalid_toml() {
        let err = parse_settings_toml("not valid toml {{{").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn error_missing_section() {
        let toml = r#"
[reading]
placeholder = "*"
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }
}
