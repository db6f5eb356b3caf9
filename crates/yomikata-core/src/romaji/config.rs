use std::collections::BTreeMap;

use serde::Deserialize;

#[derive(Deserialize)]
struct RomajiConfig {
    single: BTreeMap<String, String>,
    #[serde(default)]
    digraph: BTreeMap<String, String>,
}

#[derive(Debug, thiserror::Error)]
pub enum RomajiConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[single] table is empty")]
    EmptySingle,
    #[error("[{table}] key must be {expected} character(s): {key}")]
    InvalidKey {
        table: &'static str,
        expected: usize,
        key: String,
    },
    #[error("empty value for key: {0}")]
    EmptyValue(String),
    #[error("romaji table already initialized")]
    AlreadyInitialized,
}

/// Validated contents of a romaji TOML file.
#[derive(Debug)]
pub struct ParsedRomaji {
    pub single: Vec<(char, String)>,
    pub digraph: Vec<([char; 2], String)>,
}

impl ParsedRomaji {
    pub fn len(&self) -> usize {
        self.single.len() + self.digraph.len()
    }

    pub fn is_empty(&self) -> bool {
        self.single.is_empty() && self.digraph.is_empty()
    }
}

/// Parse and validate romaji TOML text.
///
/// `[single]` keys must be exactly one character and `[digraph]` keys exactly
/// two; every value must be non-empty.
pub fn parse_romaji_toml(toml_str: &str) -> Result<ParsedRomaji, RomajiConfigError> {
    let config: RomajiConfig =
        toml::from_str(toml_str).map_err(|e| RomajiConfigError::Parse(e.to_string()))?;

    if config.single.is_empty() {
        return Err(RomajiConfigError::EmptySingle);
    }

    let mut single = Vec::with_capacity(config.single.len());
    for (key, value) in config.single {
        let mut chars = key.chars();
        let (Some(c), None) = (chars.next(), chars.next()) else {
            return Err(RomajiConfigError::InvalidKey {
                table: "single",
                expected: 1,
                key,
            });
        };
        if value.is_empty() {
            return Err(RomajiConfigError::EmptyValue(key));
        }
        single.push((c, value));
    }

    let mut digraph = Vec::with_capacity(config.digraph.len());
    for (key, value) in config.digraph {
        let chars: Vec<char> = key.chars().collect();
        let &[a, b] = chars.as_slice() else {
            return Err(RomajiConfigError::InvalidKey {
                table: "digraph",
                expected: 2,
                key,
            });
        };
        if value.is_empty() {
            return Err(RomajiConfigError::EmptyValue(key));
        }
        digraph.push(([a, b], value));
    }

    Ok(ParsedRomaji { single, digraph })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_toml() {
        let toml = r#"
[single]
"あ" = "a"
"か" = "ka"

[digraph]
"きゃ" = "kya"
"#;
        let parsed = parse_romaji_toml(toml).unwrap();
        assert_eq!(parsed.single.len(), 2);
        assert_eq!(parsed.digraph.len(), 1);
        assert_eq!(parsed.digraph[0], (['き', 'ゃ'], "kya".to_string()));
    }

    #[test]
    fn parse_default_toml() {
        let parsed = parse_romaji_toml(super::super::table::DEFAULT_TOML).unwrap();
        assert!(
            parsed.single.len() > 80,
            "expected 80+ single mappings, got {}",
            parsed.single.len()
        );
        assert!(parsed.digraph.len() > 60);
    }

    #[test]
    fn digraph_section_is_optional() {
        let parsed = parse_romaji_toml("[single]\n\"あ\" = \"a\"\n").unwrap();
        assert!(parsed.digraph.is_empty());
        assert_eq!(parsed.len(), 1);
    }

    #[test]
    fn error_empty_single() {
        let err = parse_romaji_toml("[single]\n").unwrap_err();
        assert!(matches!(err, RomajiConfigError::EmptySingle));
    }

    #[test]
    fn error_multi_char_single_key() {
        let toml = r#"
[single]
"かな" = "kana"
"#;
        let err = parse_romaji_toml(toml).unwrap_err();
        assert!(matches!(
            err,
            RomajiConfigError::InvalidKey { table: "single", .. }
        ));
    }

    #[test]
    fn error_short_digraph_key() {
        let toml = r#"
[single]
"あ" = "a"

[digraph]
"き" = "ki"
"#;
        let err = parse_romaji_toml(toml).unwrap_err();
        assert!(err.to_string().contains("digraph"));
    }

    #[test]
    fn error_empty_value() {
        let toml = r#"
[single]
"あ" = ""
"#;
        let err = parse_romaji_toml(toml).unwrap_err();
        assert!(matches!(err, RomajiConfigError::EmptyValue(_)));
    }

    #[test]
    fn error_invalid_toml() {
        let err = parse_romaji_toml("not valid toml {{{").unwrap_err();
        assert!(matches!(err, RomajiConfigError::Parse(_)));
    }
}
