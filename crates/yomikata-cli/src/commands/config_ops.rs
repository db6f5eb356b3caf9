use std::fs;

use yomikata_core::gloss::{self, GlossDictionary, GlossError};
use yomikata_core::romaji::{self, RomajiConfigError, RomajiTable};
use yomikata_core::settings::{self, SettingsError};

/// Custom config files named on the command line.
#[derive(Debug, Default)]
pub struct Overrides<'a> {
    pub romaji: Option<&'a str>,
    pub glosses: Option<&'a str>,
    pub settings: Option<&'a str>,
}

/// Install custom tables before any command touches the globals.
pub fn apply_overrides(overrides: &Overrides<'_>) {
    if let Some(file) = overrides.romaji {
        let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
        die!(RomajiTable::init_custom(content), "Error in {file}: {}");
    }
    if let Some(file) = overrides.glosses {
        let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
        die!(GlossDictionary::init_custom(content), "Error in {file}: {}");
    }
    if let Some(file) = overrides.settings {
        let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
        die!(settings::init_custom(content), "Error in {file}: {}");
    }
}

pub fn romaji_summary(content: &str) -> Result<String, RomajiConfigError> {
    let parsed = romaji::parse_romaji_toml(content)?;
    Ok(format!(
        "OK: {} mappings ({} single, {} digraph)",
        parsed.len(),
        parsed.single.len(),
        parsed.digraph.len()
    ))
}

pub fn glosses_summary(content: &str) -> Result<String, GlossError> {
    let dict = gloss::parse_glosses_toml(content)?;
    Ok(format!("OK: {} glosses", dict.len()))
}

pub fn settings_summary(content: &str) -> Result<String, SettingsError> {
    let s = settings::parse_settings_toml(content)?;
    Ok(format!(
        "OK: reading.placeholder={:?}, segment.delimiter={:?}, furigana.split_okurigana={}",
        s.reading.placeholder, s.segment.delimiter, s.furigana.split_okurigana
    ))
}

pub fn romaji_export() {
    print!("{}", romaji::default_toml());
}

pub fn romaji_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    println!("{}", die!(romaji_summary(&content), "Error: {}"));
}

pub fn glosses_export() {
    print!("{}", gloss::default_toml());
}

pub fn glosses_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    println!("{}", die!(glosses_summary(&content), "Error: {}"));
}

pub fn settings_export() {
    print!("{}", settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    println!("{}", die!(settings_summary(&content), "Error: {}"));
}
