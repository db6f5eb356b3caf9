//! Loading pre-analyzed sentences for the transcription commands.
//!
//! Two formats are accepted: raw MeCab (IPADIC) output, and a JSON array of
//! sentences, each an array of `{surface, reading, base_form, pos}` objects.

use std::fs;
use std::io::{self, Read};

use tracing::debug;
use yomikata_core::analyzer::{parse_mecab, AnalyzerError};
use yomikata_core::MorphToken;

/// Sentence text paired with its analyzer tokens.
pub type AnalyzedSentence = (String, Vec<MorphToken>);

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("analyzer output: {0}")]
    Analyzer(#[from] AnalyzerError),
    #[error("token JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Read `file`, or stdin when it is absent or `-`.
pub fn read_source(file: Option<&str>) -> io::Result<String> {
    match file {
        Some(path) if path != "-" => fs::read_to_string(path),
        _ => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn with_text(tokens: Vec<MorphToken>) -> AnalyzedSentence {
    let text = tokens.iter().map(|t| t.surface.as_str()).collect();
    (text, tokens)
}

pub fn sentences_from_mecab(output: &str) -> Result<Vec<AnalyzedSentence>, InputError> {
    Ok(parse_mecab(output)?.into_iter().map(with_text).collect())
}

pub fn sentences_from_json(json: &str) -> Result<Vec<AnalyzedSentence>, InputError> {
    let sentences: Vec<Vec<MorphToken>> = serde_json::from_str(json)?;
    for (i, tokens) in sentences.iter().enumerate() {
        if let Some(j) = tokens.iter().position(|t| t.surface.is_empty()) {
            return Err(AnalyzerError::Malformed(format!(
                "sentence {}, token {}: empty surface",
                i + 1,
                j + 1
            ))
            .into());
        }
    }
    Ok(sentences
        .into_iter()
        .filter(|tokens| !tokens.is_empty())
        .map(with_text)
        .collect())
}

pub fn load_sentences(file: Option<&str>, json: bool) -> Result<Vec<AnalyzedSentence>, InputError> {
    let content = read_source(file)?;
    let sentences = if json {
        sentences_from_json(&content)?
    } else {
        sentences_from_mecab(&content)?
    };
    debug!(sentences = sentences.len(), json, "loaded analyzer output");
    Ok(sentences)
}
