//! MeCab (IPADIC) output parser.
//!
//! Format: `<surface>\t<pos1>,<pos2>,<pos3>,<pos4>,<conj_type>,<conj_form>,<base>,<reading>,<pron>`
//!
//! `EOS` closes a sentence. Unknown words carry only the first seven feature
//! fields, so they have no reading. `*` marks an empty field.

use super::AnalyzerError;
use crate::token::{MorphToken, READING_PLACEHOLDER};

const EOS: &str = "EOS";
const BASE_FORM_FIELD: usize = 6;
const READING_FIELD: usize = 7;

fn field(features: &[&str], index: usize) -> Option<String> {
    features
        .get(index)
        .filter(|f| !f.is_empty() && **f != READING_PLACEHOLDER)
        .map(|f| f.to_string())
}

/// Parse a single token line. `line_no` is 1-based and only used in errors.
pub fn parse_mecab_line(line: &str, line_no: usize) -> Result<MorphToken, AnalyzerError> {
    let (surface, feature_str) = line.split_once('\t').ok_or_else(|| AnalyzerError::Mecab {
        line: line_no,
        reason: "missing tab between surface and features".to_string(),
    })?;
    if surface.is_empty() {
        return Err(AnalyzerError::Mecab {
            line: line_no,
            reason: "empty surface".to_string(),
        });
    }

    let features: Vec<&str> = feature_str.split(',').collect();
    let pos = features.first().copied().unwrap_or_default();
    if pos.is_empty() {
        return Err(AnalyzerError::Mecab {
            line: line_no,
            reason: "empty part-of-speech".to_string(),
        });
    }

    Ok(MorphToken {
        surface: surface.to_string(),
        reading: field(&features, READING_FIELD),
        base_form: field(&features, BASE_FORM_FIELD),
        pos: pos.to_string(),
    })
}

/// Parse a whole MeCab output stream into per-sentence token lists.
///
/// Blank lines are ignored; tokens after the last `EOS` form a final
/// sentence. Empty sentences (consecutive `EOS`) are dropped.
pub fn parse_mecab(output: &str) -> Result<Vec<Vec<MorphToken>>, AnalyzerError> {
    let mut sentences = Vec::new();
    let mut current = Vec::new();

    for (i, line) in output.lines().enumerate() {
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }
        if line == EOS {
            if !current.is_empty() {
                sentences.push(std::mem::take(&mut current));
            }
            continue;
        }
        current.push(parse_mecab_line(line, i + 1)?);
    }
    if !current.is_empty() {
        sentences.push(current);
    }

    Ok(sentences)
}
