//! Boundary with the external morphological analyzer.
//!
//! The engine never segments text itself: it hands each sentence to an
//! [`Analyzer`] and consumes the tokens it returns. Analyzers running out of
//! process can be bridged through [`parse_mecab`].

mod mecab;

pub use mecab::{parse_mecab, parse_mecab_line};

use crate::token::MorphToken;

#[derive(Debug, thiserror::Error)]
pub enum AnalyzerError {
    #[error("analyzer unavailable: {0}")]
    Unavailable(String),
    #[error("malformed analyzer output: {0}")]
    Malformed(String),
    #[error("MeCab output line {line}: {reason}")]
    Mecab { line: usize, reason: String },
}

/// Splits one sentence into morphological tokens.
pub trait Analyzer {
    fn tokenize(&self, sentence: &str) -> Result<Vec<MorphToken>, AnalyzerError>;
}

impl<F> Analyzer for F
where
    F: Fn(&str) -> Result<Vec<MorphToken>, AnalyzerError>,
{
    fn tokenize(&self, sentence: &str) -> Result<Vec<MorphToken>, AnalyzerError> {
        self(sentence)
    }
}
