//! The transcription pipeline: segment, analyze, romanize, annotate, gloss.
//!
//! `Transcriber` owns only immutable, shared data (romaji tables, fallback
//! glosses, settings), so one instance can serve any number of threads.

#[cfg(test)]
mod tests;

use std::sync::Arc;

use tracing::{debug, debug_span};

use crate::analyzer::{Analyzer, AnalyzerError};
use crate::furigana;
use crate::gloss::{self, GlossDictionary, Vocabulary};
use crate::romaji::{RomajiTable, TokenSource, WordJoiner};
use crate::segment;
use crate::settings::{settings, Settings};
use crate::token::{AnnotatedToken, MorphToken, SentenceResult, Transcript};

#[derive(Debug, thiserror::Error)]
pub enum TranscribeError {
    #[error("tokenization failed for {sentence:?}: {source}")]
    TokenizationFailed {
        sentence: String,
        #[source]
        source: AnalyzerError,
    },
}

#[derive(Debug, Clone)]
pub struct Transcriber {
    table: Arc<RomajiTable>,
    glosses: Arc<GlossDictionary>,
    settings: Arc<Settings>,
}

impl Default for Transcriber {
    fn default() -> Self {
        Self::new()
    }
}

impl Transcriber {
    /// A transcriber backed by the global romaji table, gloss dictionary and
    /// settings.
    pub fn new() -> Self {
        Self {
            table: RomajiTable::global(),
            glosses: GlossDictionary::global(),
            settings: Arc::new(settings().clone()),
        }
    }

    pub fn with_table(mut self, table: Arc<RomajiTable>) -> Self {
        self.table = table;
        self
    }

    pub fn with_glosses(mut self, glosses: Arc<GlossDictionary>) -> Self {
        self.glosses = glosses;
        self
    }

    pub fn with_settings(mut self, settings: Arc<Settings>) -> Self {
        self.settings = settings;
        self
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    fn placeholder(&self) -> &str {
        &self.settings.reading.placeholder
    }

    /// Romaji for a token sequence, with word spacing and cross-token youon
    /// merging.
    pub fn romanize(&self, tokens: &[MorphToken]) -> String {
        self.romanize_iter(tokens.iter())
    }

    fn romanize_iter<'a>(&self, tokens: impl Iterator<Item = &'a MorphToken>) -> String {
        let _span = debug_span!("romanize").entered();
        let mut joiner = WordJoiner::new(&self.table, &self.settings.romaji);
        for token in tokens {
            joiner.push(TokenSource::of(token, self.placeholder()), token.pos_class());
        }
        joiner.finish()
    }

    /// Romaji for one token on its own.
    pub fn token_romaji(&self, token: &MorphToken) -> String {
        self.romanize(std::slice::from_ref(token))
    }

    /// Ruby markup for one token.
    pub fn annotate(&self, token: &MorphToken) -> String {
        furigana::annotate(token, self.placeholder(), &self.settings.furigana)
    }

    pub fn segment(&self, text: &str) -> Vec<String> {
        segment::segment(text, self.settings.segment.delimiter)
    }

    pub fn enrich(&self, token: &MorphToken, vocabulary: &Vocabulary) -> Option<String> {
        gloss::enrich(token, self.placeholder(), vocabulary, &self.glosses)
    }

    /// Annotate the tokens of one already-analyzed sentence.
    pub fn annotate_sentence(
        &self,
        text: &str,
        tokens: &[MorphToken],
        vocabulary: &Vocabulary,
    ) -> SentenceResult {
        let _span = debug_span!("annotate_sentence", tokens = tokens.len()).entered();
        let tokens = tokens
            .iter()
            .map(|token| AnnotatedToken {
                surface: token.surface.clone(),
                romaji: self.token_romaji(token),
                furigana_html: self.annotate(token),
                meaning: self.enrich(token, vocabulary),
            })
            .collect();
        SentenceResult {
            text: text.to_string(),
            tokens,
        }
    }

    /// Segment `text`, run each sentence through `analyzer` and annotate the
    /// result.
    pub fn transcribe(
        &self,
        text: &str,
        analyzer: &dyn Analyzer,
        vocabulary: &Vocabulary,
    ) -> Result<Transcript, TranscribeError> {
        let _span = debug_span!("transcribe", chars = text.chars().count()).entered();
        let mut analyzed = Vec::new();
        for sentence in self.segment(text) {
            match analyzer.tokenize(&sentence) {
                Ok(tokens) => analyzed.push((sentence, tokens)),
                Err(source) => {
                    debug!(%source, "analyzer failed");
                    return Err(TranscribeError::TokenizationFailed { sentence, source });
                }
            }
        }
        Ok(self.transcribe_tokens(analyzed, vocabulary))
    }

    /// Assemble a transcript from sentences that were analyzed elsewhere.
    pub fn transcribe_tokens(
        &self,
        sentences: impl IntoIterator<Item = (String, Vec<MorphToken>)>,
        vocabulary: &Vocabulary,
    ) -> Transcript {
        let analyzed: Vec<(String, Vec<MorphToken>)> = sentences.into_iter().collect();

        let romaji = self.romanize_iter(analyzed.iter().flat_map(|(_, tokens)| tokens.iter()));
        let sentences: Vec<SentenceResult> = analyzed
            .iter()
            .map(|(text, tokens)| self.annotate_sentence(text, tokens, vocabulary))
            .collect();
        let furigana_html: String = sentences
            .iter()
            .flat_map(|s| s.tokens.iter())
            .map(|t| t.furigana_html.as_str())
            .collect();

        debug!(sentences = sentences.len(), romaji_len = romaji.len());
        Transcript {
            romaji,
            furigana_html,
            sentences,
        }
    }
}
