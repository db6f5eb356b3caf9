pub mod analyzer;
pub mod explain;
pub mod furigana;
pub mod gloss;
pub mod pos;
pub mod romaji;
pub mod segment;
pub mod settings;
pub mod token;
pub mod transcriber;
pub mod unicode;

pub use analyzer::{Analyzer, AnalyzerError};
pub use gloss::{GlossDictionary, Vocabulary};
pub use token::{AnnotatedToken, MorphToken, SentenceResult, Transcript};
pub use transcriber::{TranscribeError, Transcriber};
