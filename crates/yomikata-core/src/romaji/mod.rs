//! Kana-to-romaji conversion engine.
//!
//! Table-driven lookup of single characters and digraphs, with sokuon (っ)
//! gemination, long-vowel (ー) extension and token-level word spacing.

mod config;
mod convert;
mod joiner;
mod table;

pub use config::{parse_romaji_toml, ParsedRomaji, RomajiConfigError};
pub use convert::kana_to_romaji;
pub use joiner::{TokenSource, WordJoiner};
pub use table::{default_toml, RomajiTable};
