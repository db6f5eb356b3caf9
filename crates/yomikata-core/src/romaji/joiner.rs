//! Token-level romaji assembly: word spacing and cross-token youon merging.
//!
//! Analyzers sometimes split a youon across two tokens (し | ょう). The joiner
//! remembers the previous token's last kana, last vowel and POS class so the
//! next token can be glued back onto it.

use crate::pos::PosClass;
use crate::settings::RomajiSettings;
use crate::token::MorphToken;
use crate::unicode::{is_hiragana, is_latin1_text, katakana_to_hiragana};

use super::convert::{kana_to_romaji_after, last_vowel};
use super::table::RomajiTable;

/// What a token contributes to the romaji output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenSource<'a> {
    /// Already Latin text; copied as-is.
    Verbatim(&'a str),
    /// Hiragana (normalized) to be converted.
    Kana(String),
}

impl<'a> TokenSource<'a> {
    /// The reading when there is one, otherwise the surface.
    pub fn of(token: &'a MorphToken, placeholder: &str) -> Self {
        match token.reading_or_none(placeholder) {
            Some(reading) => TokenSource::Kana(katakana_to_hiragana(reading)),
            None if is_latin1_text(&token.surface) => TokenSource::Verbatim(&token.surface),
            None => TokenSource::Kana(katakana_to_hiragana(&token.surface)),
        }
    }
}

fn is_small_y(c: char) -> bool {
    matches!(c, 'ゃ' | 'ゅ' | 'ょ')
}

/// Accumulates romaji token by token.
pub struct WordJoiner<'t> {
    table: &'t RomajiTable,
    settings: &'t RomajiSettings,
    out: String,
    prev_class: Option<PosClass>,
    /// Last hiragana character of the previous token, if it ended in one.
    tail_kana: Option<char>,
    tail_vowel: Option<char>,
}

impl<'t> WordJoiner<'t> {
    pub fn new(table: &'t RomajiTable, settings: &'t RomajiSettings) -> Self {
        Self {
            table,
            settings,
            out: String::new(),
            prev_class: None,
            tail_kana: None,
            tail_vowel: None,
        }
    }

    pub fn push(&mut self, source: TokenSource<'_>, class: PosClass) {
        let (romaji, merged, tail_kana) = match source {
            TokenSource::Verbatim(text) => (text.to_string(), false, None),
            TokenSource::Kana(kana) => {
                let tail_kana = kana.chars().last().filter(|&c| is_hiragana(c));
                match self.merge_youon(&kana) {
                    Some(romaji) => (romaji, true, tail_kana),
                    None => {
                        let vowel = self.tail_vowel.unwrap_or(self.settings.long_vowel_fallback);
                        (kana_to_romaji_after(&kana, self.table, vowel), false, tail_kana)
                    }
                }
            }
        };

        if romaji.is_empty() {
            return;
        }
        if !merged && self.wants_space(class) {
            self.out.push(' ');
        }
        self.out.push_str(&romaji);

        self.prev_class = Some(class);
        self.tail_kana = tail_kana;
        self.tail_vowel = last_vowel(&romaji).or(self.tail_vowel);
    }

    fn wants_space(&self, class: PosClass) -> bool {
        match class {
            PosClass::Symbol => false,
            c if c.is_content() || c.is_function() => true,
            _ => self.prev_class.is_some_and(PosClass::is_function),
        }
    }

    /// Rewrites the end of the output when `kana` opens with a small ゃゅょ
    /// that belongs to the previous token's last syllable. Returns the romaji
    /// to append, or `None` when no merge applies.
    fn merge_youon(&mut self, kana: &str) -> Option<String> {
        let first = kana.chars().next().filter(|&c| is_small_y(c))?;
        if !self.out.ends_with('i') {
            return None;
        }
        let rest = &kana[first.len_utf8()..];

        let digraph = self.tail_kana.and_then(|k| {
            let prev = self.table.single(k)?;
            let combined = self.table.digraph(k, first)?;
            self.out.ends_with(prev).then_some((prev.len(), combined))
        });

        let head = match digraph {
            // し + ょ → "sho", き + ょ → "kyo"
            Some((prev_len, combined)) => {
                self.out.truncate(self.out.len() - prev_len);
                combined.to_string()
            }
            // Previous syllable unknown: drop the "i" and the glide.
            None => {
                let small = self.table.single(first)?;
                self.out.pop();
                small.strip_prefix('y').unwrap_or(small).to_string()
            }
        };

        let vowel = last_vowel(&head).unwrap_or(self.settings.long_vowel_fallback);
        let mut romaji = head;
        romaji.push_str(&kana_to_romaji_after(rest, self.table, vowel));
        Some(romaji)
    }

    /// Normalize spacing and return the assembled string.
    pub fn finish(self) -> String {
        let mut result = String::with_capacity(self.out.len());
        for c in self.out.chars() {
            if c == ' ' && result.ends_with(' ') {
                continue;
            }
            if self.settings.attach.contains(&c) && result.ends_with(' ') {
                result.pop();
            }
            result.push(c);
        }
        result.trim().to_string()
    }
}
