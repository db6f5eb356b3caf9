//! Ruby markup for a single analyzer token.
//!
//! Kanji runs get their reading in `<rt>`; kana and everything else get the
//! blank marker so all tokens render at the same height.

use std::borrow::Cow;

use crate::settings::FuriganaSettings;
use crate::token::MorphToken;
use crate::unicode::{contains_kanji, is_kanji, katakana_to_hiragana};

/// A maximal run of kanji or non-kanji characters within a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptRun<'a> {
    pub text: &'a str,
    pub kanji: bool,
}

/// Split `surface` into alternating kanji / non-kanji runs.
pub fn split_runs(surface: &str) -> Vec<ScriptRun<'_>> {
    let mut runs = Vec::new();
    let mut start = 0;
    let mut current: Option<bool> = None;

    for (i, c) in surface.char_indices() {
        let kanji = is_kanji(c);
        match current {
            Some(k) if k == kanji => {}
            Some(k) => {
                runs.push(ScriptRun {
                    text: &surface[start..i],
                    kanji: k,
                });
                start = i;
                current = Some(kanji);
            }
            None => current = Some(kanji),
        }
    }
    if let Some(k) = current {
        runs.push(ScriptRun {
            text: &surface[start..],
            kanji: k,
        });
    }
    runs
}

/// The part of `reading` that belongs to a kanji run, given the kana written
/// before and after it in the surface.
///
/// Falls back to the whole reading when either neighbour does not match the
/// reading's edge, which happens for words with several okurigana runs.
pub fn extract_reading<'a>(reading: &'a str, before: &str, after: &str) -> &'a str {
    reading
        .strip_prefix(before)
        .and_then(|r| r.strip_suffix(after))
        .filter(|r| !r.is_empty())
        .unwrap_or(reading)
}

fn escape_html(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', '<', '>', '"']) {
        return Cow::Borrowed(s);
    }
    let mut out = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

struct RubyWriter<'s> {
    settings: &'s FuriganaSettings,
    out: String,
}

impl<'s> RubyWriter<'s> {
    fn new(settings: &'s FuriganaSettings) -> Self {
        Self {
            settings,
            out: String::new(),
        }
    }

    fn text<'a>(&self, s: &'a str) -> Cow<'a, str> {
        if self.settings.escape_html {
            escape_html(s)
        } else {
            Cow::Borrowed(s)
        }
    }

    /// Append one `<ruby>` group; `None` writes the blank marker.
    fn group(&mut self, base: &str, reading: Option<&str>) {
        let base = self.text(base);
        let rt = match reading {
            Some(r) => self.text(r),
            None => Cow::Borrowed(self.settings.blank.as_str()),
        };
        self.out.push_str("<ruby>");
        self.out.push_str(&base);
        self.out.push_str("<rt>");
        self.out.push_str(&rt);
        self.out.push_str("</rt></ruby>");
    }

    fn finish(self) -> String {
        self.out
    }
}

/// Ruby markup for one token.
pub fn annotate(token: &MorphToken, placeholder: &str, settings: &FuriganaSettings) -> String {
    let mut writer = RubyWriter::new(settings);
    let surface = token.surface.as_str();

    let reading = match token.reading_or_none(placeholder) {
        Some(r) if r != surface && contains_kanji(surface) => katakana_to_hiragana(r),
        _ => {
            writer.group(surface, None);
            return writer.finish();
        }
    };

    if !settings.split_okurigana || surface.chars().all(is_kanji) {
        writer.group(surface, Some(&reading));
        return writer.finish();
    }

    let runs = split_runs(surface);
    for (i, run) in runs.iter().enumerate() {
        if !run.kanji {
            writer.group(run.text, None);
            continue;
        }
        // Runs alternate, so the neighbours of a kanji run are kana runs.
        let before = i
            .checked_sub(1)
            .map(|j| katakana_to_hiragana(runs[j].text))
            .unwrap_or_default();
        let after = runs
            .get(i + 1)
            .map(|r| katakana_to_hiragana(r.text))
            .unwrap_or_default();
        writer.group(run.text, Some(extract_reading(&reading, &before, &after)));
    }
    writer.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::settings;

    fn split_settings() -> FuriganaSettings {
        let mut s = settings().furigana.clone();
        s.split_okurigana = true;
        s
    }

    fn furigana(surface: &str, reading: &str) -> String {
        let token = MorphToken::new(surface, reading, "名詞");
        annotate(&token, "*", &split_settings())
    }

    #[test]
    fn test_split_runs() {
        let runs = split_runs("取り扱い");
        let texts: Vec<(&str, bool)> = runs.iter().map(|r| (r.text, r.kanji)).collect();
        assert_eq!(
            texts,
            vec![("取", true), ("り", false), ("扱", true), ("い", false)]
        );
        assert!(split_runs("").is_empty());
        assert_eq!(split_runs("ねこ").len(), 1);
    }

    #[test]
    fn test_extract_reading() {
        assert_eq!(extract_reading("たべる", "", "べる"), "た");
        assert_eq!(extract_reading("おちゃ", "お", ""), "ちゃ");
        assert_eq!(extract_reading("とりあつかい", "", "り"), "とりあつかい");
        assert_eq!(extract_reading("べる", "", "べる"), "べる");
    }

    #[test]
    fn test_all_kanji() {
        assert_eq!(furigana("猫", "ネコ"), "<ruby>猫<rt>ねこ</rt></ruby>");
        assert_eq!(furigana("日本語", "にほんご"), "<ruby>日本語<rt>にほんご</rt></ruby>");
    }

    #[test]
    fn test_okurigana() {
        assert_eq!(
            furigana("食べる", "タベル"),
            "<ruby>食<rt>た</rt></ruby><ruby>べる<rt>&nbsp;</rt></ruby>"
        );
        assert_eq!(
            furigana("好き", "スキ"),
            "<ruby>好<rt>す</rt></ruby><ruby>き<rt>&nbsp;</rt></ruby>"
        );
    }

    #[test]
    fn test_prefix_kana() {
        assert_eq!(
            furigana("お茶", "オチャ"),
            "<ruby>お<rt>&nbsp;</rt></ruby><ruby>茶<rt>ちゃ</rt></ruby>"
        );
    }

    #[test]
    fn test_ambiguous_okurigana_falls_back() {
        assert_eq!(
            furigana("取り扱い", "トリアツカイ"),
            "<ruby>取<rt>とりあつかい</rt></ruby><ruby>り<rt>&nbsp;</rt></ruby>\
             <ruby>扱<rt>とりあつかい</rt></ruby><ruby>い<rt>&nbsp;</rt></ruby>"
        );
    }

    #[test]
    fn test_blank_cases() {
        assert_eq!(furigana("が", "ガ"), "<ruby>が<rt>&nbsp;</rt></ruby>");
        assert_eq!(furigana("コーヒー", "コーヒー"), "<ruby>コーヒー<rt>&nbsp;</rt></ruby>");
        assert_eq!(furigana("猫", "*"), "<ruby>猫<rt>&nbsp;</rt></ruby>");
        assert_eq!(furigana("。", "。"), "<ruby>。<rt>&nbsp;</rt></ruby>");
    }

    #[test]
    fn test_escapes_markup_in_surface() {
        assert_eq!(furigana("<b>", "*"), "<ruby>&lt;b&gt;<rt>&nbsp;</rt></ruby>");
        assert_eq!(furigana("A&B", "*"), "<ruby>A&amp;B<rt>&nbsp;</rt></ruby>");
    }

    #[test]
    fn test_whole_token_by_default() {
        let s = &settings().furigana;
        let token = MorphToken::new("好き", "スキ", "形容詞");
        assert_eq!(annotate(&token, "*", s), "<ruby>好き<rt>すき</rt></ruby>");
        let token = MorphToken::new("が", "ガ", "助詞");
        assert_eq!(annotate(&token, "*", s), "<ruby>が<rt>&nbsp;</rt></ruby>");
    }

    #[test]
    fn test_escape_disabled() {
        let mut s = settings().furigana.clone();
        s.escape_html = false;
        let token = MorphToken::unread("<b>", "記号");
        assert_eq!(annotate(&token, "*", &s), "<ruby><b><rt>&nbsp;</rt></ruby>");
    }
}
