//! Character-level Unicode classification and kana normalization.

/// Check the full Hiragana block (U+3040..U+309F).
pub fn is_hiragana(c: char) -> bool {
    ('\u{3040}'..='\u{309F}').contains(&c)
}

/// Check the full Katakana block (U+30A0..U+30FF). Includes the prolonged
/// sound mark ー (U+30FC).
pub fn is_katakana(c: char) -> bool {
    ('\u{30A0}'..='\u{30FF}').contains(&c)
}

/// CJK Unified Ideographs, Extension A and Extension B.
pub fn is_kanji(c: char) -> bool {
    ('\u{4E00}'..='\u{9FFF}').contains(&c)
        || ('\u{3400}'..='\u{4DBF}').contains(&c)
        || ('\u{20000}'..='\u{2A6DF}').contains(&c)
}

pub fn is_latin(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// True when every character is in the ASCII/Latin-1 range (U+0000..U+00FF).
///
/// Token surfaces that pass this check are already written in the Latin
/// alphabet and are romanized verbatim.
pub fn is_latin1_text(s: &str) -> bool {
    s.chars().all(|c| (c as u32) <= 0xFF)
}

/// Convert katakana to hiragana.
///
/// Only the standard katakana letters (U+30A1..U+30F6) are shifted; ー, the
/// middle dot and the iteration marks are passed through unchanged, as are
/// kanji, latin and punctuation.
pub fn katakana_to_hiragana(s: &str) -> String {
    s.chars().map(katakana_char_to_hiragana).collect()
}

fn katakana_char_to_hiragana(c: char) -> char {
    if ('\u{30A1}'..='\u{30F6}').contains(&c) {
        char::from_u32(c as u32 - 0x60).unwrap_or(c)
    } else {
        c
    }
}

pub fn contains_kanji(s: &str) -> bool {
    s.chars().any(is_kanji)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_katakana_to_hiragana() {
        assert_eq!(katakana_to_hiragana("コーヒー"), "こーひー");
        assert_eq!(katakana_to_hiragana("キョウ"), "きょう");
        assert_eq!(katakana_to_hiragana("ヴァ"), "ゔぁ");
        assert_eq!(katakana_to_hiragana("ヮ"), "ゎ");
        assert_eq!(katakana_to_hiragana("ヵヶ"), "ゕゖ");
        assert_eq!(katakana_to_hiragana("漢字とabc。"), "漢字とabc。");
        assert_eq!(katakana_to_hiragana(""), "");
    }

    #[test]
    fn test_katakana_to_hiragana_leaves_marks() {
        // ・ (U+30FB), ー (U+30FC) and ヽ (U+30FD) sit outside the letter range.
        assert_eq!(katakana_to_hiragana("・ーヽ"), "・ーヽ");
        assert_eq!(katakana_to_hiragana("ヷ"), "ヷ");
    }

    #[test]
    fn test_char_classification() {
        assert!(is_hiragana('あ'));
        assert!(!is_hiragana('ア'));
        assert!(is_katakana('ア'));
        assert!(is_katakana('ー'));
        assert!(!is_katakana('あ'));
        assert!(is_kanji('漢'));
        assert!(is_kanji('\u{3400}'));
        assert!(is_kanji('\u{20000}'));
        assert!(!is_kanji('々'));
        assert!(!is_kanji('あ'));
        assert!(is_latin('a'));
        assert!(!is_latin('あ'));
    }

    #[test]
    fn test_is_latin1_text() {
        assert!(is_latin1_text("Tokyo"));
        assert!(is_latin1_text("T-shirt 2"));
        assert!(is_latin1_text("café"));
        assert!(is_latin1_text(""));
        assert!(!is_latin1_text("東京"));
        assert!(!is_latin1_text("Ａ"));
    }

    #[test]
    fn test_contains_kanji() {
        assert!(contains_kanji("食べる"));
        assert!(!contains_kanji("たべる"));
        assert!(!contains_kanji(""));
    }
}
