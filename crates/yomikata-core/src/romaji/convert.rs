use super::table::RomajiTable;

const SOKUON: char = 'っ';
const CHOONPU: char = 'ー';

pub(crate) fn is_vowel(ch: char) -> bool {
    matches!(ch, 'a' | 'i' | 'u' | 'e' | 'o')
}

fn is_consonant(ch: char) -> bool {
    ch.is_ascii_alphabetic() && !is_vowel(ch.to_ascii_lowercase())
}

/// The last vowel letter written to `romaji`, if any.
pub(crate) fn last_vowel(romaji: &str) -> Option<char> {
    romaji.chars().rev().find(|&c| is_vowel(c))
}

/// Romaji for the unit starting at `i`: a digraph when one is defined,
/// otherwise a single character. Returns the romaji and the number of
/// characters consumed.
fn lookup_unit<'t>(chars: &[char], i: usize, table: &'t RomajiTable) -> Option<(&'t str, usize)> {
    let &first = chars.get(i)?;
    if let Some(&next) = chars.get(i + 1) {
        if let Some(r) = table.digraph(first, next) {
            return Some((r, 2));
        }
    }
    table.single(first).map(|r| (r, 1))
}

/// Convert a hiragana string to romaji.
///
/// Katakana must be normalized beforehand; unmapped characters (kanji,
/// latin, unknown symbols) are copied through unchanged.
pub fn kana_to_romaji(kana: &str, table: &RomajiTable) -> String {
    kana_to_romaji_after(kana, table, 'u')
}

/// Same as [`kana_to_romaji`], with the vowel that a leading ー extends when
/// nothing has been written yet (the previous token's last vowel).
pub(crate) fn kana_to_romaji_after(kana: &str, table: &RomajiTable, prev_vowel: char) -> String {
    let chars: Vec<char> = kana.chars().collect();
    let mut out = String::with_capacity(chars.len() * 2);
    let mut i = 0;

    while i < chars.len() {
        let ch = chars[i];

        if ch == SOKUON {
            // Double the first consonant of whatever follows; a trailing or
            // vowel-initial っ is silent.
            if let Some((next, _)) = lookup_unit(&chars, i + 1, table) {
                if let Some(first) = next.chars().next().filter(|&c| is_consonant(c)) {
                    out.push(first);
                }
            }
            i += 1;
            continue;
        }

        if ch == CHOONPU {
            out.push(last_vowel(&out).unwrap_or(prev_vowel));
            i += 1;
            continue;
        }

        match lookup_unit(&chars, i, table) {
            Some((romaji, consumed)) => {
                out.push_str(romaji);
                i += consumed;
            }
            None => {
                out.push(ch);
                i += 1;
            }
        }
    }

    out
}
