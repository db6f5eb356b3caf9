//! Sentence splitting ahead of per-sentence analysis.
//!
//! Only the full stop delimits sentences; ！ and ？ stay inside their
//! sentence.

/// Default sentence delimiter.
pub const FULL_STOP: char = '。';

/// Split `text` on `delimiter`, drop blank fragments and re-append the
/// delimiter to every fragment that is kept.
pub fn segment(text: &str, delimiter: char) -> Vec<String> {
    text.split(delimiter)
        .filter(|fragment| !fragment.trim().is_empty())
        .map(|fragment| {
            let mut sentence = String::with_capacity(fragment.len() + delimiter.len_utf8());
            sentence.push_str(fragment);
            sentence.push(delimiter);
            sentence
        })
        .collect()
}
