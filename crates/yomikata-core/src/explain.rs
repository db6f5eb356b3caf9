//! Human-readable breakdown of a transcript, for diagnostics tools.

use unicode_width::UnicodeWidthStr;

use crate::token::Transcript;

const SURFACE_COLUMN: usize = 12;
const ROMAJI_COLUMN: usize = 14;

fn pad(s: &str, width: usize) -> String {
    let display_width = UnicodeWidthStr::width(s);
    if display_width < width {
        format!("{}{}", s, " ".repeat(width - display_width))
    } else {
        s.to_string()
    }
}

/// Format a transcript as an aligned per-token table.
pub fn format_text(transcript: &Transcript) -> String {
    let mut out = String::new();

    out.push_str(&format!("=== Romaji ===\n  {}\n", transcript.romaji));

    for (i, sentence) in transcript.sentences.iter().enumerate() {
        out.push_str(&format!(
            "\n=== Sentence {} ({} tokens) ===\n  {}\n",
            i + 1,
            sentence.tokens.len(),
            sentence.text,
        ));
        for token in &sentence.tokens {
            let meaning = token.meaning.as_deref().unwrap_or("-");
            out.push_str(&format!(
                "    {} {} {}\n",
                pad(&token.surface, SURFACE_COLUMN),
                pad(&token.romaji, ROMAJI_COLUMN),
                meaning,
            ));
        }
    }

    out
}
