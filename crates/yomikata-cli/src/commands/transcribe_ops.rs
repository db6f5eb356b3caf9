use std::path::Path;

use yomikata_core::explain;
use yomikata_core::gloss::GlossDictionary;
use yomikata_core::{Transcriber, Transcript, Vocabulary};

use super::input::{load_sentences, AnalyzedSentence};

/// Where the analyzer output comes from.
pub struct Source<'a> {
    pub file: Option<&'a str>,
    pub json: bool,
}

fn transcript(source: &Source<'_>, vocabulary: &Vocabulary) -> Transcript {
    let sentences = die!(
        load_sentences(source.file, source.json),
        "Error reading analyzer output: {}"
    );
    transcribe(&sentences, vocabulary)
}

pub fn transcribe(sentences: &[AnalyzedSentence], vocabulary: &Vocabulary) -> Transcript {
    Transcriber::new().transcribe_tokens(sentences.iter().cloned(), vocabulary)
}

pub fn load_vocabulary(path: &Path) -> Result<Vocabulary, yomikata_core::gloss::GlossError> {
    GlossDictionary::open(path).map(GlossDictionary::into_vocabulary)
}

pub fn romaji_cmd(source: &Source<'_>) {
    println!("{}", transcript(source, &Vocabulary::new()).romaji);
}

pub fn furigana_cmd(source: &Source<'_>) {
    println!("{}", transcript(source, &Vocabulary::new()).furigana_html);
}

pub fn annotate_cmd(source: &Source<'_>, vocab: Option<&str>, json: bool) {
    let vocabulary = match vocab {
        Some(path) => die!(
            load_vocabulary(Path::new(path)),
            "Error loading vocabulary {path}: {}"
        ),
        None => Vocabulary::new(),
    };
    let result = transcript(source, &vocabulary);
    if json {
        let text = die!(
            serde_json::to_string_pretty(&result),
            "JSON serialization failed: {}"
        );
        println!("{text}");
    } else {
        print!("{}", explain::format_text(&result));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::input::sentences_from_mecab;

    const MECAB: &str = "\
猫\t名詞,一般,*,*,*,*,猫,ネコ,ネコ
が\t助詞,格助詞,一般,*,*,*,が,ガ,ガ
好き\t名詞,形容動詞語幹,*,*,*,*,好き,スキ,スキ
です\t助動詞,*,*,*,特殊・デス,基本形,です,デス,デス
。\t記号,句点,*,*,*,*,。,。,。
EOS
";

    #[test]
    fn test_transcribe_mecab() {
        let sentences = sentences_from_mecab(MECAB).unwrap();
        let t = transcribe(&sentences, &Vocabulary::new());
        assert_eq!(t.romaji, "neko ga suki desu.");
        assert!(t.furigana_html.starts_with("<ruby>猫<rt>ねこ</rt></ruby>"));
        assert_eq!(t.sentences.len(), 1);
        assert_eq!(t.sentences[0].text, "猫が好きです。");
    }

    #[test]
    fn test_vocabulary_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vocab.toml");
        std::fs::write(&path, "[glosses]\n\"猫\" = \"cat (pet)\"\n").unwrap();
        let vocabulary = load_vocabulary(&path).unwrap();

        let sentences = sentences_from_mecab(MECAB).unwrap();
        let t = transcribe(&sentences, &vocabulary);
        assert_eq!(t.sentences[0].tokens[0].meaning.as_deref(), Some("cat (pet)"));
        assert_eq!(
            t.sentences[0].tokens[1].meaning.as_deref(),
            Some("subject marker")
        );
    }

    #[test]
    fn test_annotate_json_shape() {
        let sentences = sentences_from_mecab(MECAB).unwrap();
        let t = transcribe(&sentences, &Vocabulary::new());
        let value = serde_json::to_value(&t).unwrap();
        assert_eq!(value["romaji"], "neko ga suki desu.");
        assert_eq!(value["sentences"][0]["tokens"][0]["surface"], "猫");
        assert!(value["sentences"][0]["tokens"][4].get("meaning").is_none());
    }
}
