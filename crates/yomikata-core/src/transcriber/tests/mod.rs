
use crate::token::MorphToken;

/// 猫が好きです。 as an English-tagging analyzer would return it.
pub(super) fn neko_tokens() -> Vec<MorphToken> {
    vec![
        MorphToken::new("猫", "ねこ", "noun"),
        MorphToken::new("が", "が", "particle"),
        MorphToken::new("好き", "すき", "adjective"),
        MorphToken::new("です", "です", "aux"),
    ]
}

/// Checks that `html` is one or more `<ruby>…<rt>…</rt></ruby>` groups with
/// nothing in between.
pub(super) fn is_ruby_sequence(html: &str) -> bool {
    let mut rest = html;
    if rest.is_empty() {
        return false;
    }
    while !rest.is_empty() {
        let Some(after_open) = rest.strip_prefix("<ruby>") else {
            return false;
        };
        let Some(rt_at) = after_open.find("<rt>") else {
            return false;
        };
        let after_rt = &after_open[rt_at + "<rt>".len()..];
        let Some(close_at) = after_rt.find("</rt></ruby>") else {
            return false;
        };
        let base = &after_open[..rt_at];
        let reading = &after_rt[..close_at];
        if base.contains('<') || reading.contains('<') || reading.is_empty() {
            return false;
        }
        rest = &after_rt[close_at + "</rt></ruby>".len()..];
    }
    true
}

#[test]
fn test_is_ruby_sequence() {
    assert!(is_ruby_sequence("<ruby>猫<rt>ねこ</rt></ruby>"));
    assert!(is_ruby_sequence(
        "<ruby>食<rt>た</rt></ruby><ruby>べる<rt>&nbsp;</rt></ruby>"
    ));
    assert!(!is_ruby_sequence(""));
    assert!(!is_ruby_sequence("猫<ruby>猫<rt>ねこ</rt></ruby>"));
    assert!(!is_ruby_sequence("<ruby>猫<rt>ねこ</rt></ruby>x"));
}
