//! Character-table rewrites applied after rule application.

use std::borrow::Cow;

/// Full-width punctuation and its ASCII equivalent.
const PUNCTUATION: &[(char, char)] = &[
    ('\u{FF0C}', ','),
    ('\u{FF01}', '!'),
    ('\u{FF1F}', '?'),
    ('\u{FF1B}', ';'),
    ('\u{FF1A}', ':'),
    ('\u{FF08}', '('),
    ('\u{FF09}', ')'),
    ('\u{FF3B}', '['),
    ('\u{FF3D}', ']'),
    ('\u{3010}', '['),
    ('\u{3011}', ']'),
];

/// Tie-bar affricates and their precomposed ligature.
const LIGATURES: &[(&str, &str)] = &[
    ("t\u{361}s", "ʦ"),
    ("t\u{361}ʃ", "ʧ"),
    ("t\u{361}ɕ", "ʨ"),
    ("d\u{361}z", "ʣ"),
    ("d\u{361}ʒ", "ʤ"),
    ("d\u{361}ʑ", "ʥ"),
];

fn ascii_punctuation(c: char) -> Option<char> {
    PUNCTUATION
        .iter()
        .find(|(from, _)| *from == c)
        .map(|(_, to)| *to)
}

/// Map full-width punctuation to ASCII. Other characters are kept as is.
pub fn normalize_punctuation(text: &str) -> Cow<'_, str> {
    if !text.chars().any(|c| ascii_punctuation(c).is_some()) {
        return Cow::Borrowed(text);
    }
    Cow::Owned(
        text.chars()
            .map(|c| ascii_punctuation(c).unwrap_or(c))
            .collect(),
    )
}

/// Replace tie-bar affricates with single-codepoint ligatures.
pub fn ligaturize(text: &str) -> Cow<'_, str> {
    if !text.contains('\u{361}') {
        return Cow::Borrowed(text);
    }
    let mut out = text.to_string();
    for (from, to) in LIGATURES {
        if out.contains(*from) {
            out = out.replace(*from, to);
        }
    }
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_punctuation() {
        assert_eq!(normalize_punctuation("你好，世界！"), "你好,世界!");
        assert_eq!(normalize_punctuation("【注】（一）"), "[注](一)");
        assert_eq!(normalize_punctuation("？；：［］"), "?;:[]");
    }

    #[test]
    fn test_normalize_punctuation_untouched() {
        assert!(matches!(normalize_punctuation("abc。"), Cow::Borrowed("abc。")));
        assert_eq!(normalize_punctuation(""), "");
    }

    #[test]
    fn test_ligaturize() {
        assert_eq!(ligaturize("t\u{361}sa"), "ʦa");
        assert_eq!(ligaturize("t\u{361}ɕi d\u{361}ʒa"), "ʨi ʤa");
        assert_eq!(ligaturize("d\u{361}zd\u{361}ʑt\u{361}ʃ"), "ʣʥʧ");
    }

    #[test]
    fn test_ligaturize_leaves_plain_sequences() {
        assert!(matches!(ligaturize("tsa"), Cow::Borrowed("tsa")));
        // a tie bar on some other pair stays
        assert_eq!(ligaturize("k\u{361}p"), "k\u{361}p");
    }
}
