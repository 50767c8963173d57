//! Character-level Unicode classification for Han text.

use unicode_normalization::UnicodeNormalization;

/// CJK Unified Ideographs, Extension A and Extension B. Compatibility
/// ideographs (U+F900..U+FAFF) are included because CC-CEDICT keys use a few.
pub fn is_han(c: char) -> bool {
    ('\u{4E00}'..='\u{9FFF}').contains(&c)
        || ('\u{3400}'..='\u{4DBF}').contains(&c)
        || ('\u{F900}'..='\u{FAFF}').contains(&c)
        || ('\u{20000}'..='\u{2A6DF}').contains(&c)
}

pub fn contains_han(s: &str) -> bool {
    s.chars().any(is_han)
}

/// Canonical decomposition (NFD), the form rule patterns are compiled in.
pub fn to_nfd(s: &str) -> String {
    s.nfd().collect()
}
