//! Rule tables compiled into the crate.
//!
//! `pinyin-to-ipa.txt` converts numbered pinyin to IPA and leaves the tone
//! digits in place; one of `tones.txt` / `toneless.txt` must follow it.

use super::{RuleError, RuleSet, RuleSource};

pub const PINYIN_TO_IPA: &str = include_str!("data/pinyin-to-ipa.txt");
pub const TONES: &str = include_str!("data/tones.txt");
pub const TONELESS: &str = include_str!("data/toneless.txt");

const TABLES: &[(&str, &str)] = &[
    ("pinyin-to-ipa.txt", PINYIN_TO_IPA),
    ("tones.txt", TONES),
    ("toneless.txt", TONELESS),
];

/// Names accepted by [`source`].
pub fn names() -> impl Iterator<Item = &'static str> {
    TABLES.iter().map(|(name, _)| *name)
}

/// Raw text of an embedded table.
pub fn source(name: &str) -> Option<&'static str> {
    TABLES
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, content)| *content)
}

/// The two sources making up the pinyin pipeline, in application order.
pub fn pinyin_sources(tones: bool) -> [RuleSource<'static>; 2] {
    let tail = if tones {
        RuleSource::new("tones.txt", TONES)
    } else {
        RuleSource::new("toneless.txt", TONELESS)
    };
    [RuleSource::new("pinyin-to-ipa.txt", PINYIN_TO_IPA), tail]
}

/// Build the numbered-pinyin → IPA rule set.
///
/// With `tones`, tone digits become Chao tone letters; otherwise they are
/// dropped.
pub fn pinyin(tones: bool) -> Result<RuleSet, RuleError> {
    RuleSet::load(pinyin_sources(tones))
}
