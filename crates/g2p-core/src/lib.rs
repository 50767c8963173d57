//! Han-script grapheme-to-phoneme conversion.
//!
//! Text is segmented against a pronunciation dictionary by greedy longest
//! match ([`dict`]), each word's romanized pronunciation is rewritten to IPA
//! by an ordered rule cascade ([`rules`]), and [`transliterator`] glues the
//! two together.

pub mod dict;
pub mod postprocess;
pub mod rules;
pub mod settings;
pub mod transliterator;
pub mod unicode;

pub use dict::{DictEntry, Dictionary, Token, TrieDictionary};
pub use rules::{RuleSet, RuleSource};
pub use settings::Settings;
pub use transliterator::{Segment, TransliterateOptions, Transliterator};
