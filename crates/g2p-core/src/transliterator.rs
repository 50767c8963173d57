//! Text → IPA: dictionary tokenization, then rule rewriting per word.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, debug_span};

use crate::dict::{DictEntry, DictError, Dictionary, Token, TrieDictionary};
use crate::postprocess;
use crate::rules::{builtin, RuleError, RuleSet, RuleSource};
use crate::settings::{OutputSettings, Settings};
use crate::unicode;

#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("dictionary: {0}")]
    Dict(#[from] DictError),
    #[error("rules: {0}")]
    Rules(#[from] RuleError),
}

/// Output switches that can also be overridden per call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransliterateOptions {
    /// Map full-width punctuation in unmatched text to ASCII.
    pub normalize_punctuation: bool,
    /// Replace tie-bar affricates with ligatures.
    pub ligatures: bool,
}

impl From<&OutputSettings> for TransliterateOptions {
    fn from(s: &OutputSettings) -> Self {
        Self {
            normalize_punctuation: s.normalize_punctuation,
            ligatures: s.ligatures,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentKind {
    /// Matched a dictionary key.
    Word,
    /// A Han character with no dictionary entry; passed through.
    UnknownHan,
    /// Anything else without an entry (punctuation, Latin, spaces).
    Other,
}

/// One token of input and what it became.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    pub text: String,
    pub kind: SegmentKind,
    /// Lowercased, joined pronunciation fed to the rules (words only).
    pub pronunciation: Option<String>,
    pub ipa: String,
}

/// Composes a dictionary and a rule set. Both are immutable and shared, so a
/// `Transliterator` can be cloned cheaply and used from several threads.
#[derive(Clone)]
pub struct Transliterator {
    dict: Arc<dyn Dictionary>,
    rules: Arc<RuleSet>,
    options: TransliterateOptions,
}

impl std::fmt::Debug for Transliterator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transliterator")
            .field("rules", &self.rules.len())
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl Transliterator {
    pub fn new(dict: Arc<dyn Dictionary>, rules: Arc<RuleSet>) -> Self {
        Self {
            dict,
            rules,
            options: TransliterateOptions::default(),
        }
    }

    pub fn with_options(mut self, options: TransliterateOptions) -> Self {
        self.options = options;
        self
    }

    /// Build the dictionary from `entries` and the built-in pinyin rules
    /// (tone variant chosen by `settings`), followed by `extra_rules`.
    ///
    /// The extra sources are loaded together with the built-ins, so they can
    /// use the built-in symbols.
    pub fn build<'a>(
        entries: impl IntoIterator<Item = DictEntry>,
        extra_rules: impl IntoIterator<Item = RuleSource<'a>>,
        settings: &Settings,
    ) -> Result<Self, BuildError> {
        let dict = TrieDictionary::build(entries)?;
        let rules = RuleSet::load(
            builtin::pinyin_sources(settings.rules.tones)
                .into_iter()
                .chain(extra_rules),
        )?;
        debug!(
            entries = dict.len(),
            rules = rules.len(),
            tones = settings.rules.tones,
            "transliterator built"
        );
        Ok(Self::new(Arc::new(dict), Arc::new(rules))
            .with_options(TransliterateOptions::from(&settings.output)))
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn options(&self) -> TransliterateOptions {
        self.options
    }

    pub fn transliterate(&self, text: &str) -> String {
        self.transliterate_with(text, self.options)
    }

    pub fn transliterate_with(&self, text: &str, options: TransliterateOptions) -> String {
        let _span = debug_span!("transliterate", chars = text.chars().count()).entered();
        let mut out = String::with_capacity(text.len() * 2);
        for token in self.dict.tokenize(text) {
            out.push_str(&self.token_ipa(&token, options));
        }
        out
    }

    /// Per-token breakdown of [`transliterate`](Self::transliterate).
    /// Concatenating the `ipa` fields gives the same string.
    pub fn segments(&self, text: &str) -> Vec<Segment> {
        self.dict
            .tokenize(text)
            .iter()
            .map(|token| {
                let surface = token.as_str();
                let kind = match token {
                    Token::Word(_) => SegmentKind::Word,
                    Token::Literal(s) if unicode::contains_han(s) => SegmentKind::UnknownHan,
                    Token::Literal(_) => SegmentKind::Other,
                };
                Segment {
                    text: surface.to_string(),
                    kind,
                    pronunciation: token.entry().map(rule_input),
                    ipa: self.token_ipa(token, self.options),
                }
            })
            .collect()
    }

    fn token_ipa(&self, token: &Token<'_>, options: TransliterateOptions) -> String {
        let ipa = match token {
            Token::Word(entry) => self.rules.apply(&rule_input(entry)).replace(',', ""),
            Token::Literal(s) if options.normalize_punctuation => {
                postprocess::normalize_punctuation(s).into_owned()
            }
            Token::Literal(s) => s.to_string(),
        };
        if options.ligatures {
            postprocess::ligaturize(&ipa).into_owned()
        } else {
            ipa
        }
    }
}

/// Joined, lowercased, NFD pronunciation: the form rule files are written in.
fn rule_input(entry: &DictEntry) -> String {
    unicode::to_nfd(&entry.joined_pronunciation().to_lowercase())
}
