//! Lexical dictionary and longest-match tokenizer.
//!
//! `TrieDictionary` stores key → entry mappings in a character trie.
//! `Dictionary::tokenize` segments unspaced text (e.g. Han characters) into
//! dictionary words and single-character literals.

mod entry;
#[cfg(test)]
mod tests;
mod trie_dict;

pub use entry::DictEntry;
pub use trie_dict::{DictStats, TrieDictionary};

#[derive(Debug, thiserror::Error)]
pub enum DictError {
    #[error("invalid entry {key:?}: {reason}")]
    InvalidEntry { key: String, reason: String },
}

/// One unit of tokenizer output.
///
/// A `Word` borrows the matched dictionary entry; its key is exactly the
/// input span it covers. A `Literal` is a single character with no entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    Word(&'a DictEntry),
    Literal(&'a str),
}

impl<'a> Token<'a> {
    /// The input span covered by this token.
    pub fn as_str(&self) -> &'a str {
        match self {
            Token::Word(entry) => entry.key.as_str(),
            Token::Literal(s) => s,
        }
    }

    pub fn entry(&self) -> Option<&'a DictEntry> {
        match self {
            Token::Word(entry) => Some(entry),
            Token::Literal(_) => None,
        }
    }

    pub fn is_word(&self) -> bool {
        matches!(self, Token::Word(_))
    }
}

pub trait Dictionary: Send + Sync {
    /// Exact-match lookup.
    fn get(&self, key: &str) -> Option<&DictEntry>;

    /// The entry with the longest key that is a prefix of `text`.
    fn longest_match(&self, text: &str) -> Option<&DictEntry>;

    /// All entries whose key is a prefix of `text`, shortest first.
    fn common_prefix_search(&self, text: &str) -> Vec<&DictEntry>;

    fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Greedy longest-match segmentation.
    ///
    /// Never fails: a position with no matching key yields a one-character
    /// `Literal`. Concatenating `as_str()` of the result reproduces `text`.
    fn tokenize<'a>(&'a self, text: &'a str) -> Vec<Token<'a>> {
        let mut tokens = Vec::new();
        let mut rest = text;
        while let Some(ch) = rest.chars().next() {
            let (token, len) = match self.longest_match(rest) {
                Some(entry) => (Token::Word(entry), entry.key.len()),
                None => {
                    let len = ch.len_utf8();
                    (Token::Literal(&rest[..len]), len)
                }
            };
            tokens.push(token);
            rest = &rest[len..];
        }
        tokens
    }
}
