//! Ordered context-sensitive rewrite rules.
//!
//! A `RuleSet` is loaded once from one or more rule sources and then applied
//! to romanized text. Rules run strictly in load order (source order, then
//! line order); each rule makes one full pass over the string before the next
//! rule starts.

pub mod builtin;
mod parse;
mod rule;
mod template;
#[cfg(test)]
mod tests;

use std::borrow::Cow;

use serde::Serialize;
use tracing::{debug, trace};

pub use rule::{Rule, RuleOrigin};

#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    #[error("{origin}:{line}: {reason}")]
    Malformed {
        origin: String,
        line: usize,
        reason: String,
    },
    #[error("invalid pattern: {0}")]
    InvalidPattern(String),
    #[error("invalid replacement: {0}")]
    InvalidTemplate(String),
}

/// Rule file contents plus a name used in error messages.
#[derive(Debug, Clone, Copy)]
pub struct RuleSource<'a> {
    pub name: &'a str,
    pub content: &'a str,
}

impl<'a> RuleSource<'a> {
    pub fn new(name: &'a str, content: &'a str) -> Self {
        Self { name, content }
    }
}

/// One rule firing, as reported by [`RuleSet::explain`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleStep {
    pub index: usize,
    pub rule: String,
    pub origin: Option<String>,
    pub before: String,
    pub after: String,
}

#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Parse `sources` in order and concatenate their rules.
    ///
    /// Fails on the first malformed line, reporting its source name and
    /// 1-based line number.
    pub fn load<'a>(sources: impl IntoIterator<Item = RuleSource<'a>>) -> Result<Self, RuleError> {
        let mut parser = parse::Parser::default();
        let mut rules = Vec::new();
        for source in sources {
            let before = rules.len();
            parser.parse_source(source, &mut rules)?;
            debug!(
                source = source.name,
                rules = rules.len() - before,
                "loaded rule source"
            );
        }
        Ok(Self { rules })
    }

    /// Parse a single source.
    pub fn parse(name: &str, content: &str) -> Result<Self, RuleError> {
        Self::load([RuleSource::new(name, content)])
    }

    pub fn from_rules(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// Append `other`'s rules after this set's rules.
    pub fn chain(mut self, other: RuleSet) -> Self {
        self.rules.extend(other.rules);
        self
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Run every rule over `input` in order. Never fails; positions no rule
    /// matches are left as they are.
    pub fn apply(&self, input: &str) -> String {
        let mut current = input.to_string();
        for (index, rule) in self.rules.iter().enumerate() {
            let next = match rule.rewrite(&current) {
                Cow::Borrowed(_) => continue,
                Cow::Owned(next) => next,
            };
            trace!(index, rule = %rule, before = %current, after = %next, "rule fired");
            current = next;
        }
        current
    }

    /// Like [`apply`](Self::apply), but records every rule that changed the
    /// string.
    pub fn explain(&self, input: &str) -> Vec<RuleStep> {
        let mut steps = Vec::new();
        let mut current = input.to_string();
        for (index, rule) in self.rules.iter().enumerate() {
            let next = match rule.rewrite(&current) {
                Cow::Borrowed(_) => continue,
                Cow::Owned(next) => next,
            };
            if next != current {
                steps.push(RuleStep {
                    index,
                    rule: rule.to_string(),
                    origin: rule.origin().map(|o| o.to_string()),
                    before: current.clone(),
                    after: next.clone(),
                });
            }
            current = next;
        }
        steps
    }
}
