//! Line-oriented rule file parser.
//!
//! ```text
//! % comment
//! ::vowel:: = [aeiou]
//! focus -> replacement / left _ right
//! ```

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use regex::{Captures, Regex};
use unicode_normalization::UnicodeNormalization;

use super::rule::{Rule, RuleOrigin};
use super::{RuleError, RuleSource};

fn symbol_def_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(?P<symbol>::\w+::)\s*=\s*(?P<value>\S.*)$").expect("symbol regex is valid")
    })
}

fn symbol_use_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"::\w+::").expect("symbol regex is valid"))
}

fn rule_line_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"^(?P<focus>\S+)\s*->\s*(?P<repl>[^\s/]+)(?:\s*/\s*(?P<left>\S*?)\s*_\s*(?P<right>\S*))?$",
        )
        .expect("rule regex is valid")
    })
}

/// Parser state shared by all sources of one load: symbol definitions made
/// in an earlier source stay visible in later ones.
#[derive(Debug, Default)]
pub(super) struct Parser {
    symbols: HashMap<String, String>,
}

impl Parser {
    pub(super) fn parse_source(
        &mut self,
        source: RuleSource<'_>,
        rules: &mut Vec<Rule>,
    ) -> Result<(), RuleError> {
        let name: Arc<str> = Arc::from(source.name);
        for (i, raw) in source.content.lines().enumerate() {
            let line_no = i + 1;
            let malformed = |reason: String| RuleError::Malformed {
                origin: source.name.to_string(),
                line: line_no,
                reason,
            };

            let without_comment = raw.split('%').next().unwrap_or("");
            let line: String = without_comment.trim().nfd().collect();
            if line.is_empty() {
                continue;
            }

            if let Some(caps) = symbol_def_re().captures(&line) {
                let value = self.substitute(caps["value"].trim()).map_err(malformed)?;
                self.symbols.insert(caps["symbol"].to_string(), value);
                continue;
            }

            let line = self.substitute(&line).map_err(malformed)?;
            let caps = rule_line_re().captures(&line).ok_or_else(|| {
                malformed(format!(
                    "cannot parse {line:?}: expected `focus -> replacement / left _ right`"
                ))
            })?;
            let rule = build_rule(&caps).map_err(|e| malformed(e.to_string()))?;
            rules.push(rule.with_origin(RuleOrigin {
                name: Arc::clone(&name),
                line: line_no,
            }));
        }
        Ok(())
    }

    /// Replace every `::name::` with its definition.
    fn substitute(&self, text: &str) -> Result<String, String> {
        let mut undefined = None;
        let replaced = symbol_use_re().replace_all(text, |caps: &Captures<'_>| {
            match self.symbols.get(&caps[0]) {
                Some(value) => value.clone(),
                None => {
                    undefined.get_or_insert_with(|| caps[0].to_string());
                    String::new()
                }
            }
        });
        match undefined {
            Some(symbol) => Err(format!("undefined symbol {symbol}")),
            None => Ok(replaced.into_owned()),
        }
    }
}

fn build_rule(caps: &Captures<'_>) -> Result<Rule, RuleError> {
    let focus = zero_as_empty(&caps["focus"]);
    let mut replacement = zero_as_empty(&caps["repl"]).to_string();
    let left = caps.name("left").map_or("", |m| m.as_str()).replace('#', "^");
    let right = caps.name("right").map_or("", |m| m.as_str()).replace('#', "$");

    if replacement.is_empty() && defines_group(focus, "sw1") && defines_group(focus, "sw2") {
        // Metathesis: swap the two marked spans.
        replacement = "${sw2}${sw1}".to_string();
    }

    Rule::new(&left, focus, &right, &replacement)
}

/// A lone `0` stands for the empty string.
fn zero_as_empty(field: &str) -> &str {
    if field == "0" {
        ""
    } else {
        field
    }
}

fn defines_group(pattern: &str, name: &str) -> bool {
    pattern.contains(&format!("(?P<{name}>")) || pattern.contains(&format!("(?<{name}>"))
}
