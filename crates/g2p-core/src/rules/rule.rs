use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use regex::Regex;

use super::template::Template;
use super::RuleError;

/// Source location a rule was parsed from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleOrigin {
    pub name: Arc<str>,
    pub line: usize,
}

impl fmt::Display for RuleOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.name, self.line)
    }
}

/// A context-sensitive rewrite: replace `focus` with `replacement` when it is
/// preceded by `left` and followed by `right`.
///
/// Patterns use `regex` syntax. An empty context pattern always matches.
/// All patterns are compiled once, in [`Rule::new`].
#[derive(Debug, Clone)]
pub struct Rule {
    left_src: String,
    focus_src: String,
    right_src: String,
    replacement_src: String,
    /// `(?:left)\z`, tested against the text before the focus.
    left: Option<Regex>,
    /// `(focus)(?:right)`; group 1 is the span being replaced.
    body: Regex,
    template: Template,
    origin: Option<RuleOrigin>,
}

impl Rule {
    pub fn new(left: &str, focus: &str, right: &str, replacement: &str) -> Result<Self, RuleError> {
        let left_re = if left.is_empty() {
            None
        } else {
            Some(compile(&format!("(?:{left})\\z"))?)
        };
        let body = compile(&format!("({focus})(?:{right})"))?;
        let template = Template::compile(replacement, left_re.as_ref(), &body)?;
        Ok(Self {
            left_src: left.to_string(),
            focus_src: focus.to_string(),
            right_src: right.to_string(),
            replacement_src: replacement.to_string(),
            left: left_re,
            body,
            template,
            origin: None,
        })
    }

    pub(super) fn with_origin(mut self, origin: RuleOrigin) -> Self {
        self.origin = Some(origin);
        self
    }

    pub fn origin(&self) -> Option<&RuleOrigin> {
        self.origin.as_ref()
    }

    pub fn left(&self) -> &str {
        &self.left_src
    }

    pub fn focus(&self) -> &str {
        &self.focus_src
    }

    pub fn right(&self) -> &str {
        &self.right_src
    }

    pub fn replacement(&self) -> &str {
        &self.replacement_src
    }

    /// One left-to-right pass of this rule over `text`.
    ///
    /// Every match, including its context checks, is found in `text` as it
    /// was before the pass; replaced spans are never rescanned. Returns
    /// `Cow::Borrowed` when the rule did not fire.
    pub fn rewrite<'t>(&self, text: &'t str) -> Cow<'t, str> {
        let mut out = String::new();
        let mut copied = 0;
        let mut at = 0;
        let mut fired = false;

        while at <= text.len() {
            let Some(caps) = self.body.captures_at(text, at) else {
                break;
            };
            let Some(focus) = caps.get(1) else {
                break;
            };
            let start = focus.start();
            let left_caps = match &self.left {
                None => None,
                Some(re) => match re.captures(&text[..start]) {
                    Some(c) => Some(c),
                    None => {
                        at = next_boundary(text, start);
                        continue;
                    }
                },
            };

            out.push_str(&text[copied..start]);
            self.template.expand(left_caps.as_ref(), &caps, &mut out);
            copied = focus.end();
            fired = true;
            at = if focus.end() > start {
                focus.end()
            } else {
                next_boundary(text, start)
            };
        }

        if !fired {
            return Cow::Borrowed(text);
        }
        out.push_str(&text[copied..]);
        Cow::Owned(out)
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let show = |s: &str| if s.is_empty() { "0".to_string() } else { s.to_string() };
        write!(
            f,
            "{} -> {} / {} _ {}",
            show(&self.focus_src),
            show(&self.replacement_src),
            self.left_src,
            self.right_src
        )
    }
}

fn compile(pattern: &str) -> Result<Regex, RuleError> {
    Regex::new(pattern).map_err(|e| RuleError::InvalidPattern(e.to_string()))
}

/// Byte index just past the character at `i`, or past the end when `i` is
/// the end of `text`.
fn next_boundary(text: &str, i: usize) -> usize {
    text[i..]
        .chars()
        .next()
        .map_or(text.len() + 1, |c| i + c.len_utf8())
}
