use regex::{Captures, Regex};

use super::RuleError;

/// Where a group reference is read from at expansion time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GroupRef {
    Left(usize),
    Body(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Piece {
    Literal(String),
    Group(GroupRef),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum RawRef {
    Index(usize),
    Name(String),
}

/// A compiled replacement template.
///
/// `$N` and `${N}` refer to the N-th capture group counted across the left
/// context, focus and right context patterns in that order; `$0` is the whole
/// focus match. `${name}` refers to a named group. `$$` is a literal `$`.
/// References are resolved once, when the rule is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct Template {
    pieces: Vec<Piece>,
}

impl Template {
    /// Parse `text` and resolve its group references against the compiled
    /// left-context regex (if any) and the body regex `(focus)(?:right)`.
    pub(super) fn compile(
        text: &str,
        left: Option<&Regex>,
        body: &Regex,
    ) -> Result<Self, RuleError> {
        let mut pieces = Vec::new();
        let mut literal = String::new();
        let mut chars = text.char_indices().peekable();

        while let Some((i, ch)) = chars.next() {
            if ch != '$' {
                literal.push(ch);
                continue;
            }
            let raw = match chars.peek().map(|&(_, c)| c) {
                Some('$') => {
                    chars.next();
                    literal.push('$');
                    continue;
                }
                Some('{') => {
                    chars.next();
                    let mut name = String::new();
                    loop {
                        match chars.next() {
                            Some((_, '}')) => break,
                            Some((_, c)) => name.push(c),
                            None => {
                                return Err(RuleError::InvalidTemplate(format!(
                                    "unclosed `${{` at offset {i} in {text:?}"
                                )))
                            }
                        }
                    }
                    parse_ref(&name, text)?
                }
                Some(c) if c.is_ascii_digit() => {
                    let mut digits = String::new();
                    while let Some(&(_, c)) = chars.peek() {
                        if !c.is_ascii_digit() {
                            break;
                        }
                        digits.push(c);
                        chars.next();
                    }
                    parse_ref(&digits, text)?
                }
                _ => {
                    return Err(RuleError::InvalidTemplate(format!(
                        "dangling `$` at offset {i} in {text:?} (use `$$` for a literal dollar)"
                    )))
                }
            };
            if !literal.is_empty() {
                pieces.push(Piece::Literal(std::mem::take(&mut literal)));
            }
            pieces.push(Piece::Group(resolve(&raw, left, body)?));
        }
        if !literal.is_empty() {
            pieces.push(Piece::Literal(literal));
        }
        Ok(Self { pieces })
    }

    pub(super) fn expand(&self, left: Option<&Captures<'_>>, body: &Captures<'_>, out: &mut String) {
        for piece in &self.pieces {
            match piece {
                Piece::Literal(s) => out.push_str(s),
                Piece::Group(GroupRef::Left(i)) => {
                    if let Some(m) = left.and_then(|c| c.get(*i)) {
                        out.push_str(m.as_str());
                    }
                }
                Piece::Group(GroupRef::Body(i)) => {
                    if let Some(m) = body.get(*i) {
                        out.push_str(m.as_str());
                    }
                }
            }
        }
    }
}

fn parse_ref(s: &str, text: &str) -> Result<RawRef, RuleError> {
    if s.is_empty() {
        return Err(RuleError::InvalidTemplate(format!(
            "empty group reference in {text:?}"
        )));
    }
    if s.bytes().all(|b| b.is_ascii_digit()) {
        return s
            .parse()
            .map(RawRef::Index)
            .map_err(|_| RuleError::InvalidTemplate(format!("group index {s} out of range")));
    }
    if s.chars().all(|c| c.is_alphanumeric() || c == '_') {
        return Ok(RawRef::Name(s.to_string()));
    }
    Err(RuleError::InvalidTemplate(format!(
        "invalid group name {s:?} in {text:?}"
    )))
}

fn resolve(raw: &RawRef, left: Option<&Regex>, body: &Regex) -> Result<GroupRef, RuleError> {
    // Group 0 of each regex is the whole match; group 1 of the body wraps the focus.
    let left_groups = left.map_or(0, |re| re.captures_len() - 1);
    match raw {
        RawRef::Index(0) => Ok(GroupRef::Body(1)),
        RawRef::Index(k) if *k <= left_groups => Ok(GroupRef::Left(*k)),
        RawRef::Index(k) => match (k - left_groups).checked_add(1) {
            Some(i) if i < body.captures_len() => Ok(GroupRef::Body(i)),
            _ => Err(RuleError::InvalidTemplate(format!(
                "reference to undefined group ${k}"
            ))),
        },
        RawRef::Name(name) => {
            let position = |re: &Regex| re.capture_names().position(|n| n == Some(name.as_str()));
            if let Some(i) = left.and_then(position) {
                Ok(GroupRef::Left(i))
            } else if let Some(i) = position(body) {
                Ok(GroupRef::Body(i))
            } else {
                Err(RuleError::InvalidTemplate(format!(
                    "reference to undefined group ${{{name}}}"
                )))
            }
        }
    }
}
