mod builtin;
mod parse;

use super::{Rule, RuleSet};

/// Shorthand for a rule set built directly from `(left, focus, right, replacement)`.
pub(super) fn rules(specs: &[(&str, &str, &str, &str)]) -> RuleSet {
    RuleSet::from_rules(
        specs
            .iter()
            .map(|(l, f, r, rep)| Rule::new(l, f, r, rep).unwrap())
            .collect(),
    )
}
