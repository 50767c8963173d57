use crate::rules::{RuleError, RuleSet, RuleSource};

#[test]
fn test_parse_basic_file() {
    let text = "\
% comment line
a -> b / x _ y

c -> d % trailing comment
";
    let set = RuleSet::parse("basic.txt", text).unwrap();
    assert_eq!(set.len(), 2);
    assert_eq!(set.rules()[0].left(), "x");
    assert_eq!(set.rules()[0].focus(), "a");
    assert_eq!(set.rules()[0].right(), "y");
    assert_eq!(set.rules()[0].replacement(), "b");
    assert_eq!(set.rules()[1].left(), "");
    assert_eq!(set.apply("xay ca"), "xby da");
}

#[test]
fn test_origin_line_numbers() {
    let set = RuleSet::parse("f.txt", "\n% c\na -> b\n\nb -> c / _ d\n").unwrap();
    let origins: Vec<String> = set
        .rules()
        .iter()
        .map(|r| r.origin().unwrap().to_string())
        .collect();
    assert_eq!(origins, vec!["f.txt:3", "f.txt:5"]);
}

#[test]
fn test_word_boundaries() {
    let initial = RuleSet::parse("t", "a -> b / # _").unwrap();
    assert_eq!(initial.apply("aaa"), "baa");
    let last = RuleSet::parse("t", "a -> b / _ #").unwrap();
    assert_eq!(last.apply("aaa"), "aab");
}

#[test]
fn test_zero_means_empty() {
    let set = RuleSet::parse("t", "h -> 0 / _ #\n0 -> ə / t _ k").unwrap();
    assert_eq!(set.apply("tkah"), "təka");
}

#[test]
fn test_symbols() {
    let text = "\
::vowel:: = [aeiou]
::stop:: = [ptk]
::stop:: -> b / ::vowel:: _ ::vowel::
";
    let set = RuleSet::parse("t", text).unwrap();
    assert_eq!(set.apply("apa ata pa"), "aba aba pa");
}

#[test]
fn test_symbol_defined_from_symbol() {
    let text = "\
::v:: = [aeiou]
::vv:: = ::v::::v::
::vv:: -> V
";
    let set = RuleSet::parse("t", text).unwrap();
    assert_eq!(set.apply("taak"), "tVk");
}

#[test]
fn test_symbols_shared_across_sources() {
    let set = RuleSet::load([
        RuleSource::new("defs.txt", "::v:: = [ae]\n"),
        RuleSource::new("rules.txt", "::v:: -> V"),
    ])
    .unwrap();
    assert_eq!(set.apply("tea"), "tVV");
}

#[test]
fn test_sources_concatenate_in_order() {
    let set = RuleSet::load([
        RuleSource::new("one.txt", "a -> b"),
        RuleSource::new("two.txt", "b -> c"),
    ])
    .unwrap();
    assert_eq!(set.apply("a"), "c");

    let set = RuleSet::load([
        RuleSource::new("two.txt", "b -> c"),
        RuleSource::new("one.txt", "a -> b"),
    ])
    .unwrap();
    assert_eq!(set.apply("a"), "b");
    assert_eq!(&*set.rules()[1].origin().unwrap().name, "one.txt");
}

#[test]
fn test_metathesis() {
    let set = RuleSet::parse("t", "(?P<sw1>s)(?P<sw2>k) -> 0 / _ #").unwrap();
    assert_eq!(set.apply("ask"), "aks");
    assert_eq!(set.apply("aska"), "aska");
}

#[test]
fn test_capture_template_in_file() {
    let set = RuleSet::parse("t", "([aeiou])h -> $1$1").unwrap();
    assert_eq!(set.apply("bah"), "baa");
}

#[test]
fn test_rule_text_is_nfd_normalized() {
    // precomposed é in the rule file matches decomposed input
    let set = RuleSet::parse("t", "\u{e9} -> e").unwrap();
    assert_eq!(set.apply("cafe\u{301}"), "cafe");
}

#[test]
fn test_malformed_line_reports_location() {
    let err = RuleSet::load([
        RuleSource::new("ok.txt", "a -> b"),
        RuleSource::new("bad.txt", "% header\n\nnot a rule\n"),
    ])
    .unwrap_err();
    match &err {
        RuleError::Malformed { origin, line, .. } => {
            assert_eq!(origin, "bad.txt");
            assert_eq!(*line, 3);
        }
        other => panic!("expected Malformed, got {other:?}"),
    }
    assert!(err.to_string().starts_with("bad.txt:3:"));
}

#[test]
fn test_bad_regex_reports_location() {
    let err = RuleSet::parse("r.txt", "a -> b\n(a -> b").unwrap_err();
    assert!(matches!(err, RuleError::Malformed { line: 2, .. }));
}

#[test]
fn test_undefined_group_fails_at_load() {
    let err = RuleSet::parse("r.txt", "a -> $1").unwrap_err();
    assert!(matches!(err, RuleError::Malformed { line: 1, .. }));
}

#[test]
fn test_huge_group_index_is_malformed() {
    let err = RuleSet::parse("r.txt", "a -> $18446744073709551615").unwrap_err();
    assert!(matches!(err, RuleError::Malformed { line: 1, .. }));
    let err = RuleSet::parse("r.txt", "a -> ${18446744073709551615} / (x) _").unwrap_err();
    assert!(matches!(err, RuleError::Malformed { line: 1, .. }));
}

#[test]
fn test_environment_without_spaces() {
    let set = RuleSet::parse("t", "a->b/x_y").unwrap();
    let rule = &set.rules()[0];
    assert_eq!(rule.focus(), "a");
    assert_eq!(rule.replacement(), "b");
    assert_eq!(rule.left(), "x");
    assert_eq!(rule.right(), "y");
    assert_eq!(set.apply("xay za"), "xby za");

    let set = RuleSet::parse("t", "a -> b/x_y").unwrap();
    assert_eq!(set.apply("xay za"), "xby za");
}

#[test]
fn test_slash_without_environment_is_malformed() {
    let err = RuleSet::parse("r.txt", "a -> b/c").unwrap_err();
    assert!(matches!(err, RuleError::Malformed { line: 1, .. }));
}

#[test]
fn test_undefined_symbol() {
    let err = RuleSet::parse("r.txt", "::nope:: -> x").unwrap_err();
    match err {
        RuleError::Malformed { reason, .. } => assert!(reason.contains("::nope::")),
        other => panic!("expected Malformed, got {other:?}"),
    }
}

#[test]
fn test_missing_replacement() {
    assert!(RuleSet::parse("r.txt", "a -> / x _").is_err());
    assert!(RuleSet::parse("r.txt", "a b").is_err());
}

#[test]
fn test_empty_source() {
    let set = RuleSet::parse("empty.txt", "% nothing here\n\n").unwrap();
    assert!(set.is_empty());
}

#[test]
fn test_display_round_trips_fields() {
    let set = RuleSet::parse("t", "h -> 0 / x _ #").unwrap();
    assert_eq!(set.rules()[0].to_string(), "h -> 0 / x _ $");
}
