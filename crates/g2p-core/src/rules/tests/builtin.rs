use crate::rules::builtin;
use crate::rules::RuleSet;

fn toneless() -> RuleSet {
    builtin::pinyin(false).unwrap()
}

#[test]
fn test_all_tables_parse() {
    for name in builtin::names() {
        let text = builtin::source(name).unwrap();
        RuleSet::parse(name, text).unwrap_or_else(|e| panic!("{name}: {e}"));
    }
    assert!(builtin::source("missing.txt").is_none());
}

#[test]
fn test_tone_tables_are_last() {
    let with_tones = builtin::pinyin(true).unwrap();
    let last = with_tones.rules().last().unwrap();
    assert_eq!(&*last.origin().unwrap().name, "tones.txt");
    let without = toneless();
    let last = without.rules().last().unwrap();
    assert_eq!(&*last.origin().unwrap().name, "toneless.txt");
}

#[test]
fn test_common_syllables() {
    let set = toneless();
    let cases = [
        ("ni3hao3", "nixau\u{32f}"),
        ("zhong1guo2", "ʈʂʊŋkwo"),
        ("bei3jing1", "pei\u{32f}tɕiŋ"),
        ("ren2", "ʐən"),
        ("ge4", "kɤ"),
        ("e4", "ɤ"),
        ("tian1", "tʰjɛn"),
        ("jiong3", "tɕjʊŋ"),
        ("gui4", "kwei\u{32f}"),
        ("liu2", "ljou\u{32f}"),
        ("lun2", "lwən"),
    ];
    for (pinyin, ipa) in cases {
        assert_eq!(set.apply(pinyin), ipa, "pinyin={pinyin}");
    }
}

#[test]
fn test_zero_initial_syllables() {
    let set = toneless();
    let cases = [
        ("yi1", "i"),
        ("you3", "jou\u{32f}"),
        ("yuan2", "ɥɛn"),
        ("wu3", "u"),
        ("wo3", "wo"),
        ("wei4", "wei\u{32f}"),
        ("er4", "ɚ"),
    ];
    for (pinyin, ipa) in cases {
        assert_eq!(set.apply(pinyin), ipa, "pinyin={pinyin}");
    }
}

#[test]
fn test_punctuation_syllable_is_a_boundary() {
    let set = toneless();
    assert_eq!(set.apply("yi1,er4"), "i,ɚ");
    assert_eq!(set.apply("yi1,e4"), "i,ɤ");
    assert_eq!(set.apply("hao3,ba5"), "xau\u{32f},pa");
}

#[test]
fn test_umlaut_spellings() {
    let set = toneless();
    assert_eq!(set.apply("nu:3"), "ny");
    assert_eq!(set.apply("lv4"), "ly");
    assert_eq!(set.apply("qu4"), "tɕʰy");
    assert_eq!(set.apply("xue2"), "ɕɥe");
}

#[test]
fn test_apical_vowels() {
    let set = toneless();
    assert_eq!(set.apply("shi4"), "ʂɻ\u{329}");
    assert_eq!(set.apply("zi4"), "tsɹ\u{329}");
    assert_eq!(set.apply("ci2"), "tsʰɹ\u{329}");
    // i after other initials stays i
    assert_eq!(set.apply("ji1"), "tɕi");
}

#[test]
fn test_erhua() {
    assert_eq!(toneless().apply("na3r5"), "naɚ");
}

#[test]
fn test_tone_letters() {
    let set = builtin::pinyin(true).unwrap();
    assert_eq!(set.apply("ma1ma5"), "ma˥ma");
    assert_eq!(set.apply("ni3hao3"), "ni˨˩˦xau\u{32f}˨˩˦");
    assert_eq!(set.apply("ren2"), "ʐən˧˥");
    assert_eq!(set.apply("da4"), "ta˥˩");
}

#[test]
fn test_explain_shows_cascade() {
    let steps = toneless().explain("hao3");
    let origins: Vec<&str> = steps.iter().filter_map(|s| s.origin.as_deref()).collect();
    assert_eq!(steps.len(), 3, "{steps:?}");
    assert!(origins[0].starts_with("pinyin-to-ipa.txt:"));
    assert!(origins[2].starts_with("toneless.txt:"));
    assert_eq!(steps[0].after, "xao3");
    assert_eq!(steps[2].after, "xau\u{32f}");
}
