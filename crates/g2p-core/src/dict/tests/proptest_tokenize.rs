//! Property-based tests for longest-match tokenization.

use proptest::prelude::*;

use super::entry;
use crate::dict::{Dictionary, TrieDictionary};

// A small alphabet keeps dictionary hits frequent.
fn arb_text() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(vec!['a', 'b', 'c', '中', '国', '!']), 0..40)
        .prop_map(|chars| chars.into_iter().collect())
}

fn arb_keys() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(
        prop::collection::vec(prop::sample::select(vec!['a', 'b', '中', '国']), 1..4)
            .prop_map(|chars| chars.into_iter().collect::<String>()),
        0..12,
    )
}

fn build(keys: &[String]) -> TrieDictionary {
    TrieDictionary::build(keys.iter().map(|k| entry(k, &[k.as_str()]))).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn tokenize_is_lossless(keys in arb_keys(), text in arb_text()) {
        let dict = build(&keys);
        let joined: String = dict.tokenize(&text).iter().map(|t| t.as_str()).collect();
        prop_assert_eq!(joined, text);
    }

    #[test]
    fn tokenize_is_deterministic(keys in arb_keys(), text in arb_text()) {
        let dict = build(&keys);
        let first = dict.tokenize(&text);
        let second = dict.tokenize(&text);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn words_are_longest_available(keys in arb_keys(), text in arb_text()) {
        let dict = build(&keys);
        let mut offset = 0;
        for token in dict.tokenize(&text) {
            let rest = &text[offset..];
            let longest = dict
                .common_prefix_search(rest)
                .last()
                .map(|e| e.key.len());
            match token.entry() {
                Some(e) => prop_assert_eq!(Some(e.key.len()), longest),
                None => {
                    prop_assert_eq!(longest, None);
                    prop_assert_eq!(token.as_str().chars().count(), 1);
                }
            }
            offset += token.as_str().len();
        }
    }
}
