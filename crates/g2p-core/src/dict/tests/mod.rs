mod proptest_tokenize;

use crate::dict::{DictEntry, TrieDictionary};

pub(super) fn entry(key: &str, pronunciation: &[&str]) -> DictEntry {
    DictEntry {
        key: key.to_string(),
        pronunciation: pronunciation.iter().map(|s| s.to_string()).collect(),
        gloss: String::new(),
    }
}

pub(super) fn sample_dict() -> TrieDictionary {
    TrieDictionary::build(vec![
        entry("你", &["ni3"]),
        entry("你好", &["ni3", "hao3"]),
        entry("好", &["hao3"]),
        entry("中国", &["Zhong1", "guo2"]),
        entry("中国人", &["Zhong1", "guo2", "ren2"]),
        entry("人", &["ren2"]),
        entry("北京", &["Bei3", "jing1"]),
    ])
    .unwrap()
}
