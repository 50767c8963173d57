use std::collections::BTreeMap;

use tracing::debug;

use super::{DictEntry, DictError, Dictionary};

#[derive(Debug, Default)]
struct Node {
    children: BTreeMap<char, Node>,
    entry: Option<DictEntry>,
}

/// Character trie over dictionary keys.
///
/// Built once from the full entry list and read-only afterwards, so a shared
/// reference can serve any number of concurrent `tokenize` calls.
#[derive(Debug, Default)]
pub struct TrieDictionary {
    root: Node,
    len: usize,
    node_count: usize,
    max_key_chars: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DictStats {
    pub entries: usize,
    pub nodes: usize,
    pub max_key_chars: usize,
}

impl TrieDictionary {
    /// Build a trie from `entries`.
    ///
    /// Fails on the first entry with an empty key. When a key occurs more than
    /// once the later entry replaces the earlier one.
    pub fn build(entries: impl IntoIterator<Item = DictEntry>) -> Result<Self, DictError> {
        let mut dict = Self::default();
        let mut replaced = 0usize;
        for entry in entries {
            entry.validate()?;
            if dict.insert(entry) {
                replaced += 1;
            }
        }
        debug!(
            entries = dict.len,
            nodes = dict.node_count,
            replaced,
            "built trie dictionary"
        );
        Ok(dict)
    }

    /// Returns true if an existing entry was replaced.
    fn insert(&mut self, entry: DictEntry) -> bool {
        let mut node = &mut self.root;
        let mut depth = 0usize;
        let mut created = 0usize;
        for ch in entry.key.chars() {
            depth += 1;
            node = node.children.entry(ch).or_insert_with(|| {
                created += 1;
                Node::default()
            });
        }
        self.node_count += created;
        self.max_key_chars = self.max_key_chars.max(depth);
        let replaced = node.entry.replace(entry).is_some();
        if !replaced {
            self.len += 1;
        }
        replaced
    }

    fn node_for(&self, key: &str) -> Option<&Node> {
        key.chars()
            .try_fold(&self.root, |node, ch| node.children.get(&ch))
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Iterate over all entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = &DictEntry> + '_ {
        let mut stack = vec![&self.root];
        std::iter::from_fn(move || {
            while let Some(node) = stack.pop() {
                stack.extend(node.children.values().rev());
                if let Some(entry) = &node.entry {
                    return Some(entry);
                }
            }
            None
        })
    }

    pub fn stats(&self) -> DictStats {
        DictStats {
            entries: self.len,
            nodes: self.node_count,
            max_key_chars: self.max_key_chars,
        }
    }
}

impl Dictionary for TrieDictionary {
    fn get(&self, key: &str) -> Option<&DictEntry> {
        self.node_for(key)?.entry.as_ref()
    }

    fn longest_match(&self, text: &str) -> Option<&DictEntry> {
        let mut node = &self.root;
        let mut best = None;
        for ch in text.chars() {
            let Some(next) = node.children.get(&ch) else {
                break;
            };
            node = next;
            if node.entry.is_some() {
                best = node.entry.as_ref();
            }
        }
        best
    }

    fn common_prefix_search(&self, text: &str) -> Vec<&DictEntry> {
        let mut node = &self.root;
        let mut found = Vec::new();
        for ch in text.chars() {
            let Some(next) = node.children.get(&ch) else {
                break;
            };
            node = next;
            if let Some(entry) = &node.entry {
                found.push(entry);
            }
        }
        found
    }
}
