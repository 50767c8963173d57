use std::io::{self, BufWriter, Write};
use std::path::Path;

use g2p_core::dict::{DictEntry, Dictionary, TrieDictionary};
use g2p_core::settings::Script;

use super::resources;

fn open(dict_file: &str, format: &str, traditional: bool) -> TrieDictionary {
    let script = if traditional {
        Script::Traditional
    } else {
        Script::Simplified
    };
    die!(
        resources::load_dictionary(Path::new(dict_file), format, script),
        "Error opening dictionary: {}"
    )
}

fn format_entry(entry: &DictEntry) -> String {
    format!(
        "{} [{}] /{}/",
        entry.key,
        entry.pronunciation.join(" "),
        entry.gloss
    )
}

pub fn info(dict_file: &str, format: &str, traditional: bool) {
    let dict = open(dict_file, format, traditional);
    let stats = dict.stats();

    println!("Dictionary: {dict_file}");
    println!("Format:     {format}");
    println!("Entries:    {}", stats.entries);
    println!("Trie nodes: {}", stats.nodes);
    println!("Longest key: {} chars", stats.max_key_chars);

    let sample_keys = ["你好", "中国", "北京", "汉字"];
    println!();
    println!("Sample lookups:");
    for key in &sample_keys {
        match dict.get(key) {
            Some(entry) => println!("  {key} → {}", entry.pronunciation.join(" ")),
            None => println!("  {key} → (not found)"),
        }
    }
}

pub fn lookup(dict_file: &str, format: &str, traditional: bool, key: &str) {
    let dict = open(dict_file, format, traditional);
    match dict.get(key) {
        Some(entry) => println!("{}", format_entry(entry)),
        None => println!("{key}: not found"),
    }
}

pub fn prefix(dict_file: &str, format: &str, traditional: bool, query: &str) {
    let dict = open(dict_file, format, traditional);
    let matches = dict.common_prefix_search(query);
    if matches.is_empty() {
        println!("{query}: no prefixes found");
        return;
    }
    for entry in matches {
        println!("{}", format_entry(entry));
    }
}

/// Print every entry in key order, at most `limit` of them.
pub fn dump(dict_file: &str, format: &str, traditional: bool, limit: Option<usize>) {
    let dict = open(dict_file, format, traditional);
    let mut out = BufWriter::new(io::stdout().lock());
    die!(write_entries(&dict, limit, &mut out), "Error writing output: {}");
    die!(out.flush(), "Error writing output: {}");
}

fn write_entries(
    dict: &TrieDictionary,
    limit: Option<usize>,
    out: &mut impl Write,
) -> io::Result<()> {
    for entry in dict.iter().take(limit.unwrap_or(usize::MAX)) {
        writeln!(out, "{}", format_entry(entry))?;
    }
    Ok(())
}

pub fn tokenize(dict_file: &str, format: &str, traditional: bool, text: &str) {
    let dict = open(dict_file, format, traditional);
    let tokens: Vec<String> = dict
        .tokenize(text)
        .iter()
        .map(|t| match t.entry() {
            Some(entry) => format!("{}({})", entry.key, entry.pronunciation.join(" ")),
            None => t.as_str().to_string(),
        })
        .collect();
    println!("{}", tokens.join(" | "));
}
