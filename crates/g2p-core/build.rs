use std::collections::HashMap;

use regex::Regex;

const RULE_TABLES: &[&str] = &[
    "src/rules/data/pinyin-to-ipa.txt",
    "src/rules/data/tones.txt",
    "src/rules/data/toneless.txt",
];

fn main() {
    // Validate embedded TOML files at compile time.
    validate_toml(
        "src/default_settings.toml",
        include_str!("src/default_settings.toml"),
    );
    println!("cargo:rerun-if-changed=src/default_settings.toml");

    // Rule tables are parsed at runtime; catch broken lines and undefined
    // symbols before they ship.
    let mut symbols = HashMap::new();
    for path in RULE_TABLES {
        let content = std::fs::read_to_string(path)
            .unwrap_or_else(|e| panic!("cannot read {path}: {e}"));
        validate_rule_table(path, &content, &mut symbols);
        println!("cargo:rerun-if-changed={path}");
    }
}

fn validate_toml(path: &str, content: &str) {
    if content.parse::<toml::Value>().is_err() {
        panic!("{path} contains invalid TOML");
    }
}

fn validate_rule_table(path: &str, content: &str, symbols: &mut HashMap<String, String>) {
    let symbol_def = Regex::new(r"^(::\w+::)\s*=\s*(\S.*)$").unwrap();
    let symbol_use = Regex::new(r"::\w+::").unwrap();
    let rule_line = Regex::new(
        r"^(?P<focus>\S+)\s*->\s*(?P<repl>[^\s/]+)(?:\s*/\s*(?P<left>\S*?)\s*_\s*(?P<right>\S*))?$",
    )
    .unwrap();

    for (i, raw) in content.lines().enumerate() {
        let line = raw.split('%').next().unwrap_or("").trim();
        if line.is_empty() {
            continue;
        }
        let undefined = |name: &str| -> String {
            panic!("{path}:{}: undefined symbol {name}", i + 1)
        };

        if let Some(caps) = symbol_def.captures(line) {
            let value = symbol_use.replace_all(&caps[2], |c: &regex::Captures<'_>| {
                symbols.get(&c[0]).cloned().unwrap_or_else(|| undefined(&c[0]))
            });
            let value = value.trim().to_string();
            symbols.insert(caps[1].to_string(), value);
            continue;
        }

        let substituted = symbol_use.replace_all(line, |c: &regex::Captures<'_>| {
            symbols.get(&c[0]).cloned().unwrap_or_else(|| undefined(&c[0]))
        });
        let caps = rule_line
            .captures(&substituted)
            .unwrap_or_else(|| panic!("{path}:{}: cannot parse {line:?}", i + 1));
        let field = |name: &str| caps.name(name).map_or("", |m| m.as_str());
        let focus = if field("focus") == "0" { "" } else { field("focus") };
        let pattern = format!(
            "(?:{})(?:{focus})(?:{})",
            field("left").replace('#', "^"),
            field("right").replace('#', "$"),
        );
        if let Err(e) = Regex::new(&pattern) {
            panic!("{path}:{}: invalid pattern: {e}", i + 1);
        }
    }
}
