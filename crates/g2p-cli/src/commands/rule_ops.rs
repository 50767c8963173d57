use std::collections::HashSet;
use std::path::PathBuf;
use std::process;

use g2p_core::rules::builtin;
use g2p_core::unicode;

use super::resources::{self, RuleFiles};

pub struct ApplyOptions {
    pub rule_files: Vec<PathBuf>,
    /// Run the built-in pinyin tables before `rule_files`.
    pub builtin: bool,
    pub tones: bool,
    pub explain: bool,
    pub json: bool,
}

pub fn apply(input: &str, opts: &ApplyOptions) {
    if !opts.builtin && opts.rule_files.is_empty() {
        eprintln!("Error: no rules to apply (give --rules or drop --no-builtin)");
        process::exit(1);
    }
    let files = die!(RuleFiles::read(&opts.rule_files), "Error: {}");
    let rules = die!(
        resources::load_rules(&files, opts.builtin, opts.tones),
        "Error loading rules: {}"
    );
    let input = unicode::to_nfd(input);

    if !opts.explain {
        println!("{}", rules.apply(&input));
        return;
    }

    let steps = rules.explain(&input);
    if opts.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&steps).expect("JSON serialization failed")
        );
        return;
    }
    println!("input: {input}");
    for step in &steps {
        let origin = step.origin.as_deref().unwrap_or("-");
        println!(
            "#{:<4} {origin:<24} {}  =>  {}",
            step.index, step.rule, step.after
        );
    }
    let output = steps.last().map_or(input.as_str(), |s| s.after.as_str());
    println!("output: {output}");
}

pub fn check(files: &[PathBuf], with_builtin: bool) {
    let rule_files = die!(RuleFiles::read(files), "Error: {}");
    let rules = die!(
        resources::load_rules(&rule_files, with_builtin, false),
        "Error: {}"
    );
    let names: HashSet<&str> = rule_files.names().collect();
    let own = rules
        .rules()
        .iter()
        .filter(|r| r.origin().is_some_and(|o| names.contains(&*o.name)))
        .count();
    println!("OK: {own} rules ({} total)", rules.len());
}

pub fn export(name: Option<&str>) {
    let Some(name) = name else {
        for name in builtin::names() {
            println!("{name}");
        }
        return;
    };
    match builtin::source(name) {
        Some(text) => print!("{text}"),
        None => {
            let names: Vec<&str> = builtin::names().collect();
            eprintln!(
                "Error: unknown rule table '{name}' (available: {})",
                names.join(", ")
            );
            process::exit(1);
        }
    }
}
