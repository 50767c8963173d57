use std::fs;

pub fn settings_export() {
    print!("{}", g2p_core::settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(
        g2p_core::settings::parse_settings_toml(&content),
        "Error: {}"
    );
    println!(
        "OK: dictionary.script={:?}, rules.tones={}, rules.extra_files={}, output.normalize_punctuation={}, output.ligatures={}",
        s.dictionary.script,
        s.rules.tones,
        s.rules.extra_files.len(),
        s.output.normalize_punctuation,
        s.output.ligatures
    );
}
