//! Transliteration settings loaded from TOML.
//!
//! - `parse_settings_toml(toml_content)` parses and validates a settings file
//! - `Settings::default()` parses the embedded defaults
//! - Default values are embedded via `include_str!("default_settings.toml")`
//!
//! Settings are plain values: callers hand them to the constructors that need
//! them, there is no process-wide instance.

use std::path::PathBuf;

use serde::Deserialize;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    pub dictionary: DictionarySettings,
    pub rules: RuleSettings,
    pub output: OutputSettings,
}

impl Default for Settings {
    fn default() -> Self {
        parse_settings_toml(DEFAULT_SETTINGS_TOML).expect("embedded settings TOML must be valid")
    }
}

/// Which CC-CEDICT headword column keys the dictionary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Script {
    #[default]
    Simplified,
    Traditional,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DictionarySettings {
    pub script: Script,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RuleSettings {
    pub tones: bool,
    #[serde(default)]
    pub extra_files: Vec<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OutputSettings {
    pub normalize_punctuation: bool,
    pub ligatures: bool,
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    for (i, path) in s.rules.extra_files.iter().enumerate() {
        if path.as_os_str().is_empty() {
            return Err(SettingsError::InvalidValue {
                field: format!("rules.extra_files[{i}]"),
                reason: "path must not be empty".to_string(),
            });
        }
    }
    Ok(())
}
