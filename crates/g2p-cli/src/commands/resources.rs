//! Loading settings, dictionaries and rule files for the subcommands.
//!
//! Everything here returns `Result`; the `*_ops` modules decide how to report
//! failures.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use g2p_core::dict::TrieDictionary;
use g2p_core::rules::{builtin, RuleError, RuleSet, RuleSource};
use g2p_core::settings::{self, Script, Settings, SettingsError};
use g2p_core::transliterator::{BuildError, TransliterateOptions, Transliterator};

use crate::dict_source::{self, DictSourceError, SOURCE_NAMES};

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{}: {source}", .path.display())]
    Settings {
        path: PathBuf,
        #[source]
        source: SettingsError,
    },

    #[error("{}: {source}", .path.display())]
    Dictionary {
        path: PathBuf,
        #[source]
        source: DictSourceError,
    },

    #[error("unknown dictionary format '{}' (available: {})", .0, SOURCE_NAMES.join(", "))]
    UnknownFormat(String),

    #[error(transparent)]
    Rules(#[from] RuleError),

    #[error(transparent)]
    Build(#[from] BuildError),
}

/// Command-line overrides layered on top of a settings file.
#[derive(Debug, Clone, Default)]
pub struct EngineOptions {
    pub settings_file: Option<PathBuf>,
    /// Rule files appended after the settings' `extra_files`.
    pub rule_files: Vec<PathBuf>,
    pub tones: bool,
    pub traditional: bool,
    pub normalize_punctuation: bool,
    pub ligatures: bool,
}

/// Settings from `path` (or the embedded defaults), with the command-line
/// switches applied. A switch can only turn a setting on.
pub fn load_settings(opts: &EngineOptions) -> Result<Settings, LoadError> {
    let mut s = match &opts.settings_file {
        Some(path) => {
            let content = read(path)?;
            settings::parse_settings_toml(&content).map_err(|source| LoadError::Settings {
                path: path.clone(),
                source,
            })?
        }
        None => Settings::default(),
    };
    s.rules.tones |= opts.tones;
    s.output.normalize_punctuation |= opts.normalize_punctuation;
    s.output.ligatures |= opts.ligatures;
    if opts.traditional {
        s.dictionary.script = Script::Traditional;
    }
    s.rules.extra_files.extend(opts.rule_files.iter().cloned());
    Ok(s)
}

pub fn load_dictionary(path: &Path, format: &str, script: Script) -> Result<TrieDictionary, LoadError> {
    let source = dict_source::from_name(format, script)
        .ok_or_else(|| LoadError::UnknownFormat(format.to_string()))?;
    let entries = source.parse_file(path).map_err(|source| LoadError::Dictionary {
        path: path.to_path_buf(),
        source,
    })?;
    TrieDictionary::build(entries).map_err(|e| LoadError::Build(e.into()))
}

/// Rule file contents, read once so that [`RuleSource`]s can borrow them.
#[derive(Debug, Default)]
pub struct RuleFiles {
    files: Vec<(String, String)>,
}

impl RuleFiles {
    pub fn read(paths: &[PathBuf]) -> Result<Self, LoadError> {
        let files = paths
            .iter()
            .map(|path| Ok((path.display().to_string(), read(path)?)))
            .collect::<Result<_, LoadError>>()?;
        Ok(Self { files })
    }

    pub fn sources(&self) -> impl Iterator<Item = RuleSource<'_>> {
        self.files
            .iter()
            .map(|(name, content)| RuleSource::new(name, content))
    }

    /// Source names, as they appear in rule origins.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.files.iter().map(|(name, _)| name.as_str())
    }
}

/// The built-in pinyin tables (unless `with_builtin` is false) followed by
/// `files`.
pub fn load_rules(files: &RuleFiles, with_builtin: bool, tones: bool) -> Result<RuleSet, LoadError> {
    let rules = if with_builtin {
        RuleSet::load(builtin::pinyin_sources(tones).into_iter().chain(files.sources()))?
    } else {
        RuleSet::load(files.sources())?
    };
    Ok(rules)
}

pub fn open_transliterator(
    dict_file: &Path,
    format: &str,
    opts: &EngineOptions,
) -> Result<Transliterator, LoadError> {
    let settings = load_settings(opts)?;
    let dict = load_dictionary(dict_file, format, settings.dictionary.script)?;
    let files = RuleFiles::read(&settings.rules.extra_files)?;
    let rules = load_rules(&files, true, settings.rules.tones)?;
    Ok(Transliterator::new(Arc::new(dict), Arc::new(rules))
        .with_options(TransliterateOptions::from(&settings.output)))
}

fn read(path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}
