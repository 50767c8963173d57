mod cedict;
mod tsv;

use std::fs;
use std::io;
use std::path::Path;

use g2p_core::dict::{DictEntry, DictError};
use g2p_core::settings::Script;
use tracing::debug;

pub use cedict::CedictSource;
pub use tsv::TsvSource;

/// A pluggable dictionary source that parses a dictionary file into entries.
pub trait DictSource {
    /// Parse dictionary text. Entries come back in file order, so a later
    /// duplicate key overrides an earlier one once the trie is built.
    fn parse_str(&self, content: &str) -> Result<Vec<DictEntry>, DictSourceError>;

    fn parse_file(&self, path: &Path) -> Result<Vec<DictEntry>, DictSourceError> {
        let content = fs::read_to_string(path)?;
        self.parse_str(&content)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DictSourceError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("invalid entry on line {line}: {source}")]
    Entry {
        line: usize,
        #[source]
        source: DictError,
    },
}

/// Parse line-oriented dictionary text with shared boilerplate: empty and
/// `#` comment skipping, entry validation, and stats logging.
///
/// `parse_line` returns `None` for lines it cannot read; those are skipped
/// and counted.
pub(super) fn parse_lines(
    label: &str,
    content: &str,
    parse_line: impl Fn(&str) -> Option<(String, Vec<String>, String)>,
) -> Result<Vec<DictEntry>, DictSourceError> {
    let mut entries = Vec::new();
    let mut total_lines = 0usize;
    let mut skipped = 0usize;

    for (i, line) in content.lines().enumerate() {
        total_lines += 1;
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() || line.starts_with('#') {
            skipped += 1;
            continue;
        }
        let Some((key, pronunciation, gloss)) = parse_line(line) else {
            skipped += 1;
            continue;
        };
        let entry = DictEntry::new(key, pronunciation, gloss)
            .map_err(|source| DictSourceError::Entry { line: i + 1, source })?;
        entries.push(entry);
    }

    debug!(
        source = label,
        entries = entries.len(),
        skipped,
        total_lines,
        "parsed dictionary"
    );
    if entries.is_empty() {
        return Err(DictSourceError::Parse(format!(
            "no {label} entries found ({skipped} of {total_lines} lines skipped)"
        )));
    }
    Ok(entries)
}

/// Names accepted by [`from_name`].
pub const SOURCE_NAMES: &[&str] = &["cedict", "tsv"];

/// Create a `DictSource` by name. Returns `None` for unknown source names.
pub fn from_name(name: &str, script: Script) -> Option<Box<dyn DictSource>> {
    match name {
        "cedict" => Some(Box::new(CedictSource::new(script))),
        "tsv" => Some(Box::new(TsvSource)),
        _ => None,
    }
}
