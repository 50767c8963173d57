use serde::{Deserialize, Serialize};

use super::DictError;

/// A single lexical unit and its stored pronunciation.
///
/// `pronunciation` holds romanized syllables in order (e.g. `["ni3", "hao3"]`).
/// `gloss` is carried through from the source dictionary and never interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictEntry {
    pub key: String,
    pub pronunciation: Vec<String>,
    pub gloss: String,
}

impl DictEntry {
    pub fn new(
        key: impl Into<String>,
        pronunciation: Vec<String>,
        gloss: impl Into<String>,
    ) -> Result<Self, DictError> {
        let entry = Self {
            key: key.into(),
            pronunciation,
            gloss: gloss.into(),
        };
        entry.validate()?;
        Ok(entry)
    }

    /// Syllables concatenated without separators, as fed to the rule engine.
    pub fn joined_pronunciation(&self) -> String {
        self.pronunciation.concat()
    }

    pub(super) fn validate(&self) -> Result<(), DictError> {
        if self.key.is_empty() {
            return Err(DictError::InvalidEntry {
                key: self.key.clone(),
                reason: "key is empty".to_string(),
            });
        }
        Ok(())
    }
}
