use g2p_core::dict::DictEntry;

use super::{parse_lines, DictSource, DictSourceError};

/// Tab-separated `key<TAB>syllables<TAB>gloss`, syllables separated by
/// spaces. The gloss column is optional.
#[derive(Debug, Clone, Copy, Default)]
pub struct TsvSource;

impl DictSource for TsvSource {
    fn parse_str(&self, content: &str) -> Result<Vec<DictEntry>, DictSourceError> {
        parse_lines("TSV", content, |line| {
            let mut fields = line.split('\t');
            let key = fields.next()?.trim();
            let pronunciation: Vec<String> = fields
                .next()?
                .split_whitespace()
                .map(str::to_string)
                .collect();
            if pronunciation.is_empty() {
                return None;
            }
            let gloss = fields.next().unwrap_or("").trim();
            Some((key.to_string(), pronunciation, gloss.to_string()))
        })
    }
}
