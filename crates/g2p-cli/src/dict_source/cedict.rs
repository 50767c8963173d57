use std::sync::OnceLock;

use g2p_core::dict::DictEntry;
use g2p_core::settings::Script;
use regex::Regex;

use super::{parse_lines, DictSource, DictSourceError};

fn line_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(?P<trad>\S+)\s+(?P<simp>\S+)\s+\[(?P<pinyin>[^\]]*)\]\s*/(?P<gloss>.*)/\s*$")
            .expect("CC-CEDICT line regex is valid")
    })
}

/// CC-CEDICT text format:
///
/// ```text
/// # comment
/// 中國 中国 [Zhong1 guo2] /China/Middle Kingdom/
/// ```
///
/// The headword column used as the key is chosen by `script`.
#[derive(Debug, Clone, Copy)]
pub struct CedictSource {
    script: Script,
}

impl CedictSource {
    pub fn new(script: Script) -> Self {
        Self { script }
    }
}

impl DictSource for CedictSource {
    fn parse_str(&self, content: &str) -> Result<Vec<DictEntry>, DictSourceError> {
        parse_lines("CC-CEDICT", content, |line| {
            let caps = line_re().captures(line)?;
            let key = match self.script {
                Script::Simplified => &caps["simp"],
                Script::Traditional => &caps["trad"],
            };
            let pronunciation = caps["pinyin"]
                .split_whitespace()
                .map(str::to_string)
                .collect();
            Some((key.to_string(), pronunciation, caps["gloss"].to_string()))
        })
    }
}
