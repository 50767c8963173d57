use std::io::{self, BufRead, BufWriter, Write};
use std::path::Path;

use g2p_core::transliterator::{Segment, SegmentKind, Transliterator};
use unicode_width::UnicodeWidthStr;

use super::resources::{self, EngineOptions};

fn open(dict_file: &str, format: &str, opts: &EngineOptions) -> Transliterator {
    die!(
        resources::open_transliterator(Path::new(dict_file), format, opts),
        "Error: {}"
    )
}

/// Transliterate `text`, or every line of stdin when `text` is `None`.
pub fn transliterate(dict_file: &str, format: &str, opts: &EngineOptions, text: Option<&str>) {
    let t = open(dict_file, format, opts);
    if let Some(text) = text {
        println!("{}", t.transliterate(text));
        return;
    }
    let stdin = io::stdin();
    let mut out = BufWriter::new(io::stdout().lock());
    for line in stdin.lock().lines() {
        let line = die!(line, "Error reading stdin: {}");
        die!(
            writeln!(out, "{}", t.transliterate(&line)),
            "Error writing output: {}"
        );
    }
    die!(out.flush(), "Error writing output: {}");
}

pub fn segments(dict_file: &str, format: &str, opts: &EngineOptions, text: &str, json: bool) {
    let t = open(dict_file, format, opts);
    let segments = t.segments(text);
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&segments).expect("JSON serialization failed")
        );
        return;
    }
    print!("{}", format_table(&segments));
}

fn format_table(segments: &[Segment]) -> String {
    let width = segments
        .iter()
        .map(|s| s.text.width())
        .max()
        .unwrap_or(0);
    let mut out = String::new();
    for seg in segments {
        let pad = " ".repeat(width - seg.text.width());
        let kind = match seg.kind {
            SegmentKind::Word => "word",
            SegmentKind::UnknownHan => "unknown",
            SegmentKind::Other => "literal",
        };
        let pron = seg.pronunciation.as_deref().unwrap_or("-");
        out.push_str(&format!(
            "{}{pad}  {kind:<8} {pron:<20} {}\n",
            seg.text, seg.ipa
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(text: &str, kind: SegmentKind, pron: Option<&str>, ipa: &str) -> Segment {
        Segment {
            text: text.to_string(),
            kind,
            pronunciation: pron.map(str::to_string),
            ipa: ipa.to_string(),
        }
    }

    #[test]
    fn table_aligns_wide_characters() {
        let table = format_table(&[
            seg("你好", SegmentKind::Word, Some("ni3hao3"), "nixau\u{32f}"),
            seg("!", SegmentKind::Other, None, "!"),
        ]);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("你好  word"));
        assert!(lines[1].starts_with("!     literal"));
        assert!(lines[0].ends_with("nixau\u{32f}"));
    }

    #[test]
    fn table_empty() {
        assert_eq!(format_table(&[]), "");
    }
}
