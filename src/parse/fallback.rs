use lazy_static::lazy_static;
use log::{debug, info};
use regex::Regex;

use super::EntryParser;
use crate::common::RawEntry;

lazy_static! {
    /// Start of a new entry: a newline directly followed by `@`
    static ref ENTRY_BOUNDARY: Regex = Regex::new(r"\n@").unwrap();

    /// Minimal header shape: @type{key,
    static ref HEADER_PATTERN: Regex = Regex::new(r"^@([a-zA-Z]+)\s*\{\s*([^,]+),").unwrap();

    static ref TITLE_PATTERN: Regex = delimited_field("title");
    static ref AUTHOR_PATTERN: Regex = delimited_field("author");
    static ref URL_PATTERN: Regex = delimited_field("url");
    static ref PDF_PATTERN: Regex = delimited_field("pdf");
    static ref BOOKTITLE_PATTERN: Regex = delimited_field("booktitle");
    static ref JOURNAL_PATTERN: Regex = delimited_field("journal");

    /// Years may appear undelimited: `year = 2020,`
    static ref YEAR_PATTERN: Regex = Regex::new(r#"(?i)\byear\s*=\s*[{"]?([0-9]{4})"#).unwrap();

    /// DOIs stop at whitespace, quotes, commas and braces
    static ref DOI_PATTERN: Regex = Regex::new(r#"(?i)\bdoi\s*=\s*[{"]?([^",}\s]+)[}"]"#).unwrap();
}

/// `name = {value}` or `name = "value"`. The word boundary keeps `booktitle`
/// from answering for `title`.
fn delimited_field(name: &str) -> Regex {
    Regex::new(&format!(r#"(?i)\b{}\s*=\s*[{{"]([^"}}]+)[}}"]"#, name)).unwrap()
}

fn capture(pattern: &Regex, text: &str) -> Option<String> {
    pattern
        .captures(text)
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str().trim().to_string())
}

/// Split source text into entry segments, restoring the `@` the boundary consumed.
/// The leading segment is kept only when it has content.
pub fn split_segments(text: &str) -> Vec<String> {
    ENTRY_BOUNDARY
        .split(text)
        .enumerate()
        .map(|(i, part)| {
            if i == 0 {
                part.trim().to_string()
            } else {
                format!("@{}", part.trim())
            }
        })
        .filter(|part| !part.is_empty())
        .collect()
}

/// Entry type and citation key from a segment's `@type{key,` header, type case kept
pub fn parse_header(segment: &str) -> Option<(&str, &str)> {
    let header = HEADER_PATTERN.captures(segment)?;
    let entry_type = header.get(1)?.as_str();
    let citation_key = header.get(2)?.as_str().trim();
    (!citation_key.is_empty()).then_some((entry_type, citation_key))
}

/// Parse one segment. Returns `None` when the header shape is missing.
pub fn parse_segment(segment: &str) -> Option<RawEntry> {
    let (entry_type, citation_key) = parse_header(segment)?;

    let mut entry = RawEntry::new(citation_key, entry_type);

    let journal = capture(&JOURNAL_PATTERN, segment);
    let booktitle = capture(&BOOKTITLE_PATTERN, segment).or_else(|| journal.clone());

    entry.set_field("title", capture(&TITLE_PATTERN, segment).unwrap_or_default());
    entry.set_field("author", capture(&AUTHOR_PATTERN, segment).unwrap_or_default());
    entry.set_field("year", capture(&YEAR_PATTERN, segment).unwrap_or_default());
    entry.set_field("url", capture(&URL_PATTERN, segment).unwrap_or_default());
    entry.set_field("pdf", capture(&PDF_PATTERN, segment).unwrap_or_default());
    entry.set_field("doi", capture(&DOI_PATTERN, segment).unwrap_or_default());
    entry.set_field("booktitle", booktitle.unwrap_or_default());
    entry.set_field("journal", journal.unwrap_or_default());

    entry.raw_source = segment.trim().to_string();
    Some(entry)
}

/// Best-effort regex parser. Never fails: segments without a header are dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackParser;

impl EntryParser for FallbackParser {
    fn name(&self) -> &'static str {
        "fallback"
    }

    fn parse(&self, text: &str) -> Option<Vec<RawEntry>> {
        info!("Using fallback parser");
        let segments = split_segments(text);
        let mut entries = Vec::with_capacity(segments.len());
        for segment in &segments {
            match parse_segment(segment) {
                Some(entry) => entries.push(entry),
                None => {
                    let preview: String = segment.chars().take(40).collect();
                    debug!("Skipping segment without entry header: {:?}", preview);
                }
            }
        }
        Some(entries)
    }
}
