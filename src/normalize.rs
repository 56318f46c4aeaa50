use lazy_static::lazy_static;
use regex::Regex;

use crate::common::{PublicationRecord, RawEntry};

/// Resolver prefix for bare DOIs
pub const DOI_RESOLVER: &str = "https://doi.org/";

const DEFAULT_ENTRY_TYPE: &str = "article";
const SLUG_LENGTH: usize = 20;

lazy_static! {
    static ref AUTHOR_SEPARATOR: Regex = Regex::new(r"(?i)\s+and\s+").unwrap();
    static ref DOI_LABEL: Regex = Regex::new(r"(?i)^doi:\s*").unwrap();
    static ref LEADING_WRAPPER: Regex = Regex::new(r#"^\s*[{"]\s*"#).unwrap();
    static ref TRAILING_WRAPPER: Regex = Regex::new(r#"\s*[}"]\s*$"#).unwrap();
    static ref FOUR_DIGITS: Regex = Regex::new(r"[0-9]{4}").unwrap();
    static ref NON_WORD: Regex = Regex::new(r"\W").unwrap();
}

/// Strip one wrapping brace or quote from each end, then trim
pub fn clean_title(raw: &str) -> String {
    let without_leading = LEADING_WRAPPER.replace(raw, "");
    TRAILING_WRAPPER
        .replace(&without_leading, "")
        .trim()
        .to_string()
}

/// Split an author list on the word "and", keeping names intact and in order
pub fn split_authors(raw: &str) -> Vec<String> {
    AUTHOR_SEPARATOR
        .split(raw)
        .map(|name| name.trim())
        .filter(|name| !name.is_empty())
        .map(|name| name.to_string())
        .collect()
}

/// Turn a DOI field into a resolvable link. Links pass through untouched.
pub fn resolve_doi(raw: &str) -> String {
    let raw = raw.trim();
    if raw.is_empty() {
        return String::new();
    }
    if raw.starts_with("http") {
        return raw.to_string();
    }
    format!("{}{}", DOI_RESOLVER, DOI_LABEL.replace(raw, ""))
}

/// First four-digit run of a year field, or empty
pub fn clean_year(raw: &str) -> String {
    FOUR_DIGITS
        .find(raw)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// Fallback id: the first characters of the title with non-word characters removed
pub fn title_slug(title: &str) -> String {
    let prefix: String = title.chars().take(SLUG_LENGTH).collect();
    NON_WORD.replace_all(&prefix, "").into_owned()
}

/// Map a parser's loose entry onto the fixed publication shape
pub fn normalize_entry(entry: &RawEntry) -> PublicationRecord {
    let title = clean_title(entry.field("title").unwrap_or(""));

    let authors = entry
        .field("author")
        .or_else(|| entry.field("authors"))
        .map(split_authors)
        .unwrap_or_default();

    let id = match entry.citation_key.trim() {
        "" => {
            let slug = title_slug(&title);
            if slug.is_empty() {
                "entry".to_string()
            } else {
                slug
            }
        }
        key => key.to_string(),
    };

    let entry_type = match entry.entry_type.trim() {
        "" => DEFAULT_ENTRY_TYPE.to_string(),
        t => t.to_string(),
    };

    PublicationRecord {
        id,
        entry_type,
        title,
        authors,
        year: clean_year(entry.field("year").unwrap_or("")),
        doi: entry.field("doi").map(resolve_doi).unwrap_or_default(),
        url: entry
            .field("url")
            .or_else(|| entry.field("pdf"))
            .unwrap_or("")
            .to_string(),
        venue: entry
            .field("booktitle")
            .or_else(|| entry.field("journal"))
            .unwrap_or("")
            .to_string(),
        raw_source: entry.raw_source.clone(),
    }
}

pub fn normalize_entries(entries: &[RawEntry]) -> Vec<PublicationRecord> {
    entries.iter().map(normalize_entry).collect()
}
