//! Library-backed parser built on the `biblatex` crate.
//!
//! The crate does the heavy lifting (nested braces, string macros, person
//! names); this module only flattens its chunks back into plain field strings
//! and recovers each entry's verbatim source slice so the detail view can show
//! what the author actually wrote.

use biblatex::{Bibliography, Chunk, Entry, Spanned};
use log::warn;
use std::collections::HashMap;

use super::fallback::{parse_header, split_segments};
use super::EntryParser;
use crate::common::RawEntry;

#[derive(Debug, Clone, Copy, Default)]
pub struct LibraryParser;

impl EntryParser for LibraryParser {
    fn name(&self) -> &'static str {
        "biblatex"
    }

    fn parse(&self, text: &str) -> Option<Vec<RawEntry>> {
        let bibliography = match Bibliography::parse(text) {
            Ok(b) => b,
            Err(e) => {
                warn!("biblatex could not parse the bibliography: {}", e);
                return None;
            }
        };

        let sources = source_slices(text);
        let entries = bibliography
            .iter()
            .filter(|entry| !entry.key.trim().is_empty())
            .map(|entry| to_raw_entry(entry, &sources))
            .collect();

        Some(entries)
    }
}

/// Entry type as written plus the verbatim entry text
#[derive(Debug, Clone, PartialEq, Eq)]
struct SourceSlice {
    entry_type: String,
    text: String,
}

/// Map citation key -> source slice. First occurrence wins.
fn source_slices(text: &str) -> HashMap<String, SourceSlice> {
    let mut slices = HashMap::new();
    for segment in split_segments(text) {
        let Some((entry_type, key)) = parse_header(&segment) else {
            continue;
        };
        let (entry_type, key) = (entry_type.to_string(), key.to_string());
        slices.entry(key).or_insert(SourceSlice {
            entry_type,
            text: segment,
        });
    }
    slices
}

/// biblatex lowercases entry types, so the type is read back from the source
/// header when the slice is found.
fn to_raw_entry(entry: &Entry, sources: &HashMap<String, SourceSlice>) -> RawEntry {
    let slice = sources.get(&entry.key);
    let entry_type = slice
        .map(|s| s.entry_type.clone())
        .unwrap_or_else(|| entry.entry_type.to_string());
    let mut raw = RawEntry::new(entry.key.clone(), entry_type);

    for (name, chunks) in &entry.fields {
        raw.set_field(name, chunks_to_string(chunks));
    }

    raw.raw_source = match slice {
        Some(s) => s.text.clone(),
        None => reconstruct_source(&raw),
    };

    raw
}

/// Flatten chunks to a string, keeping math in `$...$` so later decoding sees it
fn chunks_to_string(chunks: &[Spanned<Chunk>]) -> String {
    chunks
        .iter()
        .map(|c| match &c.v {
            Chunk::Normal(s) => s.clone(),
            Chunk::Verbatim(s) => s.clone(),
            Chunk::Math(s) => format!("${}$", s),
        })
        .collect()
}

fn reconstruct_source(raw: &RawEntry) -> String {
    let mut out = format!("@{}{{{},\n", raw.entry_type, raw.citation_key);
    for (name, value) in &raw.fields {
        out.push_str(&format!("  {} = {{{}}},\n", name, value));
    }
    out.push('}');
    out
}
