use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Loosely-typed entry as produced by a parser, before normalization
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawEntry {
    pub citation_key: String,
    pub entry_type: String,
    pub fields: BTreeMap<String, String>, // Keys lowercased
    pub raw_source: String,               // Verbatim source slice for the entry
}

impl RawEntry {
    pub fn new(citation_key: impl Into<String>, entry_type: impl Into<String>) -> Self {
        Self {
            citation_key: citation_key.into(),
            entry_type: entry_type.into(),
            ..Default::default()
        }
    }

    /// Set a field, folding the name to lowercase
    pub fn set_field(&mut self, name: &str, value: impl Into<String>) {
        self.fields.insert(name.to_lowercase(), value.into());
    }

    /// Case-insensitive field lookup. Empty values count as absent.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .get(&name.to_lowercase())
            .map(|v| v.as_str())
            .filter(|v| !v.is_empty())
    }
}

/// Fixed-shape publication ready for sorting and rendering
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PublicationRecord {
    pub id: String,
    #[serde(rename = "type")]
    pub entry_type: String,
    pub title: String,
    pub authors: Vec<String>,
    pub year: String,  // Empty or four digits
    pub doi: String,   // Full resolver link or empty
    pub url: String,
    pub venue: String, // booktitle, else journal
    pub raw_source: String,
}

/// Records sharing a year label; an empty label holds the undated records
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayGroup {
    pub label: String,
    pub records: Vec<PublicationRecord>,
}

impl DisplayGroup {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            records: Vec::new(),
        }
    }

    pub fn is_undated(&self) -> bool {
        self.label.is_empty()
    }
}

/// Statistics from the render step
#[derive(Debug, Clone, Default)]
pub struct RenderStats {
    pub outcome: &'static str,
    pub groups: usize,
    pub records: usize,
}
