//! Canonical column mapping produced by the mapping request.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Fixed canonical keys the model maps semantic columns onto.
///
/// Date columns use a dynamic `yyyy-mm-dd` string as their key instead.
pub mod keys {
    pub const STYLE_ID: &str = "style_id";
    pub const STYLE_DESCRIPTION: &str = "style_description";
    pub const COLOR: &str = "color";
}

/// One entry of a canonical mapping: a canonical key and the original
/// header it was mapped to (verbatim from the sheet).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingEntry {
    /// Canonical key (`style_id`, `style_description`, `color`, or an
    /// ISO date string for a detected date column).
    pub key: String,
    /// Original column header, exactly as it appears in the sheet.
    pub header: String,
}

/// Ordered mapping from canonical keys to original column headers.
///
/// Keys are unique (the mapping is parsed from a JSON object); entry order
/// is the object's insertion order and is preserved by every downstream
/// stage. Immutable once built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalMapping {
    entries: Vec<MappingEntry>,
}

impl CanonicalMapping {
    pub fn new(entries: Vec<MappingEntry>) -> Self {
        Self { entries }
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[MappingEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &MappingEntry> {
        self.entries.iter()
    }

    /// Canonical keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.key.as_str())
    }

    /// Mapped original headers in insertion order.
    pub fn headers(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.header.as_str())
    }

    /// Original header mapped to `key`, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.key == key)
            .map(|e| e.header.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render back as an ordered JSON object, as the model produced it.
    pub fn to_json_object(&self) -> Map<String, Value> {
        self.entries
            .iter()
            .map(|e| (e.key.clone(), Value::String(e.header.clone())))
            .collect()
    }
}

impl FromIterator<(String, String)> for CanonicalMapping {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(key, header)| MappingEntry { key, header })
                .collect(),
        }
    }
}

impl<'a> IntoIterator for &'a CanonicalMapping {
    type Item = &'a MappingEntry;
    type IntoIter = std::slice::Iter<'a, MappingEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
