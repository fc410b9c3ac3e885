//! Confidence records for reviewed mappings.

use serde::{Deserialize, Serialize};

/// Lexical-similarity confidence for one mapping entry.
///
/// One record per canonical mapping entry, in mapping order. The score is
/// in `[0, 1]`, rounded to three decimals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceRecord {
    /// Canonical key.
    pub key: String,
    /// Original header the key was mapped to.
    pub value: String,
    /// Similarity between the normalized key and header.
    pub score: f64,
}
