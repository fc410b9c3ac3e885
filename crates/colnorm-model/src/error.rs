//! Error types for column normalization.

use polars::error::PolarsError;
use thiserror::Error;

/// Errors that can occur while normalizing a table's columns.
///
/// Every failure kind is distinct and inspectable; nothing is retried or
/// swallowed inside the pipeline. Callers decide how to present them.
#[derive(Debug, Error)]
pub enum NormalizeError {
    /// Header row index points at or past the end of the table.
    #[error("header row {index} is out of range for a table with {rows} rows")]
    OutOfRange { index: usize, rows: usize },

    /// A free-text argument could not be parsed as a non-negative integer.
    #[error("invalid {name} value '{value}': expected a non-negative integer")]
    InvalidArgument { name: &'static str, value: String },

    /// The text-generation service call failed (transport, auth, quota, timeout).
    #[error("text generation request failed: {0}")]
    ServiceCall(String),

    /// The service replied, but the reply is not a JSON object of strings.
    ///
    /// The raw reply is preserved verbatim so callers can show or log it.
    #[error("model reply is not a JSON object of strings")]
    MappingParse { raw_reply: String },

    /// The mapping references a column the reshaped table does not have.
    #[error("mapped column not found in table: '{0}'")]
    ColumnNotFound(String),

    /// The mapping points at a header that was never in the header list.
    #[error("mapping value '{header}' for key '{key}' is not one of the sheet headers")]
    MappingValidation { key: String, header: String },

    /// Frame-level failure (duplicate header names, cell access).
    #[error(transparent)]
    Frame(#[from] PolarsError),
}

pub type Result<T> = std::result::Result<T, NormalizeError>;
