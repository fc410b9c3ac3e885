//! Error types for tabular file ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a tabular file.
#[derive(Debug, Error)]
pub enum IngestError {
    /// File extension is not one of the supported tabular formats.
    #[error("unsupported file extension: {path}")]
    UnsupportedExtension { path: PathBuf },

    /// Failed to open or parse a spreadsheet workbook.
    #[error("failed to open workbook {path}: {message}")]
    WorkbookOpen { path: PathBuf, message: String },

    /// Workbook contains no worksheets.
    #[error("workbook has no worksheets: {path}")]
    NoWorksheet { path: PathBuf },

    /// Worksheet or delimited file has no rows.
    #[error("file is empty: {path}")]
    Empty { path: PathBuf },

    /// Failed to parse a CSV file.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// Failed to assemble an in-memory table.
    #[error("failed to build table from {path}: {message}")]
    Frame { path: PathBuf, message: String },
}
