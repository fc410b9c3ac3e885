//! File-type dispatch for tabular ingestion.

use std::path::Path;

use polars::prelude::{CsvReadOptions, DataFrame, SerReader};
use tracing::debug;

use crate::error::IngestError;
use crate::excel::read_excel_table;

/// Loads a tabular file fully into memory.
///
/// CSV files go through the Polars CSV reader with schema inference;
/// Excel workbooks are read from their first worksheet with every cell
/// rendered as text.
///
/// # Errors
///
/// Returns [`IngestError::UnsupportedExtension`] for anything that is not
/// `.csv`, `.xlsx` or `.xls`, and the corresponding parse error otherwise.
pub fn load_table(path: &Path) -> Result<DataFrame, IngestError> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    let df = match extension.as_str() {
        "csv" => read_csv_table(path)?,
        "xlsx" | "xls" => read_excel_table(path)?,
        _ => {
            return Err(IngestError::UnsupportedExtension {
                path: path.to_path_buf(),
            });
        }
    };

    debug!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "loaded table"
    );
    Ok(df)
}

fn read_csv_table(path: &Path) -> Result<DataFrame, IngestError> {
    CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(100))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .finish()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_file_loads_with_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("styles.csv");
        std::fs::write(&path, "ID,CLR\nA1,Red\nA2,Blue\n").unwrap();

        let df = load_table(&path).unwrap();
        assert_eq!(df.height(), 2);
        let names: Vec<String> = df
            .get_column_names()
            .iter()
            .map(|n| n.to_string())
            .collect();
        assert_eq!(names, vec!["ID", "CLR"]);
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let err = load_table(Path::new("data.parquet")).unwrap_err();
        assert!(matches!(err, IngestError::UnsupportedExtension { .. }));
    }
}
