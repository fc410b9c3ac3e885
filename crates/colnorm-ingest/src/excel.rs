//! Excel workbook ingestion via calamine.
//!
//! Reads the first worksheet only; the first row is taken as the header.
//! Every cell is rendered as text so downstream stages see a uniform
//! string table, mirroring what the CSV path produces after coercion.

use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto};
use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, Series};

use colnorm_model::format_numeric;

use crate::error::IngestError;

/// Reads the first worksheet of an Excel workbook into a string table.
pub fn read_excel_table(path: &Path) -> Result<DataFrame, IngestError> {
    let mut workbook = open_workbook_auto(path).map_err(|e| IngestError::WorkbookOpen {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| IngestError::NoWorksheet {
            path: path.to_path_buf(),
        })?
        .map_err(|e| IngestError::WorkbookOpen {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    let mut rows = range.rows();
    let header_row = rows.next().ok_or_else(|| IngestError::Empty {
        path: path.to_path_buf(),
    })?;
    let headers = unique_headers(header_row.iter().map(cell_to_string).collect());

    let body: Vec<Vec<String>> = rows
        .map(|row| row.iter().map(cell_to_string).collect())
        .collect();

    let columns: Vec<Column> = headers
        .iter()
        .enumerate()
        .map(|(idx, name)| {
            let values: Vec<String> = body
                .iter()
                .map(|row| row.get(idx).cloned().unwrap_or_default())
                .collect();
            Series::new(name.as_str().into(), values).into_column()
        })
        .collect();

    DataFrame::new(columns).map_err(|e| IngestError::Frame {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Renders one worksheet cell as text.
///
/// Floats lose trailing zeros; date cells become ISO text (date only when
/// the time component is midnight).
fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.trim().to_string(),
        Data::Float(v) => format_numeric(*v),
        Data::Int(v) => v.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(naive) => {
                if naive.time() == chrono::NaiveTime::MIN {
                    naive.date().format("%Y-%m-%d").to_string()
                } else {
                    naive.format("%Y-%m-%d %H:%M:%S").to_string()
                }
            }
            None => format_numeric(dt.as_f64()),
        },
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
        Data::Error(e) => e.to_string(),
    }
}

/// Makes header names non-empty and unique.
///
/// Empty header cells become `column_<index>`; repeated names get a
/// numeric suffix so the frame constructor does not reject them.
fn unique_headers(raw: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::BTreeMap::new();
    raw.into_iter()
        .enumerate()
        .map(|(idx, name)| {
            let base = if name.trim().is_empty() {
                format!("column_{idx}")
            } else {
                name
            };
            let count = seen.entry(base.clone()).or_insert(0usize);
            *count += 1;
            if *count == 1 {
                base
            } else {
                format!("{base}_{count}")
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headers_are_made_unique_and_non_empty() {
        let headers = unique_headers(vec![
            "ID".to_string(),
            String::new(),
            "ID".to_string(),
            "CLR".to_string(),
        ]);
        assert_eq!(headers, vec!["ID", "column_1", "ID_2", "CLR"]);
    }

    #[test]
    fn cells_render_as_text() {
        assert_eq!(cell_to_string(&Data::Empty), "");
        assert_eq!(cell_to_string(&Data::Float(12.50)), "12.5");
        assert_eq!(cell_to_string(&Data::Int(7)), "7");
        assert_eq!(cell_to_string(&Data::String(" Red ".to_string())), "Red");
        assert_eq!(cell_to_string(&Data::Bool(true)), "true");
    }
}
