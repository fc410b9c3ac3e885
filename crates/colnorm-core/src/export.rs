//! CSV serialization of the projected table for download.

use polars::prelude::{CsvWriter, DataFrame, SerWriter};

use colnorm_model::Result;

/// File name offered for the downloaded table.
pub const DOWNLOAD_FILE_NAME: &str = "processed_data.csv";

/// MIME type of the download artifact.
pub const DOWNLOAD_MIME_TYPE: &str = "text/csv";

/// Serializes a frame to CSV bytes, header row included.
pub fn to_csv_bytes(df: &DataFrame) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    let mut frame = df.clone();
    CsvWriter::new(&mut buffer)
        .include_header(true)
        .finish(&mut frame)?;
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::{Column, IntoColumn, NamedFrom, Series};

    #[test]
    fn csv_bytes_include_header_and_rows() {
        let columns: Vec<Column> = vec![
            Series::new("style_id".into(), vec!["A1".to_string(), "A2".to_string()])
                .into_column(),
            Series::new("color".into(), vec!["Red".to_string(), "Blue".to_string()])
                .into_column(),
        ];
        let df = DataFrame::new(columns).unwrap();

        let bytes = to_csv_bytes(&df).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("style_id,color"));
        assert_eq!(lines.next(), Some("A1,Red"));
        assert_eq!(lines.next(), Some("A2,Blue"));
    }
}
