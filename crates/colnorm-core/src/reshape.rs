//! Header promotion, row truncation, and full text coercion.

use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, PolarsResult, Series};

use colnorm_model::{NormalizeError, Result, any_to_string};

/// Reshapes a raw table into the canonical string table the mapping
/// stages operate on.
///
/// Both arguments arrive as free text (they come straight from user
/// input) and are parsed here:
///
/// - `header_row = h` promotes row `h` to the header; rows at or before
///   `h` are discarded and the body re-indexes from zero. An index at or
///   past the row count fails with [`NormalizeError::OutOfRange`].
/// - `row_limit = n` truncates the body to at most `n` leading rows.
/// - Unparseable values fail with [`NormalizeError::InvalidArgument`];
///   empty strings count as absent.
///
/// Every cell, header cells included, is coerced to text afterwards —
/// prompt embedding and lexical comparison downstream only work on
/// strings. The input frame is never mutated.
pub fn reshape(
    df: &DataFrame,
    header_row: Option<&str>,
    row_limit: Option<&str>,
) -> Result<DataFrame> {
    let header_row = parse_index("header row", header_row)?;
    let row_limit = parse_index("row limit", row_limit)?;

    let (headers, body) = match header_row {
        Some(index) => {
            if index >= df.height() {
                return Err(NormalizeError::OutOfRange {
                    index,
                    rows: df.height(),
                });
            }
            let headers = df
                .get_columns()
                .iter()
                .map(|col| col.get(index).map(any_to_string))
                .collect::<PolarsResult<Vec<String>>>()?;
            let offset = i64::try_from(index + 1).unwrap_or(i64::MAX);
            (headers, df.slice(offset, df.height()))
        }
        None => {
            let headers = df
                .get_column_names()
                .iter()
                .map(|name| name.to_string())
                .collect();
            (headers, df.clone())
        }
    };

    let body = match row_limit {
        Some(limit) => body.head(Some(limit)),
        None => body,
    };

    stringify(&headers, &body)
}

/// Parses an optional free-text index; empty input counts as absent.
fn parse_index(name: &'static str, raw: Option<&str>) -> Result<Option<usize>> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value
            .parse::<usize>()
            .map(Some)
            .map_err(|_| NormalizeError::InvalidArgument {
                name,
                value: value.to_string(),
            }),
    }
}

/// Rebuilds the body as string columns under the given header names.
///
/// Duplicate header names are rejected by the frame constructor, which
/// keeps the unique-column invariant.
fn stringify(headers: &[String], body: &DataFrame) -> Result<DataFrame> {
    let columns = headers
        .iter()
        .zip(body.get_columns())
        .map(|(name, col)| {
            let values = (0..body.height())
                .map(|idx| col.get(idx).map(any_to_string))
                .collect::<PolarsResult<Vec<String>>>()?;
            Ok(Series::new(name.as_str().into(), values).into_column())
        })
        .collect::<Result<Vec<Column>>>()?;
    Ok(DataFrame::new(columns)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::AnyValue;

    fn sample() -> DataFrame {
        DataFrame::new(vec![
            Series::new(
                "a".into(),
                vec!["ID".to_string(), "A1".to_string(), "A2".to_string()],
            )
            .into_column(),
            Series::new("b".into(), vec![0i64, 10, 20]).into_column(),
        ])
        .unwrap()
    }

    #[test]
    fn header_promotion_uses_row_values() {
        let reshaped = reshape(&sample(), Some("0"), None).unwrap();
        let names: Vec<String> = reshaped
            .get_column_names()
            .iter()
            .map(|n| n.to_string())
            .collect();
        assert_eq!(names, vec!["ID", "0"]);
        assert_eq!(reshaped.height(), 2);
        assert_eq!(
            reshaped.column("ID").unwrap().get(0).unwrap(),
            AnyValue::String("A1")
        );
    }

    #[test]
    fn header_row_out_of_range_fails() {
        let err = reshape(&sample(), Some("3"), None).unwrap_err();
        assert!(matches!(
            err,
            NormalizeError::OutOfRange { index: 3, rows: 3 }
        ));
    }

    #[test]
    fn row_limit_truncates_body() {
        let reshaped = reshape(&sample(), None, Some("2")).unwrap();
        assert_eq!(reshaped.height(), 2);

        let oversized = reshape(&sample(), None, Some("99")).unwrap();
        assert_eq!(oversized.height(), 3);
    }

    #[test]
    fn unparseable_arguments_fail_typed() {
        let err = reshape(&sample(), None, Some("ten")).unwrap_err();
        assert!(matches!(
            err,
            NormalizeError::InvalidArgument {
                name: "row limit",
                ..
            }
        ));

        let err = reshape(&sample(), Some("-1"), None).unwrap_err();
        assert!(matches!(
            err,
            NormalizeError::InvalidArgument {
                name: "header row",
                ..
            }
        ));
    }

    #[test]
    fn blank_arguments_count_as_absent() {
        let reshaped = reshape(&sample(), Some("  "), Some("")).unwrap();
        assert_eq!(reshaped.height(), 3);
        let names: Vec<String> = reshaped
            .get_column_names()
            .iter()
            .map(|n| n.to_string())
            .collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn all_cells_become_text() {
        let reshaped = reshape(&sample(), None, None).unwrap();
        let b = reshaped.column("b").unwrap();
        assert_eq!(b.get(1).unwrap(), AnyValue::String("10"));
    }

    #[test]
    fn promoting_last_row_leaves_empty_body() {
        let reshaped = reshape(&sample(), Some("2"), None).unwrap();
        assert_eq!(reshaped.height(), 0);
        let names: Vec<String> = reshaped
            .get_column_names()
            .iter()
            .map(|n| n.to_string())
            .collect();
        assert_eq!(names, vec!["A2", "20"]);
    }
}
