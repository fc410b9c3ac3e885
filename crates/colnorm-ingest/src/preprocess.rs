//! Blank row and column removal applied right after loading.

use polars::prelude::{AnyValue, BooleanChunked, Column, DataFrame, NewChunkedArray, PolarsResult};
use tracing::debug;

/// Drops columns and rows where every cell is blank.
///
/// A cell counts as blank when it is null or holds only whitespace. This
/// runs before any reshaping so stray padding rows and empty spreadsheet
/// columns never reach the mapping stage.
pub fn drop_blank(df: &DataFrame) -> PolarsResult<DataFrame> {
    let kept: Vec<Column> = df
        .get_columns()
        .iter()
        .filter(|col| !column_is_blank(col))
        .cloned()
        .collect();

    let dropped_columns = df.width() - kept.len();
    let trimmed = DataFrame::new(kept)?;
    if trimmed.width() == 0 || trimmed.height() == 0 {
        return Ok(trimmed);
    }

    let mut keep = vec![false; trimmed.height()];
    for col in trimmed.get_columns() {
        for (idx, flag) in keep.iter_mut().enumerate() {
            if !*flag && !is_blank(&col.get(idx)?) {
                *flag = true;
            }
        }
    }

    let mask = BooleanChunked::from_slice("keep".into(), &keep);
    let filtered = trimmed.filter(&mask)?;
    debug!(
        dropped_columns,
        dropped_rows = trimmed.height() - filtered.height(),
        "removed blank rows and columns"
    );
    Ok(filtered)
}

fn column_is_blank(col: &Column) -> bool {
    (0..col.len()).all(|idx| col.get(idx).map(|v| is_blank(&v)).unwrap_or(true))
}

fn is_blank(value: &AnyValue<'_>) -> bool {
    match value {
        AnyValue::Null => true,
        AnyValue::String(s) => s.trim().is_empty(),
        AnyValue::StringOwned(s) => s.trim().is_empty(),
        _ => false,
    }
}
