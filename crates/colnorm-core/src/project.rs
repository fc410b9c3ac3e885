//! Projection of the reshaped table onto the canonical mapping.

use polars::prelude::DataFrame;

use colnorm_model::{CanonicalMapping, NormalizeError, Result};

/// Selects exactly the mapped columns, in mapping order, renamed to their
/// canonical keys.
///
/// Unmapped columns are dropped. Two keys mapping to the same original
/// header yield two output columns sharing the same data. Row order and
/// count are unchanged, and the input frame is not mutated.
///
/// # Errors
///
/// Fails with [`NormalizeError::ColumnNotFound`] when a mapped header is
/// not a column of `df`.
pub fn project(mapping: &CanonicalMapping, df: &DataFrame) -> Result<DataFrame> {
    let mut columns = Vec::with_capacity(mapping.len());
    for entry in mapping {
        let col = df
            .column(&entry.header)
            .map_err(|_| NormalizeError::ColumnNotFound(entry.header.clone()))?;
        columns.push(col.clone().with_name(entry.key.as_str().into()));
    }
    Ok(DataFrame::new(columns)?)
}
