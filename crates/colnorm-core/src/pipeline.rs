//! End-to-end orchestration: reshape, request, score, project.

use polars::prelude::DataFrame;
use tracing::{debug, info, info_span};

use colnorm_model::{CanonicalMapping, ConfidenceRecord, Result, TextGenerator};

use crate::project::project;
use crate::prompt::{request_mapping, validate_mapping};
use crate::reshape::reshape;
use crate::score::confidence;

/// Everything one normalization run produces.
#[derive(Debug, Clone)]
pub struct NormalizeOutcome {
    /// The accepted canonical mapping, in model order.
    pub mapping: CanonicalMapping,
    /// One confidence record per mapping entry, same order.
    pub confidence: Vec<ConfidenceRecord>,
    /// The projected table: canonical keys as columns.
    pub frame: DataFrame,
}

/// Runs one synchronous normalization pass over a raw table.
///
/// Stages run to completion in order; the only call that can block on
/// external latency is the generation request inside the mapping stage.
/// Nothing here retries, and the input frame is left untouched.
pub fn normalize_columns(
    generator: &dyn TextGenerator,
    df: &DataFrame,
    header_row: Option<&str>,
    row_limit: Option<&str>,
) -> Result<NormalizeOutcome> {
    let reshaped = reshape(df, header_row, row_limit)?;
    let headers: Vec<String> = reshaped
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect();
    debug!(rows = reshaped.height(), columns = headers.len(), "reshaped table");

    let span = info_span!("mapping", columns = headers.len());
    let mapping = span.in_scope(|| request_mapping(generator, &headers))?;
    validate_mapping(&mapping, &headers)?;
    info!(entries = mapping.len(), "mapping accepted");

    let records = confidence(&mapping);
    let frame = project(&mapping, &reshaped)?;

    Ok(NormalizeOutcome {
        mapping,
        confidence: records,
        frame,
    })
}
