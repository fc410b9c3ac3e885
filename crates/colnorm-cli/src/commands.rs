//! Command implementations.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use indicatif::ProgressBar;
use tracing::info;

use colnorm_core::{DOWNLOAD_FILE_NAME, build_instruction, normalize_columns, reshape, to_csv_bytes};
use colnorm_ingest::{drop_blank, load_table};
use colnorm_llm::{LlmConfig, OpenAiClient};
use polars::prelude::DataFrame;

use crate::cli::{NormalizeArgs, PromptArgs};
use crate::summary::{print_confidence_table, print_frame_preview};

const PREVIEW_ROWS: usize = 10;

pub fn run_normalize(args: &NormalizeArgs) -> Result<()> {
    let df = load_file(&args.input)?;

    let config = build_llm_config(args.model.as_deref(), args.base_url.as_deref())?;
    let client = OpenAiClient::new(config)?;

    let spinner = ProgressBar::new_spinner();
    spinner.set_message("mapping column headers...");
    spinner.enable_steady_tick(Duration::from_millis(100));
    let outcome = normalize_columns(
        &client,
        &df,
        args.header_row.as_deref(),
        args.rows.as_deref(),
    );
    spinner.finish_and_clear();
    let outcome = outcome?;

    println!("Column mapping:");
    print_confidence_table(&outcome.confidence);
    println!("Output preview:");
    print_frame_preview(&outcome.frame, PREVIEW_ROWS);

    if args.dry_run {
        info!("dry run, no file written");
        return Ok(());
    }

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(DOWNLOAD_FILE_NAME));
    let bytes = to_csv_bytes(&outcome.frame)?;
    std::fs::write(&output, bytes)
        .with_context(|| format!("write output: {}", output.display()))?;
    println!(
        "Wrote {} ({} rows, {} columns)",
        output.display(),
        outcome.frame.height(),
        outcome.frame.width()
    );
    Ok(())
}

pub fn run_prompt(args: &PromptArgs) -> Result<()> {
    let df = load_file(&args.input)?;
    let reshaped = reshape(&df, args.header_row.as_deref(), args.rows.as_deref())?;
    let headers: Vec<String> = reshaped
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect();
    println!("{}", build_instruction(&headers));
    Ok(())
}

fn load_file(input: &PathBuf) -> Result<DataFrame> {
    let df = load_table(input)?;
    let df = drop_blank(&df).context("drop blank rows and columns")?;
    info!(
        path = %input.display(),
        rows = df.height(),
        columns = df.width(),
        "file loaded"
    );
    Ok(df)
}

/// Assembles the service configuration at the CLI boundary.
///
/// The key comes from `OPENAI_API_KEY` (a `.env` file is honored); core
/// code only ever sees the explicit config object.
fn build_llm_config(model: Option<&str>, base_url: Option<&str>) -> Result<LlmConfig> {
    dotenvy::dotenv().ok();
    let api_key = std::env::var("OPENAI_API_KEY")
        .context("OPENAI_API_KEY is not set (put it in the environment or a .env file)")?;
    let mut config = LlmConfig::new(api_key);
    if let Some(model) = model {
        config = config.with_model(model);
    }
    if let Some(base_url) = base_url {
        config = config.with_base_url(base_url);
    }
    Ok(config)
}
