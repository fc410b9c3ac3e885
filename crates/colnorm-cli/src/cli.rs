//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "colnorm",
    version,
    about = "AI-assisted spreadsheet column normalizer",
    long_about = "Normalize spreadsheet column names with a language model.\n\n\
                  Maps raw headers onto canonical fields (style id, style\n\
                  description, color, ISO dates), reports a confidence score\n\
                  per mapping, and writes the renamed table as CSV."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Map a file's columns onto canonical fields and write the result.
    Normalize(NormalizeArgs),

    /// Print the mapping instruction for a file without calling the model.
    Prompt(PromptArgs),
}

#[derive(Parser)]
pub struct NormalizeArgs {
    /// Input file (.csv, .xlsx or .xls).
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Zero-based row to promote to the header (rows above it are dropped).
    #[arg(long = "header-row", value_name = "N")]
    pub header_row: Option<String>,

    /// Keep at most this many leading data rows.
    #[arg(long = "rows", value_name = "N")]
    pub rows: Option<String>,

    /// Model to use for the mapping request.
    #[arg(long = "model", value_name = "MODEL")]
    pub model: Option<String>,

    /// Chat-completions endpoint base URL.
    #[arg(long = "base-url", value_name = "URL")]
    pub base_url: Option<String>,

    /// Output CSV path (default: processed_data.csv in the working directory).
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Show the mapping and confidence table without writing any file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct PromptArgs {
    /// Input file (.csv, .xlsx or .xls).
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Zero-based row to promote to the header (rows above it are dropped).
    #[arg(long = "header-row", value_name = "N")]
    pub header_row: Option<String>,

    /// Keep at most this many leading data rows.
    #[arg(long = "rows", value_name = "N")]
    pub rows: Option<String>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
