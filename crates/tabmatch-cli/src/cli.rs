//! CLI argument definitions for tabmatch.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use tabmatch_cli::logging::LogFormat;
use tabmatch_report::{DEFAULT_LEFT_LABEL, DEFAULT_RIGHT_LABEL};
use tracing::level_filters::LevelFilter;

#[derive(Parser)]
#[command(
    name = "tabmatch",
    version,
    about = "Align rows of two tables whose columns differ in name and order",
    long_about = "Pair every row of a left table with its most similar row in a right table.\n\n\
                  Columns are related by content (dates, codes, numbers) instead of by header,\n\
                  so the two tables may use different languages and column orders. The aligned\n\
                  tables are embedded in a prompt document for a downstream diff step."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v info, -vv debug, -vvv trace, -q errors only).
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
    /// Align two tables and write the prompt document.
    Align(AlignArgs),

    /// Show the field mapping detected between two tables.
    Mapping(InputArgs),

    /// Show how a left row scored against the row it was paired with.
    Explain(ExplainArgs),
}

#[derive(Args)]
pub struct InputArgs {
    /// Left table; every one of its rows appears in the output.
    #[arg(value_name = "LEFT", default_value = "data1.csv")]
    pub left: PathBuf,

    /// Right table; rows are picked from it to match the left rows.
    #[arg(value_name = "RIGHT", default_value = "data2.csv")]
    pub right: PathBuf,
}

#[derive(Args)]
pub struct AlignArgs {
    #[command(flatten)]
    pub inputs: InputArgs,

    /// Path of the prompt document.
    #[arg(long = "output", short = 'o', value_name = "PATH", default_value = "prompt.txt")]
    pub output: PathBuf,

    /// Print the aligned tables but do not write the prompt document.
    #[arg(long = "no-write")]
    pub no_write: bool,

    /// Do not print the aligned tables to stdout.
    #[arg(long = "quiet-tables")]
    pub quiet_tables: bool,

    /// Custom prompt template.
    ///
    /// Must contain `{{left_table}}` and `{{right_table}}`; `{{left_label}}`
    /// and `{{right_label}}` are optional.
    #[arg(long = "template", value_name = "PATH")]
    pub template: Option<PathBuf>,

    /// Label of the left table in the prompt document.
    #[arg(long = "left-label", default_value = DEFAULT_LEFT_LABEL)]
    pub left_label: String,

    /// Label of the right table in the prompt document.
    #[arg(long = "right-label", default_value = DEFAULT_RIGHT_LABEL)]
    pub right_label: String,

    /// Also write a JSON report of the field mapping and per-row scores.
    #[arg(long = "report", value_name = "PATH")]
    pub report: Option<PathBuf>,
}

#[derive(Args)]
pub struct ExplainArgs {
    #[command(flatten)]
    pub inputs: InputArgs,

    /// Left data row to explain (1 = first row after the header).
    #[arg(long = "row", value_name = "N", value_parser = clap::value_parser!(u64).range(1..))]
    pub row: u64,
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

impl From<LogLevelArg> for LevelFilter {
    fn from(level: LogLevelArg) -> Self {
        match level {
            LogLevelArg::Error => Self::ERROR,
            LogLevelArg::Warn => Self::WARN,
            LogLevelArg::Info => Self::INFO,
            LogLevelArg::Debug => Self::DEBUG,
            LogLevelArg::Trace => Self::TRACE,
        }
    }
}

impl From<LogFormatArg> for LogFormat {
    fn from(format: LogFormatArg) -> Self {
        match format {
            LogFormatArg::Pretty => Self::Pretty,
            LogFormatArg::Compact => Self::Compact,
            LogFormatArg::Json => Self::Json,
        }
    }
}
