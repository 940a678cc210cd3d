//! CLI argument definitions for `regionfix`.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "regionfix",
    version,
    about = "Correct Turkish province and district names in address records",
    long_about = "Correct Turkish province and district names in address records.\n\n\
                  Names are matched against a reference table of valid pairs, \
                  exactly or within a small edit distance."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Directory holding tr_postal_codes.csv (default: $REGIONFIX_DATA_DIR or the bundled data/).
    #[arg(long = "data-dir", value_name = "DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
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

    /// Prefix log lines with timestamps (pretty and compact formats).
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,

    /// Allow address values in trace logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Correct a JSON array of address records.
    Correct(CorrectArgs),

    /// List provinces in the reference table.
    Provinces,

    /// List the districts of a province.
    Districts(DistrictsArgs),
}

#[derive(Parser)]
pub struct CorrectArgs {
    /// JSON file with address records (default: stdin).
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Write corrected records here instead of stdout.
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Do not print the confidence summary.
    #[arg(long = "no-summary")]
    pub no_summary: bool,

    /// Minimum length of a district or address before `<district>/<province>`
    /// extraction is attempted.
    #[arg(long = "long-text-threshold", value_name = "CHARS")]
    pub long_text_threshold: Option<usize>,

    /// Shortest district name searched for inside a full address.
    #[arg(long = "min-district-len", value_name = "CHARS")]
    pub min_district_len: Option<usize>,
}

#[derive(Parser)]
pub struct DistrictsArgs {
    /// Province name; close misspellings are accepted.
    #[arg(value_name = "PROVINCE")]
    pub province: String,
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
