//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use hypermut_core::DEFAULT_MIN_NORMAL_CASES;

#[derive(Parser)]
#[command(
    name = "hypermut",
    version,
    about = "Adjust hypermutation classifications against cohort dominant signatures",
    long_about = "Re-examine per-cancer-type hypermutation classifications.\n\n\
                  Samples labeled Hypermutated whose dominant mutational signature\n\
                  matches the dominant signature of the Normal cohort in the same\n\
                  cancer type are relabeled highMutationBurden: their elevated\n\
                  mutation count reflects the cohort's baseline mutagenic process,\n\
                  not a distinct hypermutation mechanism."
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
    /// Rewrite per-cancer-type classification files in place.
    Adjust(AdjustArgs),
}

#[derive(Parser)]
pub struct AdjustArgs {
    /// Directory of per-cancer-type classification files.
    #[arg(value_name = "STATUS_DIR")]
    pub status_dir: PathBuf,

    /// Tab-separated dominant-signature calls, one row per sample barcode.
    #[arg(value_name = "SIGNATURES_FILE")]
    pub signatures_file: PathBuf,

    /// Smallest Normal cohort whose dominant signature is trusted.
    #[arg(
        long = "min-normal-cases",
        value_name = "N",
        default_value_t = DEFAULT_MIN_NORMAL_CASES
    )]
    pub min_normal_cases: usize,

    /// Compute and report corrections without rewriting any file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Continue past files that fail to parse, reporting them at the end.
    ///
    /// By default the run aborts on the first unreadable or malformed file,
    /// leaving later files untouched.
    #[arg(long = "keep-going")]
    pub keep_going: bool,

    /// Write per-file outcomes as JSON.
    #[arg(long = "report", value_name = "PATH")]
    pub report: Option<PathBuf>,
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
