//! CLI argument definitions for the polarity analyzer.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use polarity_ingest::{DEFAULT_REVIEW_COLUMN, DEFAULT_SAMPLE_SIZE};

#[derive(Parser)]
#[command(
    name = "polarity",
    version,
    about = "Sentiment polarity analysis for review datasets",
    long_about = "Sample reviews from a CSV dataset, normalize the text, and classify\n\
                  each review as positive, negative, or neutral.\n\n\
                  Reference data (stopwords, sentiment lexicon) is embedded; override\n\
                  it with --lexicon-dir or the POLARITY_LEXICON_DIR environment variable."
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
    /// Sample reviews from a CSV dataset and classify their sentiment.
    Analyze(AnalyzeArgs),

    /// Print a JSON health report of the loaded reference data.
    Lexicon,
}

#[derive(Parser)]
pub struct AnalyzeArgs {
    /// Path to the CSV dataset of reviews.
    #[arg(value_name = "CSV")]
    pub csv: PathBuf,

    /// Column holding the review text.
    #[arg(long = "column", value_name = "NAME", default_value = DEFAULT_REVIEW_COLUMN)]
    pub column: String,

    /// Number of records to sample from the dataset (clamped to its size).
    #[arg(long = "sample-size", value_name = "N", default_value_t = DEFAULT_SAMPLE_SIZE)]
    pub sample_size: usize,

    /// RNG seed for a reproducible sample (random each run when omitted).
    #[arg(long = "seed", value_name = "SEED")]
    pub seed: Option<u64>,

    /// Number of labeled reviews to print.
    #[arg(long = "show", value_name = "N", default_value_t = 5)]
    pub show: usize,

    /// Write the full labeled set as JSON to this path.
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Load reference data from this directory instead of the embedded copy.
    ///
    /// The directory must contain stopwords_en.txt, sentiment_terms.csv,
    /// intensifiers.csv, and negations.txt.
    #[arg(long = "lexicon-dir", value_name = "DIR")]
    pub lexicon_dir: Option<PathBuf>,
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
