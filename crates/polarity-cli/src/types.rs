//! Result types shared between command handlers and the summary printer.

use std::path::PathBuf;

use polarity_model::{LabelCounts, LabeledReview};

/// Everything `analyze` produces for the final report.
#[derive(Debug)]
pub struct AnalyzeResult {
    pub csv_path: PathBuf,
    /// Where reference data came from ("embedded" or a directory).
    pub lexicon_source: String,
    /// Records in the dataset before sampling.
    pub row_count: usize,
    pub reviews: Vec<LabeledReview>,
    pub counts: LabelCounts,
    /// Number of labeled triples to print.
    pub show: usize,
    /// Per-record scoring failures.
    pub errors: Vec<String>,
    /// Path of the JSON export, when requested.
    pub output: Option<PathBuf>,
}
