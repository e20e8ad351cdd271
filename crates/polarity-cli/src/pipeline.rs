//! Review analysis pipeline with explicit stages.
//!
//! The pipeline follows these stages in order:
//! 1. **Reference data**: Load the stopword set and sentiment lexicon
//! 2. **Ingest**: Read the review CSV and extract the review column
//! 3. **Sample**: Draw a uniform random subset of records
//! 4. **Classify**: Normalize each review and assign a sentiment label
//! 5. **Export**: Optionally write the full labeled set as JSON
//!
//! Each stage takes the output of the previous stage and returns typed
//! results. Reference data and ingest failures are fatal; a scoring failure
//! degrades that one record to the "error" label and the batch continues.

use std::io::BufWriter;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{info, info_span};

use polarity_classify::SentimentClassifier;
use polarity_ingest::{SampleOptions, extract_reviews, read_review_table, sample_records};
use polarity_lexicons::loaders::STOPWORDS_FILE;
use polarity_lexicons::{
    LexiconSource, SentimentLexicon, StopwordSet, active_source, load_default_lexicon,
    load_default_stopwords, load_lexicon_from, load_stopwords_from,
};
use polarity_model::{LabelCounts, LabeledReview, ReviewRecord, SentimentLabel};
use polarity_normalize::TextNormalizer;

// ============================================================================
// Stage 0: Reference data
// ============================================================================

/// Read-only reference data, loaded once before any record is processed.
#[derive(Debug, Clone)]
pub struct ReferenceData {
    pub stopwords: StopwordSet,
    pub lexicon: SentimentLexicon,
    /// Where the data came from.
    pub source: LexiconSource,
}

/// Load the stopword set and sentiment lexicon.
///
/// A load failure is fatal: a corrupt lexicon is a broken deployment, not
/// bad data.
pub fn load_reference_data(lexicon_dir: Option<&Path>) -> Result<ReferenceData> {
    let span = info_span!("load_reference");
    let _guard = span.enter();
    let start = Instant::now();

    // An explicit directory beats the POLARITY_LEXICON_DIR override.
    let source = match lexicon_dir {
        Some(dir) => LexiconSource::Directory(dir.to_path_buf()),
        None => active_source(),
    };
    let (stopwords, lexicon) = match &source {
        LexiconSource::Directory(dir) => {
            let stopwords = load_stopwords_from(&dir.join(STOPWORDS_FILE))
                .with_context(|| format!("load stopwords from {}", dir.display()))?;
            let lexicon = load_lexicon_from(dir)
                .with_context(|| format!("load lexicon from {}", dir.display()))?;
            (stopwords, lexicon)
        }
        LexiconSource::Embedded => {
            let stopwords = load_default_stopwords().context("load embedded stopwords")?;
            let lexicon = load_default_lexicon().context("load embedded lexicon")?;
            (stopwords, lexicon)
        }
    };

    info!(
        source = %source.describe(),
        stopword_count = stopwords.len(),
        term_count = lexicon.term_count(),
        negation_count = lexicon.negation_count(),
        intensifier_count = lexicon.intensifier_count(),
        duration_ms = start.elapsed().as_millis(),
        "reference data loaded"
    );

    Ok(ReferenceData {
        stopwords,
        lexicon,
        source,
    })
}

// ============================================================================
// Stage 1: Ingest
// ============================================================================

/// Read the review dataset and extract the review column.
///
/// Missing cells become empty-string records; a dataset without the column
/// at all is fatal.
pub fn ingest(csv_path: &Path, column: &str) -> Result<Vec<ReviewRecord>> {
    let span = info_span!("ingest", path = %csv_path.display());
    let _guard = span.enter();
    let start = Instant::now();

    let table = read_review_table(csv_path)?;
    let records = extract_reviews(&table, column)?;

    let empty_count = records.iter().filter(|record| record.is_empty()).count();
    info!(
        record_count = records.len(),
        empty_count,
        duration_ms = start.elapsed().as_millis(),
        "ingest complete"
    );
    Ok(records)
}

// ============================================================================
// Stage 2: Sample
// ============================================================================

/// Draw the record subset for this run.
///
/// The requested size clamps to the dataset, so small datasets pass through
/// whole; indices come out contiguous from zero either way.
pub fn sample(records: Vec<ReviewRecord>, options: &SampleOptions) -> Vec<ReviewRecord> {
    let span = info_span!("sample");
    let _guard = span.enter();
    let start = Instant::now();

    let available = records.len();
    let sampled = sample_records(records, options);
    info!(
        requested = options.sample_size,
        available,
        record_count = sampled.len(),
        seeded = options.seed.is_some(),
        duration_ms = start.elapsed().as_millis(),
        "sample complete"
    );
    sampled
}

// ============================================================================
// Stage 3: Classify
// ============================================================================

/// Result of the classification stage.
#[derive(Debug)]
pub struct AnalysisResult {
    /// One labeled triple per sampled record, in sample order.
    pub reviews: Vec<LabeledReview>,
    /// Per-label tallies.
    pub counts: LabelCounts,
    /// Per-record scoring failures; the run itself still succeeds.
    pub errors: Vec<String>,
}

/// Normalize and label every sampled record.
///
/// A scoring failure degrades that record to [`SentimentLabel::Error`] and
/// is recorded in `errors`; the batch always completes.
pub fn analyze_records(
    records: Vec<ReviewRecord>,
    normalizer: &TextNormalizer,
    classifier: &SentimentClassifier,
) -> AnalysisResult {
    let span = info_span!("classify");
    let _guard = span.enter();
    let start = Instant::now();

    let mut reviews = Vec::with_capacity(records.len());
    let mut counts = LabelCounts::default();
    let mut errors = Vec::new();
    for record in records {
        let normalized = normalizer.normalize(&record.text);
        let label = classifier.label(&normalized);
        if label == SentimentLabel::Error {
            errors.push(format!("record {}: sentiment scoring failed", record.index));
        }
        counts.record(label);
        reviews.push(LabeledReview {
            index: record.index,
            original: record.text,
            normalized,
            label,
        });
    }

    info!(
        record_count = reviews.len(),
        positive = counts.positive,
        negative = counts.negative,
        neutral = counts.neutral,
        error_count = counts.error,
        duration_ms = start.elapsed().as_millis(),
        "classification complete"
    );
    AnalysisResult {
        reviews,
        counts,
        errors,
    }
}

// ============================================================================
// Stage 4: Export
// ============================================================================

/// Serializable envelope for the `--output` JSON export.
#[derive(Debug, Serialize)]
pub struct AnalysisReport<'a> {
    pub schema: &'static str,
    pub schema_version: u32,
    /// Source dataset path.
    pub source: String,
    /// Number of records in the labeled set.
    pub sampled: usize,
    pub counts: &'a LabelCounts,
    pub reviews: &'a [LabeledReview],
}

impl<'a> AnalysisReport<'a> {
    pub fn new(source: &Path, analysis: &'a AnalysisResult) -> Self {
        Self {
            schema: "polarity.analysis",
            schema_version: 1,
            source: source.display().to_string(),
            sampled: analysis.reviews.len(),
            counts: &analysis.counts,
            reviews: &analysis.reviews,
        }
    }
}

/// Write the full labeled set as pretty-printed JSON.
pub fn write_analysis_json(path: &Path, report: &AnalysisReport<'_>) -> Result<()> {
    let file = std::fs::File::create(path).with_context(|| format!("create {}", path.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(file), report)
        .with_context(|| format!("write labeled set to {}", path.display()))?;
    info!(path = %path.display(), record_count = report.sampled, "labeled set exported");
    Ok(())
}
