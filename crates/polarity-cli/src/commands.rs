//! Command handlers for the polarity CLI.

use anyhow::Result;
use tracing::info_span;

use polarity_classify::{PolarityScorer, SentimentClassifier};
use polarity_cli::pipeline::{
    AnalysisReport, ReferenceData, analyze_records, ingest, load_reference_data, sample,
    write_analysis_json,
};
use polarity_ingest::SampleOptions;
use polarity_lexicons::{DoctorReport, PunctuationSet};
use polarity_normalize::TextNormalizer;

use crate::cli::AnalyzeArgs;
use crate::types::AnalyzeResult;

/// Run the full analysis pipeline over one CSV dataset.
pub fn run_analyze(args: &AnalyzeArgs) -> Result<AnalyzeResult> {
    let analyze_span = info_span!("analyze", csv = %args.csv.display());
    let _analyze_guard = analyze_span.enter();

    // ========================================================================
    // Stage 0: Reference data - stopwords and lexicon, fatal on failure
    // ========================================================================
    let ReferenceData {
        stopwords,
        lexicon,
        source,
    } = load_reference_data(args.lexicon_dir.as_deref())?;
    let normalizer = TextNormalizer::new(stopwords, PunctuationSet::ascii());
    let classifier = SentimentClassifier::new(PolarityScorer::new(lexicon));

    // ========================================================================
    // Stage 1: Ingest - read the dataset and extract the review column
    // ========================================================================
    let records = ingest(&args.csv, &args.column)?;
    let row_count = records.len();

    // ========================================================================
    // Stage 2: Sample - uniform random subset, clamped to the dataset
    // ========================================================================
    let options = SampleOptions {
        sample_size: args.sample_size,
        seed: args.seed,
    };
    let sampled = sample(records, &options);

    // ========================================================================
    // Stage 3: Classify - normalize and label each record in isolation
    // ========================================================================
    let analysis = analyze_records(sampled, &normalizer, &classifier);

    // ========================================================================
    // Stage 4: Export - optional JSON dump of the full labeled set
    // ========================================================================
    let output = match &args.output {
        Some(path) => {
            let report = AnalysisReport::new(&args.csv, &analysis);
            write_analysis_json(path, &report)?;
            Some(path.clone())
        }
        None => None,
    };

    Ok(AnalyzeResult {
        csv_path: args.csv.clone(),
        lexicon_source: source.describe(),
        row_count,
        reviews: analysis.reviews,
        counts: analysis.counts,
        show: args.show,
        errors: analysis.errors,
        output,
    })
}

/// Load reference data and print its health report as JSON.
pub fn run_lexicon() -> Result<()> {
    let ReferenceData {
        stopwords,
        lexicon,
        source,
    } = load_reference_data(None)?;
    let report = DoctorReport::collect(&source, &stopwords, &lexicon);
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
