use polarity_lexicons::LexiconError;
use polarity_model::SentimentLabel;
use tracing::warn;

use crate::error::ClassifyError;
use crate::scorer::PolarityScorer;

const PREVIEW_CHARS: usize = 48;

/// Maps normalized text to a sentiment label via the polarity score.
#[derive(Debug, Clone)]
pub struct SentimentClassifier {
    scorer: PolarityScorer,
}

impl SentimentClassifier {
    pub fn new(scorer: PolarityScorer) -> Self {
        Self { scorer }
    }

    /// Classifier over the default lexicon. Honors the
    /// `POLARITY_LEXICON_DIR` override.
    pub fn with_defaults() -> Result<Self, LexiconError> {
        Ok(Self::new(PolarityScorer::with_defaults()?))
    }

    /// The tagged outcome: a label, or the scoring failure.
    pub fn classify(&self, text: &str) -> Result<SentimentLabel, ClassifyError> {
        Ok(SentimentLabel::from_score(self.scorer.score(text)?))
    }

    /// Caller-facing flattening of [`Self::classify`]: a scoring failure is
    /// logged with a preview of the offending text and degrades to
    /// [`SentimentLabel::Error`], so one bad record never aborts a batch.
    pub fn label(&self, text: &str) -> SentimentLabel {
        match self.classify(text) {
            Ok(label) => label,
            Err(err) => {
                warn!(error = %err, text = %preview(text), "sentiment scoring failed");
                SentimentLabel::Error
            }
        }
    }
}

fn preview(text: &str) -> String {
    let mut out: String = text.chars().take(PREVIEW_CHARS).collect();
    if text.chars().count() > PREVIEW_CHARS {
        out.push_str("...");
    }
    out
}

#[cfg(test)]
mod tests {
    use polarity_lexicons::SentimentLexicon;

    use super::*;

    fn classifier() -> SentimentClassifier {
        let mut lexicon = SentimentLexicon::default();
        lexicon.insert_term("great", 3.0);
        lexicon.insert_term("awful", -3.0);
        lexicon.insert_negation("not");
        SentimentClassifier::new(PolarityScorer::new(lexicon))
    }

    #[test]
    fn sign_rule_maps_to_labels() {
        let classifier = classifier();
        assert_eq!(
            classifier.classify("great").unwrap(),
            SentimentLabel::Positive
        );
        assert_eq!(
            classifier.classify("awful").unwrap(),
            SentimentLabel::Negative
        );
        assert_eq!(
            classifier.classify("great awful").unwrap(),
            SentimentLabel::Neutral
        );
    }

    #[test]
    fn empty_text_is_neutral_never_error() {
        assert_eq!(classifier().classify("").unwrap(), SentimentLabel::Neutral);
        assert_eq!(classifier().label(""), SentimentLabel::Neutral);
    }

    #[test]
    fn label_degrades_on_scoring_failure() {
        let mut lexicon = SentimentLexicon::default();
        lexicon.insert_term("great", 3.0);
        lexicon.insert_term("odd", f64::INFINITY);
        let classifier = SentimentClassifier::new(PolarityScorer::new(lexicon));
        assert_eq!(classifier.label("odd"), SentimentLabel::Error);
        // surrounding records are unaffected
        assert_eq!(classifier.label("great"), SentimentLabel::Positive);
    }

    #[test]
    fn preview_truncates_long_text() {
        let short = "brief";
        assert_eq!(preview(short), "brief");
        let long = "x".repeat(60);
        let cut = preview(&long);
        assert_eq!(cut.chars().count(), PREVIEW_CHARS + 3);
        assert!(cut.ends_with("..."));
    }
}
