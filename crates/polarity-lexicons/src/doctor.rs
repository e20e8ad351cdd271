#![deny(unsafe_code)]

use crate::lexicon::SentimentLexicon;
use crate::loaders::LexiconSource;
use crate::sets::StopwordSet;

#[derive(Debug, Clone, serde::Serialize)]
pub struct DoctorReport {
    pub schema: String,
    pub schema_version: u32,
    pub source: String,
    pub counts: DoctorCounts,
    pub extremes: WeightExtremes,
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct DoctorCounts {
    pub stopwords: usize,
    pub terms: usize,
    pub negations: usize,
    pub intensifiers: usize,
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct TermWeight {
    pub term: String,
    pub weight: f64,
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct WeightExtremes {
    pub strongest_positive: Option<TermWeight>,
    pub strongest_negative: Option<TermWeight>,
}

impl DoctorReport {
    pub fn collect(
        source: &LexiconSource,
        stopwords: &StopwordSet,
        lexicon: &SentimentLexicon,
    ) -> Self {
        let to_term_weight = |(term, weight): (&str, f64)| TermWeight {
            term: term.to_string(),
            weight,
        };
        Self {
            schema: "polarity.lexicon-doctor".to_string(),
            schema_version: 1,
            source: source.describe(),
            counts: DoctorCounts {
                stopwords: stopwords.len(),
                terms: lexicon.term_count(),
                negations: lexicon.negation_count(),
                intensifiers: lexicon.intensifier_count(),
            },
            extremes: WeightExtremes {
                strongest_positive: lexicon.strongest_positive().map(to_term_weight),
                strongest_negative: lexicon.strongest_negative().map(to_term_weight),
            },
        }
    }
}
