use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Sentiment category assigned to a review.
///
/// `Error` marks a record whose score could not be computed; it is a
/// first-class outcome so one bad record never aborts a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown sentiment label: {0:?}")]
pub struct ParseLabelError(pub String);

impl SentimentLabel {
    /// Maps a finite polarity score onto a label.
    ///
    /// Sign rule: `> 0.0` is positive, `< 0.0` is negative, `== 0.0` is
    /// neutral. Empty or signal-free text scores 0.0 and is therefore
    /// neutral, never an error.
    pub fn from_score(score: f64) -> Self {
        if score > 0.0 {
            SentimentLabel::Positive
        } else if score < 0.0 {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "positive",
            SentimentLabel::Negative => "negative",
            SentimentLabel::Neutral => "neutral",
            SentimentLabel::Error => "error",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SentimentLabel {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "positive" => Ok(SentimentLabel::Positive),
            "negative" => Ok(SentimentLabel::Negative),
            "neutral" => Ok(SentimentLabel::Neutral),
            "error" => Ok(SentimentLabel::Error),
            other => Err(ParseLabelError(other.to_string())),
        }
    }
}

/// Per-label tallies for a labeled batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelCounts {
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
    pub error: usize,
}

impl LabelCounts {
    pub fn record(&mut self, label: SentimentLabel) {
        match label {
            SentimentLabel::Positive => self.positive += 1,
            SentimentLabel::Negative => self.negative += 1,
            SentimentLabel::Neutral => self.neutral += 1,
            SentimentLabel::Error => self.error += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.positive + self.negative + self.neutral + self.error
    }

    pub fn error_count(&self) -> usize {
        self.error
    }

    pub fn has_errors(&self) -> bool {
        self.error > 0
    }
}
