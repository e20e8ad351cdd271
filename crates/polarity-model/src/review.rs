use serde::{Deserialize, Serialize};

use crate::label::SentimentLabel;

/// One row of review text as read from the dataset.
///
/// `index` is the position within the sampled batch (contiguous from zero
/// after sampling). Absent cells are coerced to the empty string at ingest,
/// so `text` is always present, possibly empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewRecord {
    pub index: usize,
    pub text: String,
}

impl ReviewRecord {
    pub fn new(index: usize, text: impl Into<String>) -> Self {
        Self {
            index,
            text: text.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Pipeline output for one record: the original text, its normalized form,
/// and the assigned label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledReview {
    pub index: usize,
    pub original: String,
    pub normalized: String,
    pub label: SentimentLabel,
}
