//! Error types for review dataset ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading the review dataset.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Failed to open or read the CSV file.
    #[error("failed to read CSV {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    // === Column Errors ===
    /// The review column is absent from the dataset.
    #[error("required column {column:?} not found in {path}")]
    MissingColumn { column: String, path: PathBuf },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_column_display() {
        let err = IngestError::MissingColumn {
            column: "review".to_string(),
            path: PathBuf::from("/data/reviews.csv"),
        };
        assert_eq!(
            err.to_string(),
            "required column \"review\" not found in /data/reviews.csv"
        );
    }
}
