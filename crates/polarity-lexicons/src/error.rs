#![deny(unsafe_code)]

use std::path::PathBuf;

/// Load-time validation failures.
///
/// A corrupt resource is a broken deployment, so every variant is fatal at
/// startup rather than degraded around at runtime.
#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse CSV {name}: {message}")]
    Csv { name: String, message: String },

    #[error("{name}: no usable entries")]
    Empty { name: String },

    #[error("{name}: missing required column {column:?}")]
    MissingColumn { name: String, column: String },

    #[error("{name} line {line}: could not parse number {value:?}")]
    UnparsableNumber {
        name: String,
        line: usize,
        value: String,
    },

    #[error("{name} line {line}: non-finite weight for term {term:?}")]
    NonFiniteWeight {
        name: String,
        line: usize,
        term: String,
    },

    #[error("{name} line {line}: weight {weight} for term {term:?} outside [-4, 4]")]
    WeightOutOfRange {
        name: String,
        line: usize,
        term: String,
        weight: f64,
    },

    #[error("{name} line {line}: multiplier {multiplier} for term {term:?} must be positive")]
    NonPositiveMultiplier {
        name: String,
        line: usize,
        term: String,
        multiplier: f64,
    },

    #[error("{name} line {line}: duplicate term {term:?}")]
    DuplicateTerm {
        name: String,
        line: usize,
        term: String,
    },
}

impl LexiconError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
