use thiserror::Error;

/// Scoring failures.
///
/// Loader validation rejects bad weights up front, so this only fires when a
/// lexicon was assembled programmatically with degenerate values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassifyError {
    #[error("non-finite adjusted weight for term {term:?}")]
    NonFiniteWeight { term: String },
}
