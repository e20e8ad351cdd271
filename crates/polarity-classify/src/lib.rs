pub mod classifier;
pub mod error;
pub mod scorer;

pub use classifier::SentimentClassifier;
pub use error::ClassifyError;
pub use scorer::PolarityScorer;
