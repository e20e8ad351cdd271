//! Review dataset ingestion.
//!
//! - **table**: CSV reading and review-column extraction
//! - **sample**: uniform random sampling with optional seeding

pub mod error;
pub mod sample;
pub mod table;

pub use error::{IngestError, Result};
pub use sample::{DEFAULT_SAMPLE_SIZE, SampleOptions, sample_records};
pub use table::{DEFAULT_REVIEW_COLUMN, ReviewTable, extract_reviews, read_review_table};
