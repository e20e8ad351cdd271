pub mod label;
pub mod review;

pub use label::{LabelCounts, ParseLabelError, SentimentLabel};
pub use review::{LabeledReview, ReviewRecord};
