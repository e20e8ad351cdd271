//! CLI library components for the polarity analyzer.

pub mod logging;
pub mod pipeline;
