//! Review text normalization.
//!
//! Reduces raw review text to a lowercase, whitespace-separated token stream
//! stripped of markup, links, punctuation, digits, and stopwords, with emoji
//! spelled out as words. The stages run in a fixed order; see
//! [`TextNormalizer::normalize`].

mod emoji;
pub mod normalizer;

pub use normalizer::TextNormalizer;
