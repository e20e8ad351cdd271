#![deny(unsafe_code)]

pub mod doctor;
pub mod error;
pub mod lexicon;
pub mod loaders;
pub mod sets;

pub use crate::doctor::DoctorReport;
pub use crate::error::LexiconError;
pub use crate::lexicon::SentimentLexicon;
pub use crate::loaders::{
    LexiconSource, active_source, load_default_lexicon, load_default_stopwords, load_lexicon_from,
    load_stopwords_from,
};
pub use crate::sets::{PunctuationSet, StopwordSet};
