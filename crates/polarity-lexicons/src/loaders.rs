#![deny(unsafe_code)]

use std::path::{Path, PathBuf};

use csv::ReaderBuilder;
use tracing::debug;

use crate::error::LexiconError;
use crate::lexicon::SentimentLexicon;
use crate::sets::StopwordSet;

pub const STOPWORDS_FILE: &str = "stopwords_en.txt";
pub const TERMS_FILE: &str = "sentiment_terms.csv";
pub const INTENSIFIERS_FILE: &str = "intensifiers.csv";
pub const NEGATIONS_FILE: &str = "negations.txt";

const LEXICON_ENV_VAR: &str = "POLARITY_LEXICON_DIR";

const EMBEDDED_STOPWORDS: &str = include_str!("../data/stopwords_en.txt");
const EMBEDDED_TERMS: &str = include_str!("../data/sentiment_terms.csv");
const EMBEDDED_INTENSIFIERS: &str = include_str!("../data/intensifiers.csv");
const EMBEDDED_NEGATIONS: &str = include_str!("../data/negations.txt");

/// Where reference data is read from for this process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexiconSource {
    Embedded,
    Directory(PathBuf),
}

impl LexiconSource {
    pub fn describe(&self) -> String {
        match self {
            LexiconSource::Embedded => "embedded".to_string(),
            LexiconSource::Directory(dir) => dir.display().to_string(),
        }
    }
}

/// Resolves the active source: the `POLARITY_LEXICON_DIR` directory if set,
/// otherwise the data embedded at compile time.
pub fn active_source() -> LexiconSource {
    match std::env::var(LEXICON_ENV_VAR) {
        Ok(dir) if !dir.trim().is_empty() => LexiconSource::Directory(PathBuf::from(dir)),
        _ => LexiconSource::Embedded,
    }
}

pub fn load_default_stopwords() -> Result<StopwordSet, LexiconError> {
    let set = match active_source() {
        LexiconSource::Embedded => parse_stopwords(EMBEDDED_STOPWORDS, STOPWORDS_FILE)?,
        LexiconSource::Directory(dir) => load_stopwords_from(&dir.join(STOPWORDS_FILE))?,
    };
    debug!(stopword_count = set.len(), "loaded stopword set");
    Ok(set)
}

pub fn load_default_lexicon() -> Result<SentimentLexicon, LexiconError> {
    let lexicon = match active_source() {
        LexiconSource::Embedded => {
            let mut lexicon = SentimentLexicon::default();
            parse_terms_into(&mut lexicon, EMBEDDED_TERMS, TERMS_FILE)?;
            parse_intensifiers_into(&mut lexicon, EMBEDDED_INTENSIFIERS, INTENSIFIERS_FILE)?;
            parse_negations_into(&mut lexicon, EMBEDDED_NEGATIONS, NEGATIONS_FILE)?;
            lexicon
        }
        LexiconSource::Directory(dir) => load_lexicon_from(&dir)?,
    };
    debug!(
        term_count = lexicon.term_count(),
        negation_count = lexicon.negation_count(),
        intensifier_count = lexicon.intensifier_count(),
        "loaded sentiment lexicon"
    );
    Ok(lexicon)
}

pub fn load_stopwords_from(path: &Path) -> Result<StopwordSet, LexiconError> {
    let contents = read_resource(path)?;
    parse_stopwords(&contents, &path.display().to_string())
}

/// Loads the three lexicon files from `dir`, validating each.
pub fn load_lexicon_from(dir: &Path) -> Result<SentimentLexicon, LexiconError> {
    let mut lexicon = SentimentLexicon::default();

    let terms_path = dir.join(TERMS_FILE);
    let contents = read_resource(&terms_path)?;
    parse_terms_into(&mut lexicon, &contents, &terms_path.display().to_string())?;

    let intensifiers_path = dir.join(INTENSIFIERS_FILE);
    let contents = read_resource(&intensifiers_path)?;
    parse_intensifiers_into(
        &mut lexicon,
        &contents,
        &intensifiers_path.display().to_string(),
    )?;

    let negations_path = dir.join(NEGATIONS_FILE);
    let contents = read_resource(&negations_path)?;
    parse_negations_into(&mut lexicon, &contents, &negations_path.display().to_string())?;

    Ok(lexicon)
}

fn read_resource(path: &Path) -> Result<String, LexiconError> {
    std::fs::read_to_string(path).map_err(|source| LexiconError::io(path, source))
}

fn parse_stopwords(contents: &str, name: &str) -> Result<StopwordSet, LexiconError> {
    let words: Vec<&str> = contents
        .lines()
        .map(|line| line.trim_matches('\u{feff}').trim())
        .filter(|line| !line.is_empty())
        .collect();
    let set = StopwordSet::from_words(words);
    if set.is_empty() {
        return Err(LexiconError::Empty {
            name: name.to_string(),
        });
    }
    Ok(set)
}

fn parse_terms_into(
    lexicon: &mut SentimentLexicon,
    contents: &str,
    name: &str,
) -> Result<(), LexiconError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .from_reader(contents.as_bytes());
    let headers = read_headers(&mut reader, name)?;
    let term_idx = find_column(&headers, name, "term")?;
    let weight_idx = find_column(&headers, name, "weight")?;

    let mut count = 0usize;
    for (idx, record) in reader.records().enumerate() {
        let line = idx + 2;
        let record = record.map_err(|e| LexiconError::Csv {
            name: name.to_string(),
            message: e.to_string(),
        })?;
        let term = record.get(term_idx).unwrap_or("").trim().to_lowercase();
        if term.is_empty() {
            continue;
        }
        let raw = record.get(weight_idx).unwrap_or("").trim();
        let weight: f64 = raw.parse().map_err(|_| LexiconError::UnparsableNumber {
            name: name.to_string(),
            line,
            value: raw.to_string(),
        })?;
        if !weight.is_finite() {
            return Err(LexiconError::NonFiniteWeight {
                name: name.to_string(),
                line,
                term,
            });
        }
        if weight.abs() > SentimentLexicon::WEIGHT_CEILING {
            return Err(LexiconError::WeightOutOfRange {
                name: name.to_string(),
                line,
                term,
                weight,
            });
        }
        if lexicon.term_weight(&term).is_some() {
            return Err(LexiconError::DuplicateTerm {
                name: name.to_string(),
                line,
                term,
            });
        }
        lexicon.insert_term(term, weight);
        count += 1;
    }
    if count == 0 {
        return Err(LexiconError::Empty {
            name: name.to_string(),
        });
    }
    Ok(())
}

fn parse_intensifiers_into(
    lexicon: &mut SentimentLexicon,
    contents: &str,
    name: &str,
) -> Result<(), LexiconError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .from_reader(contents.as_bytes());
    let headers = read_headers(&mut reader, name)?;
    let term_idx = find_column(&headers, name, "term")?;
    let multiplier_idx = find_column(&headers, name, "multiplier")?;

    let mut count = 0usize;
    for (idx, record) in reader.records().enumerate() {
        let line = idx + 2;
        let record = record.map_err(|e| LexiconError::Csv {
            name: name.to_string(),
            message: e.to_string(),
        })?;
        let term = record.get(term_idx).unwrap_or("").trim().to_lowercase();
        if term.is_empty() {
            continue;
        }
        let raw = record.get(multiplier_idx).unwrap_or("").trim();
        let multiplier: f64 = raw.parse().map_err(|_| LexiconError::UnparsableNumber {
            name: name.to_string(),
            line,
            value: raw.to_string(),
        })?;
        if !multiplier.is_finite() || multiplier <= 0.0 {
            return Err(LexiconError::NonPositiveMultiplier {
                name: name.to_string(),
                line,
                term,
                multiplier,
            });
        }
        if lexicon.intensifier(&term).is_some() {
            return Err(LexiconError::DuplicateTerm {
                name: name.to_string(),
                line,
                term,
            });
        }
        lexicon.insert_intensifier(term, multiplier);
        count += 1;
    }
    if count == 0 {
        return Err(LexiconError::Empty {
            name: name.to_string(),
        });
    }
    Ok(())
}

fn parse_negations_into(
    lexicon: &mut SentimentLexicon,
    contents: &str,
    name: &str,
) -> Result<(), LexiconError> {
    let mut count = 0usize;
    for (idx, line) in contents.lines().enumerate() {
        let term = line.trim_matches('\u{feff}').trim().to_lowercase();
        if term.is_empty() {
            continue;
        }
        if lexicon.is_negation(&term) {
            return Err(LexiconError::DuplicateTerm {
                name: name.to_string(),
                line: idx + 1,
                term,
            });
        }
        lexicon.insert_negation(term);
        count += 1;
    }
    if count == 0 {
        return Err(LexiconError::Empty {
            name: name.to_string(),
        });
    }
    Ok(())
}

fn read_headers<R: std::io::Read>(
    reader: &mut csv::Reader<R>,
    name: &str,
) -> Result<csv::StringRecord, LexiconError> {
    Ok(reader
        .headers()
        .map_err(|e| LexiconError::Csv {
            name: name.to_string(),
            message: e.to_string(),
        })?
        .clone())
}

fn find_column(
    headers: &csv::StringRecord,
    name: &str,
    wanted: &str,
) -> Result<usize, LexiconError> {
    headers
        .iter()
        .position(|header| {
            header
                .trim_matches('\u{feff}')
                .trim()
                .eq_ignore_ascii_case(wanted)
        })
        .ok_or_else(|| LexiconError::MissingColumn {
            name: name.to_string(),
            column: wanted.to_string(),
        })
}
