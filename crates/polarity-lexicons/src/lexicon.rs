#![deny(unsafe_code)]

use std::collections::{HashMap, HashSet};

/// Term weights plus negation and intensifier side tables.
///
/// Term weights live in `[-WEIGHT_CEILING, WEIGHT_CEILING]`; the scorer
/// divides its mean matched weight by the ceiling to land in [-1, 1].
#[derive(Debug, Clone, Default)]
pub struct SentimentLexicon {
    terms: HashMap<String, f64>,
    negations: HashSet<String>,
    intensifiers: HashMap<String, f64>,
}

impl SentimentLexicon {
    pub const WEIGHT_CEILING: f64 = 4.0;

    /// Inserts a term weight without validation.
    ///
    /// The loaders validate ranges and finiteness; this entry point is for
    /// callers composing lexicons programmatically and accepts any value.
    pub fn insert_term(&mut self, term: impl Into<String>, weight: f64) {
        self.terms.insert(term.into(), weight);
    }

    pub fn insert_negation(&mut self, term: impl Into<String>) {
        self.negations.insert(term.into());
    }

    pub fn insert_intensifier(&mut self, term: impl Into<String>, multiplier: f64) {
        self.intensifiers.insert(term.into(), multiplier);
    }

    pub fn term_weight(&self, token: &str) -> Option<f64> {
        self.terms.get(token).copied()
    }

    pub fn is_negation(&self, token: &str) -> bool {
        self.negations.contains(token)
    }

    pub fn intensifier(&self, token: &str) -> Option<f64> {
        self.intensifiers.get(token).copied()
    }

    pub fn term_count(&self) -> usize {
        self.terms.len()
    }

    pub fn negation_count(&self) -> usize {
        self.negations.len()
    }

    pub fn intensifier_count(&self) -> usize {
        self.intensifiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Highest-weighted term; ties resolve to the lexicographically smallest
    /// term so reports stay deterministic.
    pub fn strongest_positive(&self) -> Option<(&str, f64)> {
        self.extreme_by(|candidate, best| {
            candidate.1 > best.1 || (candidate.1 == best.1 && candidate.0 < best.0)
        })
    }

    /// Lowest-weighted term; ties resolve as in [`Self::strongest_positive`].
    pub fn strongest_negative(&self) -> Option<(&str, f64)> {
        self.extreme_by(|candidate, best| {
            candidate.1 < best.1 || (candidate.1 == best.1 && candidate.0 < best.0)
        })
    }

    fn extreme_by<F>(&self, better: F) -> Option<(&str, f64)>
    where
        F: Fn((&str, f64), (&str, f64)) -> bool,
    {
        let mut best: Option<(&str, f64)> = None;
        for (term, &weight) in &self.terms {
            match best {
                Some(current) if !better((term.as_str(), weight), current) => {}
                _ => best = Some((term.as_str(), weight)),
            }
        }
        best
    }
}
