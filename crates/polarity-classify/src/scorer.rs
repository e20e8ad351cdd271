use polarity_lexicons::{LexiconError, SentimentLexicon, load_default_lexicon};
use unicode_segmentation::UnicodeSegmentation;

use crate::error::ClassifyError;

/// A negation flips the sign of the next matched term within this many
/// following tokens.
const NEGATION_WINDOW: usize = 3;

/// Bag-of-words polarity scoring over a weighted lexicon.
///
/// The mean adjusted weight of matched terms is normalized by the lexicon
/// weight ceiling, landing in [-1.0, 1.0]. Text with no matched term scores
/// exactly 0.0.
#[derive(Debug, Clone)]
pub struct PolarityScorer {
    lexicon: SentimentLexicon,
}

impl PolarityScorer {
    pub fn new(lexicon: SentimentLexicon) -> Self {
        Self { lexicon }
    }

    /// Scorer over the default lexicon. Honors the `POLARITY_LEXICON_DIR`
    /// override.
    pub fn with_defaults() -> Result<Self, LexiconError> {
        Ok(Self::new(load_default_lexicon()?))
    }

    /// Scores `text` in [-1.0, 1.0].
    ///
    /// Negations flip the next matched term inside a short window;
    /// intensifiers multiply it. A non-finite adjusted weight is an error,
    /// never a value.
    pub fn score(&self, text: &str) -> Result<f64, ClassifyError> {
        let mut sum = 0.0f64;
        let mut matched = 0usize;
        let mut negation_window = 0usize;
        let mut pending_multiplier: Option<f64> = None;

        for token in text.unicode_words() {
            if self.lexicon.is_negation(token) {
                negation_window = NEGATION_WINDOW;
                continue;
            }
            if let Some(multiplier) = self.lexicon.intensifier(token) {
                // intensifiers stack and do not consume the negation window
                pending_multiplier =
                    Some(pending_multiplier.map_or(multiplier, |m| m * multiplier));
                continue;
            }
            if let Some(weight) = self.lexicon.term_weight(token) {
                let mut adjusted = weight;
                if let Some(multiplier) = pending_multiplier.take() {
                    adjusted *= multiplier;
                }
                if negation_window > 0 {
                    adjusted = -adjusted;
                    negation_window = 0;
                }
                if !adjusted.is_finite() {
                    return Err(ClassifyError::NonFiniteWeight {
                        term: token.to_string(),
                    });
                }
                sum += adjusted;
                matched += 1;
            }
            if negation_window > 0 {
                negation_window -= 1;
            }
        }

        if matched == 0 {
            return Ok(0.0);
        }
        let mean = sum / matched as f64;
        Ok((mean / SentimentLexicon::WEIGHT_CEILING).clamp(-1.0, 1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scorer() -> PolarityScorer {
        let mut lexicon = SentimentLexicon::default();
        lexicon.insert_term("good", 2.0);
        lexicon.insert_term("great", 3.0);
        lexicon.insert_term("bad", -2.0);
        lexicon.insert_term("awful", -3.0);
        lexicon.insert_negation("not");
        lexicon.insert_intensifier("very", 1.5);
        PolarityScorer::new(lexicon)
    }

    #[test]
    fn empty_text_scores_exactly_zero() {
        assert_eq!(scorer().score("").unwrap(), 0.0);
        assert_eq!(scorer().score("   ").unwrap(), 0.0);
    }

    #[test]
    fn unmatched_text_scores_exactly_zero() {
        assert_eq!(scorer().score("walked to the shop").unwrap(), 0.0);
    }

    #[test]
    fn matched_terms_average_and_normalize() {
        assert_eq!(scorer().score("good").unwrap(), 0.5);
        assert_eq!(scorer().score("awful").unwrap(), -0.75);
        // (2 + 3) / 2 / 4
        assert_eq!(scorer().score("good great").unwrap(), 0.625);
    }

    #[test]
    fn balanced_text_scores_exactly_zero() {
        assert_eq!(scorer().score("good bad").unwrap(), 0.0);
    }

    #[test]
    fn negation_flips_within_window() {
        assert_eq!(scorer().score("not good").unwrap(), -0.5);
        assert_eq!(scorer().score("not so so good").unwrap(), -0.5);
    }

    #[test]
    fn negation_expires_past_window() {
        assert_eq!(scorer().score("not one two three good").unwrap(), 0.5);
    }

    #[test]
    fn negation_applies_once() {
        // first match consumes the flip
        assert_eq!(scorer().score("not good good").unwrap(), 0.0);
    }

    #[test]
    fn intensifier_scales_next_match() {
        assert_eq!(scorer().score("very good").unwrap(), 0.75);
        assert_eq!(scorer().score("not very good").unwrap(), -0.75);
    }

    #[test]
    fn intensifiers_stack_and_clamp() {
        // 2.0 * 1.5 * 1.5 = 4.5, mean / ceiling = 1.125, clamped
        assert_eq!(scorer().score("very very good").unwrap(), 1.0);
    }

    #[test]
    fn trailing_intensifier_is_ignored() {
        assert_eq!(scorer().score("good very").unwrap(), 0.5);
    }

    #[test]
    fn non_finite_weight_is_an_error() {
        let mut lexicon = SentimentLexicon::default();
        lexicon.insert_term("good", 2.0);
        lexicon.insert_term("odd", f64::NAN);
        let scorer = PolarityScorer::new(lexicon);
        assert_eq!(scorer.score("good").unwrap(), 0.5);
        let err = scorer.score("very odd").unwrap_err();
        assert_eq!(
            err,
            ClassifyError::NonFiniteWeight {
                term: "odd".to_string()
            }
        );
    }

    #[test]
    fn default_lexicon_scores_known_terms() {
        let scorer = PolarityScorer::with_defaults().expect("default lexicon");
        assert_eq!(scorer.score("love").unwrap(), 0.75);
        assert_eq!(scorer.score("terrible").unwrap(), -0.875);
        assert!(scorer.score("dont love").unwrap() < 0.0);
    }
}
