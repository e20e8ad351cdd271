use std::sync::LazyLock;

use polarity_lexicons::{LexiconError, PunctuationSet, StopwordSet, load_default_stopwords};
use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

use crate::emoji::spell_out_emoji;

// Non-greedy, and `.` does not cross newlines; an unclosed `<` is left for
// the punctuation stage.
static TAG_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<.*?>").expect("tag pattern"));

static URL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:http|https|ftp)://\S+").expect("url pattern"));

/// Deterministic text canonicalizer for sentiment scoring.
///
/// Built once at startup from explicit reference sets; instances hold no
/// mutable state, so one value can serve a whole batch.
#[derive(Debug, Clone)]
pub struct TextNormalizer {
    stopwords: StopwordSet,
    punctuation: PunctuationSet,
}

impl TextNormalizer {
    pub fn new(stopwords: StopwordSet, punctuation: PunctuationSet) -> Self {
        Self {
            stopwords,
            punctuation,
        }
    }

    /// Normalizer over the default English stopword list and the ASCII
    /// punctuation set. Honors the `POLARITY_LEXICON_DIR` override.
    pub fn with_defaults() -> Result<Self, LexiconError> {
        Ok(Self::new(load_default_stopwords()?, PunctuationSet::ascii()))
    }

    /// Applies the normalization stages in order:
    ///
    /// 1. lowercase
    /// 2. strip `<...>` markup
    /// 3. strip `http`/`https`/`ftp` URLs
    /// 4. spell out emoji as colon-wrapped names
    /// 5. delete punctuation characters (adjacent tokens merge)
    /// 6. replace remaining non-letter characters with spaces
    /// 7. drop stopword tokens and rejoin on single spaces
    ///
    /// Never fails; empty input yields an empty string.
    pub fn normalize(&self, text: &str) -> String {
        let lowered = text.to_lowercase();
        let untagged = TAG_PATTERN.replace_all(&lowered, "");
        let unlinked = URL_PATTERN.replace_all(&untagged, "");
        let spelled = spell_out_emoji(&unlinked);
        let unpunctuated: String = spelled
            .chars()
            .filter(|ch| !self.punctuation.contains(*ch))
            .collect();
        let letters: String = unpunctuated
            .chars()
            .map(|ch| {
                if ch.is_alphabetic() || ch.is_whitespace() {
                    ch
                } else {
                    ' '
                }
            })
            .collect();
        letters
            .unicode_words()
            .filter(|word| !self.stopwords.contains(word))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
