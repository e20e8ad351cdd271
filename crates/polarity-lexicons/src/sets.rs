#![deny(unsafe_code)]

use std::collections::HashSet;

/// Words removed from text before sentiment scoring.
///
/// Stored lowercase. Lookups are exact, so callers pass already-lowercased
/// tokens (the normalizer lowercases in its first stage).
#[derive(Debug, Clone, Default)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|word| word.as_ref().trim().to_lowercase())
            .filter(|word| !word.is_empty())
            .collect();
        Self { words }
    }

    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Characters deleted outright during normalization.
#[derive(Debug, Clone)]
pub struct PunctuationSet {
    chars: HashSet<char>,
}

impl PunctuationSet {
    /// The 32 ASCII punctuation characters.
    pub fn ascii() -> Self {
        let chars = ('!'..='~').filter(char::is_ascii_punctuation).collect();
        Self { chars }
    }

    pub fn from_chars<I>(chars: I) -> Self
    where
        I: IntoIterator<Item = char>,
    {
        Self {
            chars: chars.into_iter().collect(),
        }
    }

    pub fn contains(&self, ch: char) -> bool {
        self.chars.contains(&ch)
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

impl Default for PunctuationSet {
    fn default() -> Self {
        Self::ascii()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stopwords_lowercase_on_construction() {
        let set = StopwordSet::from_words(["The", " AND ", "", "not"]);
        assert_eq!(set.len(), 3);
        assert!(set.contains("the"));
        assert!(set.contains("and"));
        assert!(set.contains("not"));
        assert!(!set.contains("quick"));
    }

    #[test]
    fn ascii_punctuation_has_all_32() {
        let set = PunctuationSet::ascii();
        assert_eq!(set.len(), 32);
        for ch in "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~".chars() {
            assert!(set.contains(ch), "missing {ch:?}");
        }
        assert!(!set.contains('a'));
        assert!(!set.contains(' '));
        assert!(!set.contains('¡'));
    }
}
