//! Properties that hold for arbitrary input.

use polarity_normalize::TextNormalizer;
use proptest::prelude::*;

fn normalizer() -> TextNormalizer {
    TextNormalizer::with_defaults().expect("default resources")
}

proptest! {
    #[test]
    fn normalize_is_idempotent(input in ".*") {
        let normalizer = normalizer();
        let once = normalizer.normalize(&input);
        let twice = normalizer.normalize(&once);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn output_is_words_and_single_spaces(input in ".*") {
        let out = normalizer().normalize(&input);
        prop_assert!(!out.starts_with(' '));
        prop_assert!(!out.ends_with(' '));
        prop_assert!(!out.contains("  "));
        for ch in out.chars() {
            prop_assert!(
                ch.is_alphabetic() || ch == ' ',
                "unexpected char {:?} in {:?}",
                ch,
                out
            );
        }
        prop_assert_eq!(out.to_lowercase(), out);
    }

    #[test]
    fn ascii_case_does_not_matter(input in "[ -~]{0,200}") {
        let normalizer = normalizer();
        prop_assert_eq!(
            normalizer.normalize(&input),
            normalizer.normalize(&input.to_uppercase())
        );
    }
}
