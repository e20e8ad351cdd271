use unicode_segmentation::UnicodeSegmentation;

/// Replaces each emoji grapheme with its colon-wrapped CLDR name.
///
/// Names are lowercased so this stage cannot reintroduce uppercase after
/// case folding. Multi-codepoint sequences (skin tones, ZWJ families) arrive
/// as whole grapheme clusters; symbols with no known name pass through for
/// the later stages to scrub.
pub(crate) fn spell_out_emoji(text: &str) -> String {
    if text.is_ascii() {
        return text.to_string();
    }
    let mut out = String::with_capacity(text.len());
    for grapheme in text.graphemes(true) {
        match emojis::get(grapheme) {
            Some(emoji) => {
                out.push(':');
                out.push_str(&emoji.name().to_lowercase());
                out.push(':');
            }
            None => out.push_str(grapheme),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_emoji_spelled_out() {
        assert_eq!(spell_out_emoji("😊"), ":smiling face with smiling eyes:");
        assert_eq!(spell_out_emoji("ok 👍"), "ok :thumbs up:");
    }

    #[test]
    fn plain_text_unchanged() {
        assert_eq!(spell_out_emoji("just words"), "just words");
        assert_eq!(spell_out_emoji("café"), "café");
    }

    #[test]
    fn names_are_lowercased() {
        assert_eq!(spell_out_emoji("🦖"), ":t-rex:");
    }

    #[test]
    fn adjacent_emoji_each_expand() {
        assert_eq!(spell_out_emoji("😊😊"), ":smiling face with smiling eyes::smiling face with smiling eyes:");
    }
}
