//! Text cleaning filter applied to transcript fragments.
//!
//! Caption tracks routinely contain emoji, non-breaking spaces, zero-width
//! characters, and uneven whitespace. The cleaner strips the non-textual
//! artifacts and collapses whitespace runs while leaving the words themselves
//! (case, punctuation, accented characters) untouched.

/// Options controlling the cleaning pass
#[derive(Debug, Clone)]
pub struct CleanOptions {
    /// Remove emoji and pictographic symbols
    pub strip_emoji: bool,
}

impl Default for CleanOptions {
    fn default() -> Self {
        Self { strip_emoji: true }
    }
}

/// Clean a text fragment with the default options (emoji stripping enabled)
pub fn clean(text: &str) -> String {
    clean_with(text, &CleanOptions::default())
}

/// Clean a text fragment: drop zero-width characters, optionally strip emoji,
/// and normalize all whitespace runs to single spaces (trimmed)
pub fn clean_with(text: &str, options: &CleanOptions) -> String {
    let mut kept = String::with_capacity(text.len());

    for ch in text.chars() {
        if is_zero_width(ch) {
            continue;
        }
        if options.strip_emoji && is_emoji(ch) {
            continue;
        }
        kept.push(ch);
    }

    // NBSP and friends count as whitespace, so the collapse also normalizes
    // encoding artifacts that survive the character filter.
    kept.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Zero-width characters that carry no visible text
fn is_zero_width(ch: char) -> bool {
    matches!(
        ch,
        '\u{200B}' // zero width space
        | '\u{200C}' // zero width non-joiner
        | '\u{200D}' // zero width joiner (emoji sequences)
        | '\u{FEFF}' // byte order mark
    )
}

/// Common emoji and pictographic code point ranges
fn is_emoji(ch: char) -> bool {
    matches!(ch,
        '\u{1F1E6}'..='\u{1F1FF}' // regional indicators (flags)
        | '\u{1F300}'..='\u{1F5FF}' // symbols and pictographs, skin tone modifiers
        | '\u{1F600}'..='\u{1F64F}' // emoticons
        | '\u{1F680}'..='\u{1F6FF}' // transport and map symbols
        | '\u{1F780}'..='\u{1F7FF}' // geometric shapes extended
        | '\u{1F900}'..='\u{1F9FF}' // supplemental symbols and pictographs
        | '\u{1FA70}'..='\u{1FAFF}' // symbols and pictographs extended-A
        | '\u{2600}'..='\u{26FF}' // miscellaneous symbols
        | '\u{2700}'..='\u{27BF}' // dingbats
        | '\u{231A}'..='\u{231B}' // watch, hourglass
        | '\u{23E9}'..='\u{23F3}' // media control symbols
        | '\u{23F8}'..='\u{23FA}'
        | '\u{2B05}'..='\u{2B07}' // emoji arrows
        | '\u{2B1B}'..='\u{2B1C}'
        | '\u{2B50}' // star
        | '\u{2B55}' // heavy large circle
        | '\u{20E3}' // combining keycap
        | '\u{FE0E}'..='\u{FE0F}' // variation selectors
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_ascii_is_untouched() {
        assert_eq!(clean("Hello world"), "Hello world");
    }

    #[test]
    fn test_case_and_punctuation_preserved() {
        assert_eq!(clean("It's ALIVE, really."), "It's ALIVE, really.");
    }

    #[test]
    fn test_emoji_removed() {
        assert_eq!(clean("Hi 😀"), "Hi");
        assert_eq!(clean("fire 🔥 tips"), "fire tips");
    }

    #[test]
    fn test_emoji_only_fragment_becomes_empty() {
        assert_eq!(clean("😀🚀✨"), "");
    }

    #[test]
    fn test_flag_sequences_removed() {
        assert_eq!(clean("made in 🇯🇵 Japan"), "made in Japan");
    }

    #[test]
    fn test_keycap_sequence_keeps_digit() {
        // "1" + variation selector + combining keycap
        assert_eq!(clean("step 1\u{FE0F}\u{20E3} done"), "step 1 done");
    }

    #[test]
    fn test_whitespace_runs_collapse() {
        assert_eq!(clean("  so   much \t space\n"), "so much space");
    }

    #[test]
    fn test_nbsp_and_zero_width_normalized() {
        assert_eq!(clean("a\u{00A0}b"), "a b");
        assert_eq!(clean("wo\u{200B}rd"), "word");
    }

    #[test]
    fn test_accented_text_preserved() {
        assert_eq!(clean("café naïve"), "café naïve");
    }

    #[test]
    fn test_emoji_stripping_can_be_disabled() {
        let options = CleanOptions { strip_emoji: false };
        assert_eq!(clean_with("Hi 😀", &options), "Hi 😀");
    }
}
