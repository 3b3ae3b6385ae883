//! Splits the input text into top and bottom meme captions.

use serde::Serialize;

/// Texts of three words or fewer go entirely to the bottom line
pub const SHORT_TEXT_WORDS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Caption {
    pub top: String,
    pub bottom: String,
}

/// Split at the floor midpoint of the whitespace-separated words.
///
/// Short texts are kept verbatim as the bottom line; longer ones are
/// rejoined with single spaces.
pub fn generate_caption(text: &str) -> Caption {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.len() <= SHORT_TEXT_WORDS {
        return Caption {
            top: String::new(),
            bottom: text.to_string(),
        };
    }
    let middle = words.len() / 2;
    Caption {
        top: words[..middle].join(" "),
        bottom: words[middle..].join(" "),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_goes_to_bottom() {
        assert_eq!(
            generate_caption("hello  there world"),
            Caption {
                top: String::new(),
                bottom: "hello  there world".to_string()
            }
        );
        assert_eq!(generate_caption("").bottom, "");
    }

    #[test]
    fn test_four_words_split_evenly() {
        let caption = generate_caption("a b c d");
        assert_eq!(caption.top, "a b");
        assert_eq!(caption.bottom, "c d");
    }

    #[test]
    fn test_odd_count_puts_extra_word_at_bottom() {
        let caption = generate_caption("one two   three four five");
        assert_eq!(caption.top, "one two");
        assert_eq!(caption.bottom, "three four five");
    }
}
