//! Word and sentence segmentation helpers.

use unicode_segmentation::UnicodeSegmentation;

/// Split text into word tokens, with punctuation as separate tokens.
///
/// Whitespace runs are dropped; contractions such as "don't" stay whole.
pub fn word_tokens(text: &str) -> Vec<&str> {
    text.split_word_bounds()
        .filter(|t| !t.trim().is_empty())
        .collect()
}

/// Like [`word_tokens`], but `word-word` runs with no surrounding space
/// stay a single token, so "mind-blowing" is not split at the hyphen.
pub fn hyphenated_word_tokens(text: &str) -> Vec<&str> {
    let bounds: Vec<(usize, &str)> = text.split_word_bound_indices().collect();
    let mut tokens = Vec::with_capacity(bounds.len());
    let mut i = 0;
    while i < bounds.len() {
        let (start, token) = bounds[i];
        i += 1;
        if token.trim().is_empty() {
            continue;
        }
        if !starts_like_word(token) {
            tokens.push(token);
            continue;
        }
        let mut end = start + token.len();
        while i + 1 < bounds.len() && bounds[i].1 == "-" && starts_like_word(bounds[i + 1].1) {
            let (next_start, next) = bounds[i + 1];
            end = next_start + next.len();
            i += 2;
        }
        tokens.push(&text[start..end]);
    }
    tokens
}

fn starts_like_word(token: &str) -> bool {
    token.chars().next().is_some_and(char::is_alphanumeric)
}

/// Split text into trimmed, non-empty sentences.
pub fn sentences(text: &str) -> Vec<&str> {
    text.unicode_sentences()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

pub fn is_alphanumeric_token(token: &str) -> bool {
    !token.is_empty() && token.chars().all(char::is_alphanumeric)
}
