//! Keyword-frequency emotion detection, nudged by sentiment.

use super::lexicon::Lexicons;
use super::sentiment::SentimentScorer;
use super::tokenize::hyphenated_word_tokens;
use super::types::{Emotion, EmotionScore};
use std::sync::Arc;

/// Compound valence above which joy gets an extra count
pub const JOY_COMPOUND_THRESHOLD: f64 = 0.3;
/// Compound valence below which sadness gets an extra count
pub const SADNESS_COMPOUND_THRESHOLD: f64 = -0.3;
/// Negative proportion above which anger gets an extra count
pub const ANGER_NEGATIVE_THRESHOLD: f64 = 0.5;

pub struct EmotionDetector {
    lexicons: Arc<Lexicons>,
    scorer: Arc<dyn SentimentScorer>,
}

impl EmotionDetector {
    pub fn new(lexicons: Arc<Lexicons>, scorer: Arc<dyn SentimentScorer>) -> Self {
        Self { lexicons, scorer }
    }

    /// Detect emotions in `text`, highest score first.
    ///
    /// Never empty: falls back to a single `neutral` entry with score 1.0.
    /// Scores lie in (0, 1]; ties keep the fixed emotion order.
    pub fn detect_emotions(&self, text: &str) -> Vec<EmotionScore> {
        let lowered = text.to_lowercase();
        let tokens = hyphenated_word_tokens(&lowered);
        let keywords = self.lexicons.emotion_keywords();

        let mut counts = [0usize; Emotion::DETECTABLE.len()];
        for token in &tokens {
            for (slot, (_, words)) in counts.iter_mut().zip(keywords) {
                if words.contains(token) {
                    *slot += 1;
                }
            }
        }
        // Two-word keywords such as "mind blown"
        for pair in tokens.windows(2) {
            let bigram = format!("{} {}", pair[0], pair[1]);
            for (slot, (_, words)) in counts.iter_mut().zip(keywords) {
                if words.contains(&bigram.as_str()) {
                    *slot += 1;
                }
            }
        }

        let sentiment = self.scorer.polarity_scores(text);
        if sentiment.compound > JOY_COMPOUND_THRESHOLD {
            counts[index_of(Emotion::Joy)] += 1;
        } else if sentiment.compound < SADNESS_COMPOUND_THRESHOLD {
            counts[index_of(Emotion::Sadness)] += 1;
        }
        if sentiment.negative > ANGER_NEGATIVE_THRESHOLD {
            counts[index_of(Emotion::Anger)] += 1;
        }

        let max_count = counts.iter().copied().max().unwrap_or(0).max(1) as f64;
        let mut scores: Vec<EmotionScore> = keywords
            .iter()
            .zip(counts)
            .filter(|(_, count)| *count > 0)
            .map(|((label, _), count)| EmotionScore {
                label: *label,
                score: (count as f64 / max_count * 0.8 + 0.2).min(1.0),
            })
            .collect();

        if scores.is_empty() {
            return vec![EmotionScore {
                label: Emotion::Neutral,
                score: 1.0,
            }];
        }

        // Stable sort keeps the fixed order for ties
        scores.sort_by(|a, b| b.score.total_cmp(&a.score));
        scores
    }
}

fn index_of(emotion: Emotion) -> usize {
    Emotion::DETECTABLE
        .iter()
        .position(|e| *e == emotion)
        .unwrap_or(0)
}
