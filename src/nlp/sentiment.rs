//! Sentiment scoring.
//!
//! `SentimentScorer` is the seam the analyzers depend on. Two strategies:
//! - `VaderSentimentScorer` (default) wraps the `vader_sentiment` crate and
//!   its full VADER lexicon.
//! - `LexiconSentimentScorer` applies the same VADER rules to a caller
//!   supplied word -> valence table: boosters/dampeners in the three
//!   preceding words, ALL-CAPS emphasis when the text mixes case, negation
//!   flipping, contrastive "but", and "!"/"?" emphasis.
//!
//! ```
//! use meme_mind::nlp::sentiment::{SentimentScorer, VaderSentimentScorer};
//!
//! let scorer = VaderSentimentScorer;
//! assert!(scorer.polarity_scores("What a great day").compound > 0.05);
//! assert!(scorer.polarity_scores("This is not great").compound < 0.0);
//! ```

use super::types::PolarityScores;
use std::collections::{HashMap, HashSet};

/// Scores text into compound/positive/negative/neutral valence.
pub trait SentimentScorer: Send + Sync {
    fn polarity_scores(&self, text: &str) -> PolarityScores;
}

/// VADER with its stock lexicon and emoji table.
#[derive(Debug, Clone, Copy, Default)]
pub struct VaderSentimentScorer;

impl SentimentScorer for VaderSentimentScorer {
    fn polarity_scores(&self, text: &str) -> PolarityScores {
        if text.trim().is_empty() {
            return PolarityScores::default();
        }
        let analyzer = vader_sentiment::SentimentIntensityAnalyzer::new();
        let scores = analyzer.polarity_scores(text);
        let get = |key: &str| scores.get(key).copied().unwrap_or(0.0);
        PolarityScores {
            compound: round_to(get("compound"), 4),
            positive: round_to(get("pos"), 3),
            negative: round_to(get("neg"), 3),
            neutral: round_to(get("neu"), 3),
        }
    }
}

const BOOST_INCREMENT: f64 = 0.293;
const BOOST_DECREMENT: f64 = -0.293;
const CAPS_INCREMENT: f64 = 0.733;
const NEGATION_SCALAR: f64 = -0.74;
const NORMALIZATION_ALPHA: f64 = 15.0;
const EXCLAMATION_WEIGHT: f64 = 0.292;
const MAX_EXCLAMATIONS: usize = 4;
const QUESTION_WEIGHT: f64 = 0.18;
const QUESTION_CAP: f64 = 0.96;

const BOOSTERS: &[(&str, f64)] = &[
    ("absolutely", BOOST_INCREMENT),
    ("amazingly", BOOST_INCREMENT),
    ("completely", BOOST_INCREMENT),
    ("deeply", BOOST_INCREMENT),
    ("enormously", BOOST_INCREMENT),
    ("entirely", BOOST_INCREMENT),
    ("especially", BOOST_INCREMENT),
    ("exceptionally", BOOST_INCREMENT),
    ("extremely", BOOST_INCREMENT),
    ("fully", BOOST_INCREMENT),
    ("greatly", BOOST_INCREMENT),
    ("highly", BOOST_INCREMENT),
    ("hugely", BOOST_INCREMENT),
    ("incredibly", BOOST_INCREMENT),
    ("intensely", BOOST_INCREMENT),
    ("majorly", BOOST_INCREMENT),
    ("more", BOOST_INCREMENT),
    ("most", BOOST_INCREMENT),
    ("particularly", BOOST_INCREMENT),
    ("purely", BOOST_INCREMENT),
    ("quite", BOOST_INCREMENT),
    ("really", BOOST_INCREMENT),
    ("remarkably", BOOST_INCREMENT),
    ("so", BOOST_INCREMENT),
    ("substantially", BOOST_INCREMENT),
    ("thoroughly", BOOST_INCREMENT),
    ("totally", BOOST_INCREMENT),
    ("tremendously", BOOST_INCREMENT),
    ("truly", BOOST_INCREMENT),
    ("unbelievably", BOOST_INCREMENT),
    ("very", BOOST_INCREMENT),
    ("almost", BOOST_DECREMENT),
    ("barely", BOOST_DECREMENT),
    ("hardly", BOOST_DECREMENT),
    ("less", BOOST_DECREMENT),
    ("little", BOOST_DECREMENT),
    ("marginally", BOOST_DECREMENT),
    ("occasionally", BOOST_DECREMENT),
    ("partly", BOOST_DECREMENT),
    ("scarcely", BOOST_DECREMENT),
    ("slightly", BOOST_DECREMENT),
    ("somewhat", BOOST_DECREMENT),
];

const NEGATIONS: &[&str] = &[
    "aint", "ain't", "arent", "aren't", "cannot", "cant", "can't", "couldnt", "couldn't",
    "didnt", "didn't", "doesnt", "doesn't", "dont", "don't", "hadnt", "hadn't", "hasnt",
    "hasn't", "havent", "haven't", "isnt", "isn't", "neither", "never", "no", "nobody", "none",
    "nope", "nor", "not", "nothing", "nowhere", "shouldnt", "shouldn't", "wasnt", "wasn't",
    "werent", "weren't", "without", "wont", "won't", "wouldnt", "wouldn't",
];

/// VADER rules over a custom valence lexicon.
#[derive(Debug, Clone)]
pub struct LexiconSentimentScorer {
    lexicon: HashMap<String, f64>,
    boosters: HashMap<&'static str, f64>,
    negations: HashSet<&'static str>,
}

impl LexiconSentimentScorer {
    /// Use a custom word -> valence table (roughly -4.0..=4.0).
    pub fn with_lexicon(lexicon: HashMap<String, f64>) -> Self {
        Self {
            lexicon,
            boosters: BOOSTERS.iter().copied().collect(),
            negations: NEGATIONS.iter().copied().collect(),
        }
    }

    pub fn lexicon_size(&self) -> usize {
        self.lexicon.len()
    }

    fn is_negation(&self, lower: &str) -> bool {
        self.negations.contains(lower) || lower.contains("n't")
    }

    /// Booster contribution of `prev` on a word carrying `valence`.
    fn booster_scalar(&self, prev: &str, prev_lower: &str, valence: f64, cap_diff: bool) -> f64 {
        let Some(&base) = self.boosters.get(prev_lower) else {
            return 0.0;
        };
        let mut scalar = if valence < 0.0 { -base } else { base };
        if cap_diff && is_all_caps(prev) {
            scalar += if valence > 0.0 {
                CAPS_INCREMENT
            } else {
                -CAPS_INCREMENT
            };
        }
        scalar
    }

    fn word_valence(&self, words: &[&str], lowered: &[String], i: usize, cap_diff: bool) -> f64 {
        let lower = lowered[i].as_str();
        if self.boosters.contains_key(lower) {
            return 0.0;
        }
        if lower == "kind" && lowered.get(i + 1).is_some_and(|n| n == "of") {
            return 0.0;
        }
        let Some(&base) = self.lexicon.get(lower) else {
            return 0.0;
        };

        let mut valence = base;
        if cap_diff && is_all_caps(words[i]) {
            valence += CAPS_INCREMENT.copysign(valence);
        }

        for distance in 1..=3 {
            if i < distance {
                break;
            }
            let j = i - distance;
            // Words with their own valence neither boost nor negate
            if self.lexicon.contains_key(lowered[j].as_str()) {
                continue;
            }
            let mut scalar = self.booster_scalar(words[j], &lowered[j], valence, cap_diff);
            match distance {
                2 => scalar *= 0.95,
                3 => scalar *= 0.9,
                _ => {}
            }
            valence += scalar;
            if self.is_negation(&lowered[j]) {
                valence *= NEGATION_SCALAR;
            }
        }
        valence
    }
}

impl SentimentScorer for LexiconSentimentScorer {
    fn polarity_scores(&self, text: &str) -> PolarityScores {
        let words: Vec<&str> = text.split_whitespace().map(strip_punctuation).collect();
        if words.is_empty() {
            return PolarityScores::default();
        }
        let lowered: Vec<String> = words.iter().map(|w| w.to_lowercase()).collect();

        let caps = words.iter().filter(|w| is_all_caps(w)).count();
        let cap_diff = caps > 0 && caps < words.len();

        let mut sentiments: Vec<f64> = (0..words.len())
            .map(|i| self.word_valence(&words, &lowered, i, cap_diff))
            .collect();

        // Contrastive conjunction shifts weight to the second clause
        if let Some(but) = lowered.iter().position(|w| w == "but") {
            for (k, s) in sentiments.iter_mut().enumerate() {
                if k < but {
                    *s *= 0.5;
                } else if k > but {
                    *s *= 1.5;
                }
            }
        }

        score_valence(&sentiments, punctuation_emphasis(text))
    }
}

fn strip_punctuation(token: &str) -> &str {
    let stripped = token.trim_matches(|c: char| c.is_ascii_punctuation() && c != '\'');
    // Pure punctuation tokens (emoticons) are kept as-is
    if stripped.is_empty() { token } else { stripped }
}

fn is_all_caps(word: &str) -> bool {
    word.chars().any(char::is_alphabetic) && !word.chars().any(char::is_lowercase)
}

fn punctuation_emphasis(text: &str) -> f64 {
    let exclamations = text.matches('!').count().min(MAX_EXCLAMATIONS);
    let questions = text.matches('?').count();
    let question_amp = match questions {
        0 | 1 => 0.0,
        2..=3 => questions as f64 * QUESTION_WEIGHT,
        _ => QUESTION_CAP,
    };
    exclamations as f64 * EXCLAMATION_WEIGHT + question_amp
}

fn normalize(score: f64) -> f64 {
    (score / (score * score + NORMALIZATION_ALPHA).sqrt()).clamp(-1.0, 1.0)
}

fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

fn score_valence(sentiments: &[f64], punct: f64) -> PolarityScores {
    let mut sum: f64 = sentiments.iter().sum();
    if sum > 0.0 {
        sum += punct;
    } else if sum < 0.0 {
        sum -= punct;
    }
    let compound = normalize(sum);

    let mut pos_sum = 0.0;
    let mut neg_sum = 0.0;
    let mut neu_count = 0.0;
    for &s in sentiments {
        if s > 0.0 {
            pos_sum += s + 1.0;
        } else if s < 0.0 {
            neg_sum += s - 1.0;
        } else {
            neu_count += 1.0;
        }
    }
    if pos_sum > neg_sum.abs() {
        pos_sum += punct;
    } else if pos_sum < neg_sum.abs() {
        neg_sum -= punct;
    }

    let total = pos_sum + neg_sum.abs() + neu_count;
    if total == 0.0 {
        return PolarityScores::default();
    }
    PolarityScores {
        compound: round_to(compound, 4),
        positive: round_to((pos_sum / total).abs(), 3),
        negative: round_to((neg_sum / total).abs(), 3),
        neutral: round_to((neu_count / total).abs(), 3),
    }
}
