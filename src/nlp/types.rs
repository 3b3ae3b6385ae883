//! Types for text analysis results and meme parameters.

use serde::{Deserialize, Serialize};

/// Emotion categories detected by keyword frequency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Joy,
    Sadness,
    Anger,
    Fear,
    Surprise,
    Disgust,
    Confusion,
    /// Emitted alone when nothing else was detected
    Neutral,
}

impl Emotion {
    /// Fixed detection order; ties in score keep this order.
    pub const DETECTABLE: [Emotion; 7] = [
        Emotion::Joy,
        Emotion::Sadness,
        Emotion::Anger,
        Emotion::Fear,
        Emotion::Surprise,
        Emotion::Disgust,
        Emotion::Confusion,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Emotion::Joy => "joy",
            Emotion::Sadness => "sadness",
            Emotion::Anger => "anger",
            Emotion::Fear => "fear",
            Emotion::Surprise => "surprise",
            Emotion::Disgust => "disgust",
            Emotion::Confusion => "confusion",
            Emotion::Neutral => "neutral",
        }
    }
}

/// Topic categories recognised by the context analyzer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    Politics,
    Technology,
    Entertainment,
    Sports,
    Business,
    Science,
    SocialMedia,
    Memes,
    General,
}

impl Topic {
    pub const CATEGORIES: [Topic; 8] = [
        Topic::Politics,
        Topic::Technology,
        Topic::Entertainment,
        Topic::Sports,
        Topic::Business,
        Topic::Science,
        Topic::SocialMedia,
        Topic::Memes,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Topic::Politics => "politics",
            Topic::Technology => "technology",
            Topic::Entertainment => "entertainment",
            Topic::Sports => "sports",
            Topic::Business => "business",
            Topic::Science => "science",
            Topic::SocialMedia => "social_media",
            Topic::Memes => "memes",
            Topic::General => "general",
        }
    }
}

/// Overall tone of a text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Inquisitive,
    Excited,
    Humorous,
    Surprising,
    SeriousNegative,
    Enthusiastic,
    Neutral,
}

impl Tone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Inquisitive => "inquisitive",
            Tone::Excited => "excited",
            Tone::Humorous => "humorous",
            Tone::Surprising => "surprising",
            Tone::SeriousNegative => "serious_negative",
            Tone::Enthusiastic => "enthusiastic",
            Tone::Neutral => "neutral",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Formality {
    Formal,
    Informal,
}

impl Formality {
    pub fn as_str(&self) -> &'static str {
        match self {
            Formality::Formal => "formal",
            Formality::Informal => "informal",
        }
    }
}

/// Coarse sentiment polarity used for template mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    Positive,
    Negative,
    Neutral,
}

impl Polarity {
    /// Inclusive ±0.05 thresholds on the compound score.
    pub fn from_compound(compound: f64) -> Self {
        if compound >= 0.05 {
            Polarity::Positive
        } else if compound <= -0.05 {
            Polarity::Negative
        } else {
            Polarity::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Polarity::Positive => "positive",
            Polarity::Negative => "negative",
            Polarity::Neutral => "neutral",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

/// Valence scores produced by a sentiment scorer.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PolarityScores {
    /// Normalised overall valence in [-1, 1]
    pub compound: f64,
    pub positive: f64,
    pub negative: f64,
    pub neutral: f64,
}

/// Label/score view derived from the compound score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransformerSentiment {
    pub label: SentimentLabel,
    pub score: f64,
}

impl TransformerSentiment {
    /// Strict ±0.05 thresholds; the score is the matching proportion.
    pub fn from_scores(scores: &PolarityScores) -> Self {
        if scores.compound > 0.05 {
            Self {
                label: SentimentLabel::Positive,
                score: scores.positive,
            }
        } else if scores.compound < -0.05 {
            Self {
                label: SentimentLabel::Negative,
                score: scores.negative,
            }
        } else {
            Self {
                label: SentimentLabel::Neutral,
                score: scores.neutral,
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EmotionScore {
    pub label: Emotion,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub text: String,
    pub label: String,
}

/// Output of the keyword-category context analyzer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextAnalysis {
    pub topics: Vec<Topic>,
    pub is_formal: bool,
}

/// Unified analysis record for one input text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub original_text: String,
    /// Lowercased, stopword-free token stream
    pub preprocessed_text: String,
    pub sentiment: PolarityScores,
    pub transformer_sentiment: TransformerSentiment,
    /// Sorted by score, descending
    pub emotions: Vec<EmotionScore>,
    pub entities: Vec<Entity>,
    /// First distinct long words of the text (at most 3)
    pub topics: Vec<String>,
    /// Keyword-category topics and formality from the context analyzer
    pub context: ContextAnalysis,
    pub formality: Formality,
    pub tone: Tone,
}

/// Parameters handed to template selection and captioning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemeParameters {
    pub sentiment: Polarity,
    pub tone: Tone,
    pub formality: Formality,
    pub emotions: Vec<Emotion>,
    pub topic: String,
    pub entities: Vec<String>,
    pub text: String,
}
