//! Text analysis: sentiment, emotions, topics, formality, tone.
//! Deterministic lexicon heuristics; no model downloads.

pub mod analyzer;
pub mod context;
pub mod emotion;
pub mod lexicon;
pub mod sentiment;
pub mod tokenize;
pub mod types;

pub use analyzer::TextAnalyzer;
pub use lexicon::Lexicons;
pub use sentiment::{LexiconSentimentScorer, SentimentScorer, VaderSentimentScorer};
pub use types::{AnalysisResult, Emotion, MemeParameters, Polarity, Tone, Topic};
