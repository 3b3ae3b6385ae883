//! Text analysis orchestration.
//!
//! `TextAnalyzer` fans a text out to the sentiment scorer, the emotion
//! detector and the context analyzer, adds entity/topic/formality/tone
//! heuristics, and folds everything into one `AnalysisResult`.

use super::context::ContextAnalyzer;
use super::emotion::EmotionDetector;
use super::lexicon::Lexicons;
use super::sentiment::{SentimentScorer, VaderSentimentScorer};
use super::tokenize::{is_alphanumeric_token, word_tokens};
use super::types::{
    AnalysisResult, Emotion, EmotionScore, Entity, Formality, MemeParameters, Polarity, Tone,
    TransformerSentiment,
};
use std::sync::Arc;

const MAX_NAIVE_TOPICS: usize = 3;
const MIN_TOPIC_WORD_CHARS: usize = 4;
const MAX_MEME_EMOTIONS: usize = 2;
const MAX_MEME_ENTITIES: usize = 3;
const ENTITY_LABEL: &str = "ENTITY";

pub struct TextAnalyzer {
    lexicons: Arc<Lexicons>,
    scorer: Arc<dyn SentimentScorer>,
    emotion_detector: EmotionDetector,
    context_analyzer: ContextAnalyzer,
}

impl TextAnalyzer {
    pub fn new(lexicons: Arc<Lexicons>, scorer: Arc<dyn SentimentScorer>) -> Self {
        Self {
            emotion_detector: EmotionDetector::new(lexicons.clone(), scorer.clone()),
            context_analyzer: ContextAnalyzer::new(lexicons.clone()),
            lexicons,
            scorer,
        }
    }

    /// English lexicons with the VADER scorer
    pub fn english() -> Self {
        Self::new(
            Arc::new(Lexicons::english()),
            Arc::new(VaderSentimentScorer),
        )
    }

    pub fn emotion_detector(&self) -> &EmotionDetector {
        &self.emotion_detector
    }

    pub fn context_analyzer(&self) -> &ContextAnalyzer {
        &self.context_analyzer
    }

    pub fn analyze(&self, text: &str) -> AnalysisResult {
        let preprocessed_text = self.preprocess(text);
        let entities = self.extract_entities(text);

        let sentiment = self.scorer.polarity_scores(text);
        let transformer_sentiment = TransformerSentiment::from_scores(&sentiment);

        let emotions = self.emotion_detector.detect_emotions(text);
        let topics = self.extract_naive_topics(text);
        let context = self.context_analyzer.analyze(text);
        let formality = self.detect_formality(text);
        let tone = determine_tone(text, &emotions, sentiment.compound);

        tracing::debug!(
            compound = sentiment.compound,
            tone = tone.as_str(),
            formality = formality.as_str(),
            emotions = emotions.len(),
            "analyzed text"
        );

        AnalysisResult {
            original_text: text.to_string(),
            preprocessed_text,
            sentiment,
            transformer_sentiment,
            emotions,
            entities,
            topics,
            context,
            formality,
            tone,
        }
    }

    /// Lowercased alphanumeric tokens with stopwords removed, space-joined.
    pub fn preprocess(&self, text: &str) -> String {
        let lowered = text.to_lowercase();
        word_tokens(&lowered)
            .into_iter()
            .filter(|t| is_alphanumeric_token(t) && !self.lexicons.is_stopword(t))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Capitalised whitespace tokens longer than one char that aren't stopwords.
    pub fn extract_entities(&self, text: &str) -> Vec<Entity> {
        text.split_whitespace()
            .filter(|word| {
                word.chars().next().is_some_and(char::is_uppercase)
                    && word.chars().count() > 1
                    && !self.lexicons.is_stopword(&word.to_lowercase())
            })
            .map(|word| Entity {
                text: word.to_string(),
                label: ENTITY_LABEL.to_string(),
            })
            .collect()
    }

    /// First three distinct lowercase words of four or more chars that aren't stopwords.
    pub fn extract_naive_topics(&self, text: &str) -> Vec<String> {
        let mut topics: Vec<String> = Vec::new();
        for word in text.split_whitespace() {
            let word = word.to_lowercase();
            if word.chars().count() >= MIN_TOPIC_WORD_CHARS
                && !self.lexicons.is_stopword(&word)
                && !topics.contains(&word)
            {
                topics.push(word);
                if topics.len() == MAX_NAIVE_TOPICS {
                    break;
                }
            }
        }
        topics
    }

    /// Formal only when formal markers strictly outnumber informal ones.
    ///
    /// Markers are matched against raw whitespace tokens, so "however,"
    /// with its comma attached does not count.
    pub fn detect_formality(&self, text: &str) -> Formality {
        let lowered = text.to_lowercase();
        let (mut formal, mut informal) = (0usize, 0usize);
        for word in lowered.split_whitespace() {
            if self.lexicons.analyzer_formal_markers().contains(&word) {
                formal += 1;
            }
            if self.lexicons.analyzer_informal_markers().contains(&word) {
                informal += 1;
            }
        }
        if formal > informal {
            Formality::Formal
        } else {
            Formality::Informal
        }
    }

    /// Project an analysis onto the parameters used for meme generation.
    pub fn get_meme_parameters(&self, analysis: &AnalysisResult) -> MemeParameters {
        let mut ranked: Vec<&EmotionScore> = analysis.emotions.iter().collect();
        ranked.sort_by(|a, b| b.score.total_cmp(&a.score));

        MemeParameters {
            sentiment: Polarity::from_compound(analysis.sentiment.compound),
            tone: analysis.tone,
            formality: analysis.formality,
            emotions: ranked
                .into_iter()
                .take(MAX_MEME_EMOTIONS)
                .map(|e| e.label)
                .collect(),
            topic: analysis
                .topics
                .first()
                .cloned()
                .unwrap_or_else(|| "general".to_string()),
            entities: analysis
                .entities
                .iter()
                .take(MAX_MEME_ENTITIES)
                .map(|e| e.text.clone())
                .collect(),
            text: analysis.original_text.clone(),
        }
    }
}

/// Decide the tone; rules are checked in priority order and the first match wins.
///
/// 1. "?" without "!" -> inquisitive
/// 2. any "!" -> excited
/// 3. joy above 0.6 / surprise above 0.7, whichever appears first in `emotions`
/// 4. compound below -0.5 -> serious_negative, above 0.5 -> enthusiastic
/// 5. neutral
pub fn determine_tone(text: &str, emotions: &[EmotionScore], compound: f64) -> Tone {
    let has_question = text.contains('?');
    let has_exclamation = text.contains('!');
    if has_question && !has_exclamation {
        return Tone::Inquisitive;
    }
    if has_exclamation {
        return Tone::Excited;
    }

    for emotion in emotions {
        match emotion.label {
            Emotion::Joy if emotion.score > 0.6 => return Tone::Humorous,
            Emotion::Surprise if emotion.score > 0.7 => return Tone::Surprising,
            _ => {}
        }
    }

    if compound < -0.5 {
        Tone::SeriousNegative
    } else if compound > 0.5 {
        Tone::Enthusiastic
    } else {
        Tone::Neutral
    }
}
