//! Topic and formality detection from keyword lists.

use super::lexicon::Lexicons;
use super::tokenize::{is_alphanumeric_token, sentences, word_tokens};
use super::types::{ContextAnalysis, Topic};
use std::sync::Arc;

const MAX_TOPICS: usize = 3;
/// Mean sentence length (in tokens) above which text reads as formal
const LONG_SENTENCE_TOKENS: f64 = 15.0;

pub struct ContextAnalyzer {
    lexicons: Arc<Lexicons>,
}

impl ContextAnalyzer {
    pub fn new(lexicons: Arc<Lexicons>) -> Self {
        Self { lexicons }
    }

    pub fn analyze(&self, text: &str) -> ContextAnalysis {
        let lowered = text.to_lowercase();
        let filtered: Vec<&str> = word_tokens(&lowered)
            .into_iter()
            .filter(|t| is_alphanumeric_token(t) && !self.lexicons.is_stopword(t))
            .collect();

        ContextAnalysis {
            topics: self.detect_topics(&filtered),
            is_formal: self.formality_score(&lowered) > 0.0,
        }
    }

    /// Rank topic categories by keyword hits; at most three, `general` if none.
    pub fn detect_topics(&self, tokens: &[&str]) -> Vec<Topic> {
        let mut counts: Vec<(Topic, usize)> = self
            .lexicons
            .topic_keywords()
            .iter()
            .map(|(topic, words)| {
                let hits = tokens.iter().filter(|t| words.contains(*t)).count();
                (*topic, hits)
            })
            .filter(|(_, hits)| *hits > 0)
            .collect();

        if counts.is_empty() {
            return vec![Topic::General];
        }
        counts.sort_by(|a, b| b.1.cmp(&a.1));
        counts
            .into_iter()
            .take(MAX_TOPICS)
            .map(|(topic, _)| topic)
            .collect()
    }

    /// Weighted formality score; positive means formal.
    ///
    /// formal hits x2, informal hits x-1.5, +1 when sentences average
    /// more than 15 tokens.
    pub fn formality_score(&self, text: &str) -> f64 {
        let lowered = text.to_lowercase();
        let tokens = word_tokens(&lowered);

        let formal = tokens
            .iter()
            .filter(|t| self.lexicons.context_formal_markers().contains(*t))
            .count();
        let informal = tokens
            .iter()
            .filter(|t| self.lexicons.context_informal_markers().contains(*t))
            .count();

        let sents = sentences(&lowered);
        let mean_len = if sents.is_empty() {
            0.0
        } else {
            let total: usize = sents.iter().map(|s| word_tokens(s).len()).sum();
            total as f64 / sents.len() as f64
        };
        let long_bonus = if mean_len > LONG_SENTENCE_TOKENS { 1.0 } else { 0.0 };

        formal as f64 * 2.0 - informal as f64 * 1.5 + long_bonus
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyzer() -> ContextAnalyzer {
        ContextAnalyzer::new(Arc::new(Lexicons::english()))
    }

    #[test]
    fn test_general_when_no_topic_matches() {
        let ctx = analyzer().analyze("The weather is nice");
        assert_eq!(ctx.topics, vec![Topic::General]);
    }

    #[test]
    fn test_topics_ranked_by_hits() {
        let ctx = analyzer().analyze(
            "The team won the game and the player scored, but the stock market fell",
        );
        assert_eq!(ctx.topics[0], Topic::Sports);
        assert_eq!(ctx.topics[1], Topic::Business);
    }

    #[test]
    fn test_topic_ties_keep_category_order() {
        let a = analyzer();
        let topics = a.detect_topics(&["meme", "movie", "computer", "vote"]);
        assert_eq!(
            topics,
            vec![Topic::Politics, Topic::Technology, Topic::Entertainment]
        );
    }

    #[test]
    fn test_viral_counts_for_two_categories() {
        let topics = analyzer().detect_topics(&["viral"]);
        assert_eq!(topics, vec![Topic::SocialMedia, Topic::Memes]);
    }

    #[test]
    fn test_formal_markers() {
        let ctx = analyzer().analyze("Therefore, we must proceed; however, the committee shall convene.");
        assert!(ctx.is_formal);
    }

    #[test]
    fn test_informal_slang() {
        let a = analyzer();
        assert!(!a.analyze("lol haha yeah").is_formal);
        assert!(a.formality_score("lol haha yeah") < 0.0);
    }

    #[test]
    fn test_long_sentences_tip_formality() {
        let a = analyzer();
        let long = "The quarterly review of the regional office covered staffing levels and \
                    budget allocations for the next fiscal period in detail.";
        assert_eq!(a.formality_score(long), 1.0);
        assert_eq!(a.formality_score("Short one."), 0.0);
        assert!(!a.analyze("Short one.").is_formal);
    }
}
