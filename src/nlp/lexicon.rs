//! Immutable word lists shared by the analyzers.
//!
//! Built once at startup and handed around as `Arc<Lexicons>`.

use super::types::{Emotion, Topic};
use std::collections::HashSet;

/// Standard English stopword list.
pub const ENGLISH_STOPWORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan",
    "shan't", "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't",
    "wouldn", "wouldn't",
];

const JOY_KEYWORDS: &[&str] = &[
    "happy", "happiness", "joy", "joyful", "delighted", "excited", "ecstatic", "thrilled", "glad",
    "pleased", "wonderful", "great", "awesome", "fantastic", "amazing", "excellent", "love",
    "loving", "celebrate", "celebration", "party", "laugh", "laughter", "smile", "smiling",
    "haha", "lol", "yay", "woohoo",
];

const SADNESS_KEYWORDS: &[&str] = &[
    "sad", "sadness", "unhappy", "depressed", "depression", "miserable", "gloomy", "heartbroken",
    "grief", "disappointed", "upset", "regret", "regretful", "sorry", "sorrow", "crying", "cry",
    "tears", "weeping", "sobbing", "hurt", "painful",
];

const ANGER_KEYWORDS: &[&str] = &[
    "angry", "anger", "mad", "furious", "rage", "outraged", "annoyed", "irritated",
    "frustration", "frustrated", "hate", "hatred", "resent", "resentment", "disgusted", "disgust",
    "hostile", "hostility", "bitter", "bitterness", "offended", "upset",
];

const FEAR_KEYWORDS: &[&str] = &[
    "afraid", "fear", "scared", "frightened", "terrified", "terror", "panic", "anxious",
    "anxiety", "nervous", "worried", "worry", "dread", "horror", "horrified", "alarmed",
    "threatened", "threatening", "danger", "dangerous", "scary",
];

const SURPRISE_KEYWORDS: &[&str] = &[
    "surprised", "surprise", "shocked", "shock", "astonished", "astonishment", "amazed",
    "amazing", "unexpected", "startled", "stunned", "wow", "whoa", "omg", "incredible",
    "unbelievable", "unreal", "mind-blowing", "mind blown",
];

const DISGUST_KEYWORDS: &[&str] = &[
    "disgusted", "disgust", "gross", "revolting", "repulsed", "repulsive", "nasty", "sickening",
    "sickened", "nauseous", "offensive", "eww", "ew", "yuck", "icky",
];

const CONFUSION_KEYWORDS: &[&str] = &[
    "confused", "confusion", "perplexed", "puzzled", "baffled", "uncertain", "unsure",
    "ambiguous", "unclear", "bewildered", "bemused", "dumbfounded", "stumped", "lost",
];

const POLITICS_KEYWORDS: &[&str] = &[
    "government", "president", "election", "vote", "democracy", "political", "party", "senator",
    "congress", "law",
];

const TECHNOLOGY_KEYWORDS: &[&str] = &[
    "computer", "software", "hardware", "code", "programming", "tech", "digital", "internet",
    "app", "website", "algorithm",
];

const ENTERTAINMENT_KEYWORDS: &[&str] = &[
    "movie", "film", "tv", "television", "actor", "actress", "show", "series", "music", "song",
    "celebrity",
];

const SPORTS_KEYWORDS: &[&str] = &[
    "game", "team", "player", "football", "soccer", "basketball", "baseball", "sport", "win",
    "lose", "score",
];

const BUSINESS_KEYWORDS: &[&str] = &[
    "money", "finance", "investment", "stock", "market", "company", "corporation", "ceo",
    "profit", "economic",
];

const SCIENCE_KEYWORDS: &[&str] = &[
    "research", "scientist", "experiment", "theory", "physics", "biology", "chemistry",
    "scientific", "laboratory",
];

const SOCIAL_MEDIA_KEYWORDS: &[&str] = &[
    "facebook", "twitter", "instagram", "tiktok", "viral", "post", "share", "like", "follow",
    "social",
];

const MEMES_KEYWORDS: &[&str] = &[
    "meme", "funny", "joke", "humor", "lol", "viral", "reddit", "trend", "dank",
];

/// Formality markers used by the context analyzer.
const CONTEXT_FORMAL_MARKERS: &[&str] = &[
    "therefore", "however", "thus", "hence", "nevertheless", "furthermore", "moreover",
    "accordingly", "consequently", "subsequently", "although", "despite", "whereas",
    "notwithstanding", "regarding", "concerning", "hereby", "herein", "pursuant", "shall",
    "must", "require", "necessitate",
];

const CONTEXT_INFORMAL_MARKERS: &[&str] = &[
    "lol", "haha", "yeah", "cool", "awesome", "btw", "gonna", "wanna", "kinda", "sorta", "yep",
    "nope", "dude", "like", "totally", "stuff", "u", "ur", "r", "y", "k", "omg", "wtf", "idk",
    "tbh", "imo",
];

/// Shorter marker lists used by the orchestrator's own formality pass.
const ANALYZER_FORMAL_MARKERS: &[&str] = &[
    "therefore", "however", "thus", "hence", "nevertheless", "furthermore", "moreover",
];

const ANALYZER_INFORMAL_MARKERS: &[&str] = &[
    "lol", "haha", "yeah", "cool", "awesome", "btw", "gonna", "wanna",
];

/// Word lists for one language.
#[derive(Debug, Clone)]
pub struct Lexicons {
    stopwords: HashSet<&'static str>,
    emotions: Vec<(Emotion, &'static [&'static str])>,
    topics: Vec<(Topic, &'static [&'static str])>,
    context_formal: &'static [&'static str],
    context_informal: &'static [&'static str],
    analyzer_formal: &'static [&'static str],
    analyzer_informal: &'static [&'static str],
}

impl Lexicons {
    pub fn english() -> Self {
        Self {
            stopwords: ENGLISH_STOPWORDS.iter().copied().collect(),
            emotions: vec![
                (Emotion::Joy, JOY_KEYWORDS),
                (Emotion::Sadness, SADNESS_KEYWORDS),
                (Emotion::Anger, ANGER_KEYWORDS),
                (Emotion::Fear, FEAR_KEYWORDS),
                (Emotion::Surprise, SURPRISE_KEYWORDS),
                (Emotion::Disgust, DISGUST_KEYWORDS),
                (Emotion::Confusion, CONFUSION_KEYWORDS),
            ],
            topics: vec![
                (Topic::Politics, POLITICS_KEYWORDS),
                (Topic::Technology, TECHNOLOGY_KEYWORDS),
                (Topic::Entertainment, ENTERTAINMENT_KEYWORDS),
                (Topic::Sports, SPORTS_KEYWORDS),
                (Topic::Business, BUSINESS_KEYWORDS),
                (Topic::Science, SCIENCE_KEYWORDS),
                (Topic::SocialMedia, SOCIAL_MEDIA_KEYWORDS),
                (Topic::Memes, MEMES_KEYWORDS),
            ],
            context_formal: CONTEXT_FORMAL_MARKERS,
            context_informal: CONTEXT_INFORMAL_MARKERS,
            analyzer_formal: ANALYZER_FORMAL_MARKERS,
            analyzer_informal: ANALYZER_INFORMAL_MARKERS,
        }
    }

    /// Expects an already lowercased word.
    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word)
    }

    /// Emotion keyword lists in fixed detection order.
    pub fn emotion_keywords(&self) -> &[(Emotion, &'static [&'static str])] {
        &self.emotions
    }

    /// Topic keyword lists in fixed category order.
    pub fn topic_keywords(&self) -> &[(Topic, &'static [&'static str])] {
        &self.topics
    }

    pub fn context_formal_markers(&self) -> &[&'static str] {
        self.context_formal
    }

    pub fn context_informal_markers(&self) -> &[&'static str] {
        self.context_informal
    }

    pub fn analyzer_formal_markers(&self) -> &[&'static str] {
        self.analyzer_formal
    }

    pub fn analyzer_informal_markers(&self) -> &[&'static str] {
        self.analyzer_informal
    }
}

impl Default for Lexicons {
    fn default() -> Self {
        Self::english()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_sizes() {
        let lex = Lexicons::english();
        assert_eq!(ENGLISH_STOPWORDS.len(), 179);
        assert_eq!(lex.emotion_keywords().len(), 7);
        assert_eq!(lex.topic_keywords().len(), 8);
        assert_eq!(lex.analyzer_formal_markers().len(), 7);
        assert_eq!(lex.context_formal_markers().len(), 23);
        assert_eq!(lex.context_informal_markers().len(), 26);
    }

    #[test]
    fn test_fixed_orders() {
        let lex = Lexicons::english();
        let emotions: Vec<Emotion> = lex.emotion_keywords().iter().map(|(e, _)| *e).collect();
        assert_eq!(emotions, Emotion::DETECTABLE.to_vec());
        let topics: Vec<Topic> = lex.topic_keywords().iter().map(|(t, _)| *t).collect();
        assert_eq!(topics, Topic::CATEGORIES.to_vec());
    }

    #[test]
    fn test_stopwords() {
        let lex = Lexicons::english();
        assert!(lex.is_stopword("the"));
        assert!(lex.is_stopword("don't"));
        assert!(!lex.is_stopword("meme"));
    }
}
