//! Mapping from analysis categories to template file names.

use crate::nlp::types::MemeParameters;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Used when no mapping entry matches the parameters.
pub const DEFAULT_CANDIDATES: [&str; 3] = [
    "confused_nick_young.jpg",
    "thinking_face.jpg",
    "surprised_pikachu.jpg",
];

/// Category name -> template file names, for each of the four dimensions.
///
/// `Default` is the empty mapping; `builtin()` is the stock table written
/// on first use.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateMapping {
    #[serde(default)]
    pub sentiment: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    pub emotion: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    pub topic: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    pub tone: BTreeMap<String, Vec<String>>,
}

fn table(entries: &[(&str, [&str; 3])]) -> BTreeMap<String, Vec<String>> {
    entries
        .iter()
        .map(|(key, files)| {
            (
                key.to_string(),
                files.iter().map(|f| f.to_string()).collect(),
            )
        })
        .collect()
}

impl TemplateMapping {
    pub fn builtin() -> Self {
        Self {
            sentiment: table(&[
                ("positive", ["happy_drake.jpg", "success_kid.jpg", "expanding_brain.jpg"]),
                ("negative", ["sad_cat.jpg", "disappointed_kid.jpg", "this_is_fine.jpg"]),
                ("neutral", ["thinking_face.jpg", "unsure_kid.jpg", "idk.jpg"]),
            ]),
            emotion: table(&[
                ("joy", ["happy_drake.jpg", "success_kid.jpg", "party_parrot.jpg"]),
                ("sadness", ["sad_cat.jpg", "disappointed_kid.jpg", "crying_cat.jpg"]),
                ("anger", ["angry_cat.jpg", "angry_arthur.jpg", "rage_face.jpg"]),
                ("fear", ["scared_cat.jpg", "surprised_pikachu.jpg", "this_is_fine.jpg"]),
                ("surprise", ["surprised_pikachu.jpg", "shocked_face.jpg", "mind_blown.jpg"]),
                ("disgust", ["disgusted_face.jpg", "eww.jpg", "gross.jpg"]),
                ("confusion", ["confused_nick_young.jpg", "unsure_kid.jpg", "thinking_face.jpg"]),
            ]),
            topic: table(&[
                ("politics", ["thinking_politician.jpg", "policy_drake.jpg", "political_button.jpg"]),
                ("technology", ["code_life.jpg", "tech_drake.jpg", "programming.jpg"]),
                ("entertainment", ["movie_quote.jpg", "celebrity.jpg", "music.jpg"]),
                ("sports", ["sports_win.jpg", "sports_drake.jpg", "team_celebration.jpg"]),
                ("business", ["stonks.jpg", "business_cat.jpg", "profit.jpg"]),
                ("science", ["science_cat.jpg", "lab_coat.jpg", "experiment.jpg"]),
                ("social_media", ["social_drake.jpg", "influencer.jpg", "tweet.jpg"]),
                ("memes", ["meta_meme.jpg", "meme_about_memes.jpg", "memeception.jpg"]),
            ]),
            tone: table(&[
                ("humorous", ["funny_cat.jpg", "laugh_cry.jpg", "comedy.jpg"]),
                ("serious_negative", ["serious_cat.jpg", "not_amused.jpg", "disappointed.jpg"]),
                ("excited", ["excited_kid.jpg", "celebration.jpg", "party.jpg"]),
                ("inquisitive", ["thinking_face.jpg", "question_mark.jpg", "curious.jpg"]),
                ("neutral", ["neutral_face.jpg", "ok.jpg", "whatever.jpg"]),
            ]),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.sentiment.is_empty()
            && self.emotion.is_empty()
            && self.topic.is_empty()
            && self.tone.is_empty()
    }

    /// Union of the templates keyed by sentiment, tone, topic and each emotion.
    ///
    /// Empty when nothing matches; the caller decides the fallback.
    pub fn candidates_for(&self, params: &MemeParameters) -> BTreeSet<String> {
        let mut candidates = BTreeSet::new();
        let mut extend = |map: &BTreeMap<String, Vec<String>>, key: &str| {
            if let Some(files) = map.get(key) {
                candidates.extend(files.iter().cloned());
            }
        };

        extend(&self.sentiment, params.sentiment.as_str());
        extend(&self.tone, params.tone.as_str());
        extend(&self.topic, &params.topic);
        for emotion in &params.emotions {
            extend(&self.emotion, emotion.as_str());
        }
        candidates
    }

    /// Every template file name referenced anywhere in the mapping.
    pub fn all_templates(&self) -> BTreeSet<String> {
        [&self.sentiment, &self.emotion, &self.topic, &self.tone]
            .into_iter()
            .flat_map(|map| map.values().flatten().cloned())
            .collect()
    }
}
