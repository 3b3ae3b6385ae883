//! Template selection from meme parameters.

use super::draw::{BLACK, blank_canvas, draw_centered_lines};
use super::font::SharedFont;
use super::mapping::{DEFAULT_CANDIDATES, TemplateMapping};
use super::store::{TemplateStore, load_or_init_mapping};
use crate::config::RenderConfig;
use crate::error::{MemeMindError, Result};
use crate::nlp::types::MemeParameters;
use image::DynamicImage;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectedTemplate {
    pub name: String,
    pub path: PathBuf,
}

/// Placeholder canvas drawn for templates that aren't on disk yet
#[derive(Debug, Clone, Copy)]
pub struct PlaceholderSpec {
    pub width: u32,
    pub height: u32,
    pub font_size: f32,
}

impl From<&RenderConfig> for PlaceholderSpec {
    fn from(render: &RenderConfig) -> Self {
        Self {
            width: render.placeholder_width,
            height: render.placeholder_height,
            font_size: render.placeholder_font_size,
        }
    }
}

impl Default for PlaceholderSpec {
    fn default() -> Self {
        Self::from(&RenderConfig::default())
    }
}

pub struct TemplateSelector {
    store: Arc<dyn TemplateStore>,
    mapping: TemplateMapping,
    font: Option<SharedFont>,
    placeholder: PlaceholderSpec,
}

impl TemplateSelector {
    /// Loads (or initialises) the mapping from `store` once.
    pub fn new(
        store: Arc<dyn TemplateStore>,
        font: Option<SharedFont>,
        placeholder: PlaceholderSpec,
    ) -> Self {
        let mapping = load_or_init_mapping(store.as_ref());
        Self {
            store,
            mapping,
            font,
            placeholder,
        }
    }

    pub fn mapping(&self) -> &TemplateMapping {
        &self.mapping
    }

    pub fn store(&self) -> &Arc<dyn TemplateStore> {
        &self.store
    }

    /// Mapped candidates, or the fixed default trio when nothing matches.
    pub fn candidates(&self, params: &MemeParameters) -> Vec<String> {
        let candidates = self.mapping.candidates_for(params);
        if candidates.is_empty() {
            DEFAULT_CANDIDATES.iter().map(|s| s.to_string()).collect()
        } else {
            candidates.into_iter().collect()
        }
    }

    /// Pick a template uniformly at random from the candidates.
    ///
    /// The returned template always exists in the store afterwards; a
    /// missing one is replaced by a generated placeholder.
    pub fn select_template<R: Rng + ?Sized>(
        &self,
        params: &MemeParameters,
        rng: &mut R,
    ) -> Result<SelectedTemplate> {
        let candidates = self.candidates(params);
        let name = candidates
            .choose(rng)
            .cloned()
            .ok_or_else(|| MemeMindError::Template {
                message: "No template candidates".to_string(),
            })?;

        if !self.store.exists(&name) {
            tracing::info!("Template {} missing, creating placeholder", name);
            self.create_placeholder(&name)?;
        }

        tracing::debug!(template = %name, candidates = candidates.len(), "selected template");
        Ok(SelectedTemplate {
            path: self.store.asset_path(&name),
            name,
        })
    }

    /// White canvas labelled "Placeholder for" / `name`, saved under `name`.
    pub fn create_placeholder(&self, name: &str) -> Result<()> {
        let mut canvas = blank_canvas(self.placeholder.width, self.placeholder.height);
        if let Some(font) = &self.font {
            draw_centered_lines(
                &mut canvas,
                font,
                self.placeholder.font_size,
                &["Placeholder for", name],
                BLACK,
            );
        }
        self.store
            .save_asset(name, &DynamicImage::ImageRgb8(canvas))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::meme::store::{FsTemplateStore, MemoryTemplateStore};
    use crate::nlp::types::{Emotion, Formality, Polarity, Tone};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn params(sentiment: Polarity, tone: Tone, topic: &str, emotions: Vec<Emotion>) -> MemeParameters {
        MemeParameters {
            sentiment,
            tone,
            formality: Formality::Informal,
            emotions,
            topic: topic.to_string(),
            entities: Vec::new(),
            text: "hello".to_string(),
        }
    }

    fn memory_selector(mapping: TemplateMapping) -> TemplateSelector {
        TemplateSelector::new(
            Arc::new(MemoryTemplateStore::with_mapping(mapping)),
            None,
            PlaceholderSpec::default(),
        )
    }

    #[test]
    fn test_empty_mapping_uses_default_candidates() {
        let selector = memory_selector(TemplateMapping::default());
        let p = params(Polarity::Positive, Tone::Excited, "general", vec![Emotion::Joy]);
        assert_eq!(selector.candidates(&p), DEFAULT_CANDIDATES.to_vec());

        let mut rng = StdRng::seed_from_u64(7);
        let selected = selector.select_template(&p, &mut rng).unwrap();
        assert!(DEFAULT_CANDIDATES.contains(&selected.name.as_str()));
    }

    #[test]
    fn test_selection_is_deterministic_for_a_seed() {
        let selector = memory_selector(TemplateMapping::builtin());
        let p = params(Polarity::Negative, Tone::SeriousNegative, "politics", vec![Emotion::Anger]);
        let pick = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            selector.select_template(&p, &mut rng).unwrap().name
        };
        assert_eq!(pick(42), pick(42));
        assert!(selector.candidates(&p).contains(&pick(3)));
    }

    #[test]
    fn test_missing_template_gets_placeholder() {
        let store = Arc::new(MemoryTemplateStore::new());
        let selector = TemplateSelector::new(store.clone(), None, PlaceholderSpec::default());
        let p = params(Polarity::Neutral, Tone::Neutral, "general", vec![]);

        let mut rng = StdRng::seed_from_u64(1);
        let selected = selector.select_template(&p, &mut rng).unwrap();
        assert!(store.exists(&selected.name));
        let img = store.load_asset(&selected.name).unwrap();
        assert_eq!((img.width(), img.height()), (800, 600));

        // a second pick of the same template reuses the stored asset
        let before = store.asset_count();
        let mut rng = StdRng::seed_from_u64(1);
        selector.select_template(&p, &mut rng).unwrap();
        assert_eq!(store.asset_count(), before);
    }

    #[test]
    fn test_placeholder_label_is_drawn() {
        let font = crate::meme::font::bundled_font().unwrap();
        let store = Arc::new(MemoryTemplateStore::new());
        let placeholder = PlaceholderSpec::default();
        let selector = TemplateSelector::new(store.clone(), Some(font.clone()), placeholder);
        selector.create_placeholder("surprised_pikachu.jpg").unwrap();

        let img = store.load_asset("surprised_pikachu.jpg").unwrap().to_rgb8();
        let step = crate::meme::draw::line_height(&font, placeholder.font_size) as u32;
        let top = (placeholder.height - 2 * step) / 2;
        let inked = (top..top + 2 * step)
            .flat_map(|y| (0..placeholder.width).map(move |x| (x, y)))
            .filter(|&(x, y)| img.get_pixel(x, y).0.iter().all(|c| *c < 100))
            .count();
        assert!(inked > 100, "only {inked} dark pixels in the label block");

        // corners stay blank
        assert_eq!(*img.get_pixel(0, 0), crate::meme::draw::WHITE);
        assert_eq!(*img.get_pixel(placeholder.width - 1, placeholder.height - 1), crate::meme::draw::WHITE);
    }

    #[test]
    fn test_fs_selection_leaves_file_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let store = Arc::new(FsTemplateStore::open(dir.path()).unwrap());
        let selector = TemplateSelector::new(store, None, PlaceholderSpec::default());
        let p = params(Polarity::Positive, Tone::Excited, "sports", vec![Emotion::Joy, Emotion::Surprise]);

        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..5 {
            let selected = selector.select_template(&p, &mut rng).unwrap();
            assert!(selected.path.is_file());
            assert!(selected.path.starts_with(dir.path()));
        }
    }
}
