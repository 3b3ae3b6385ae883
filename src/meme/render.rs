//! Meme composition: template + captions -> image file.

use super::caption::{Caption, generate_caption};
use super::draw::{blank_canvas, draw_outlined_text, line_height};
use super::font::{SharedFont, caption_font};
use super::selector::{PlaceholderSpec, TemplateSelector};
use super::store::{TemplateStore, save_image};
use crate::config::Config;
use crate::error::Result;
use crate::nlp::types::MemeParameters;
use image::{DynamicImage, RgbImage};
use rand::Rng;
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub struct MemeRenderer {
    selector: TemplateSelector,
    font: Option<SharedFont>,
    output_dir: PathBuf,
    font_scale_divisor: u32,
    fallback_width: u32,
    fallback_height: u32,
}

impl MemeRenderer {
    /// Resolves the caption font from `config` and builds the selector over `store`.
    pub fn new(config: &Config, store: Arc<dyn TemplateStore>) -> Self {
        Self::with_font(config, store, caption_font(config))
    }

    /// `None` renders images without any text.
    pub fn with_font(
        config: &Config,
        store: Arc<dyn TemplateStore>,
        font: Option<SharedFont>,
    ) -> Self {
        let placeholder = PlaceholderSpec::from(&config.render);
        Self {
            selector: TemplateSelector::new(store, font.clone(), placeholder),
            font,
            output_dir: config.paths.output_dir.clone(),
            font_scale_divisor: config.render.font_scale_divisor.max(1),
            fallback_width: placeholder.width,
            fallback_height: placeholder.height,
        }
    }

    pub fn selector(&self) -> &TemplateSelector {
        &self.selector
    }

    pub fn has_font(&self) -> bool {
        self.font.is_some()
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Select a template, caption it and write the result.
    ///
    /// Without `output_path` the image goes to `meme_<1000..=9999>.jpg` in
    /// the output directory. Returns the written path.
    pub fn create_meme<R: Rng + ?Sized>(
        &self,
        params: &MemeParameters,
        output_path: Option<&Path>,
        rng: &mut R,
    ) -> Result<PathBuf> {
        let template = self.selector.select_template(params, rng)?;
        let caption = generate_caption(&params.text);

        let output_path = match output_path {
            Some(path) => path.to_path_buf(),
            None => self
                .output_dir
                .join(format!("meme_{}.jpg", rng.gen_range(1000..=9999))),
        };

        let base = match self.selector.store().load_asset(&template.name) {
            Ok(img) => img,
            Err(e) => {
                tracing::warn!("Using blank canvas for {}: {}", template.name, e);
                DynamicImage::ImageRgb8(blank_canvas(self.fallback_width, self.fallback_height))
            }
        };

        let meme = self.compose(base, &caption);
        save_image(&DynamicImage::ImageRgb8(meme), &output_path)?;
        tracing::info!(
            template = %template.name,
            output = %output_path.display(),
            "meme created"
        );
        Ok(output_path)
    }

    /// Draw the uppercased captions onto `base`.
    ///
    /// Top text starts a tenth of the height down; bottom text ends a
    /// tenth of the height above the bottom edge.
    pub fn compose(&self, base: DynamicImage, caption: &Caption) -> RgbImage {
        let mut canvas = base.to_rgb8();
        let Some(font) = &self.font else {
            return canvas;
        };

        let (width, height) = canvas.dimensions();
        let size = (width / self.font_scale_divisor).max(1) as f32;
        let margin = (height / 10) as i32;

        if !caption.top.is_empty() {
            draw_outlined_text(&mut canvas, font, size, &caption.top.to_uppercase(), margin);
        }
        if !caption.bottom.is_empty() {
            let y = height as i32 - margin - line_height(font, size);
            draw_outlined_text(&mut canvas, font, size, &caption.bottom.to_uppercase(), y);
        }
        canvas
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::meme::store::MemoryTemplateStore;
    use crate::nlp::types::{Formality, Polarity, Tone};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn params(text: &str) -> MemeParameters {
        MemeParameters {
            sentiment: Polarity::Positive,
            tone: Tone::Excited,
            formality: Formality::Informal,
            emotions: Vec::new(),
            topic: "general".to_string(),
            entities: Vec::new(),
            text: text.to_string(),
        }
    }

    fn config_in(dir: &Path) -> Config {
        let mut config = Config::default();
        config.paths.output_dir = dir.join("output");
        config.paths.templates_dir = dir.join("templates");
        config.paths.fonts_dir = dir.join("fonts");
        config
    }

    #[test]
    fn test_auto_output_path() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        let renderer = MemeRenderer::with_font(&config, Arc::new(MemoryTemplateStore::new()), None);

        let mut rng = StdRng::seed_from_u64(5);
        let path = renderer.create_meme(&params("so much winning today"), None, &mut rng).unwrap();

        assert!(path.starts_with(dir.path().join("output")));
        let name = path.file_name().unwrap().to_str().unwrap();
        let digits: u32 = name
            .strip_prefix("meme_")
            .and_then(|s| s.strip_suffix(".jpg"))
            .unwrap()
            .parse()
            .unwrap();
        assert!((1000..=9999).contains(&digits));

        let img = image::open(&path).unwrap();
        assert_eq!((img.width(), img.height()), (800, 600));
    }

    #[test]
    fn test_explicit_output_path_and_template_size_kept() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        let store = Arc::new(MemoryTemplateStore::new());
        let renderer = MemeRenderer::with_font(&config, store.clone(), None);
        for name in renderer.selector().candidates(&params("")) {
            store
                .save_asset(&name, &DynamicImage::ImageRgb8(RgbImage::new(320, 240)))
                .unwrap();
        }

        let out = dir.path().join("nested").join("custom.png");
        let mut rng = StdRng::seed_from_u64(11);
        let path = renderer.create_meme(&params("hi"), Some(&out), &mut rng).unwrap();
        assert_eq!(path, out);
        let img = image::open(&out).unwrap();
        assert_eq!((img.width(), img.height()), (320, 240));
    }

    fn band_has_outlined_text(img: &RgbImage, rows: std::ops::Range<u32>) -> (bool, bool) {
        let mut bright = false;
        let mut dark = false;
        for y in rows {
            for x in 0..img.width() {
                let [r, g, b] = img.get_pixel(x, y).0;
                bright |= r > 215 && g > 215 && b > 215;
                dark |= r < 45 && g < 45 && b < 45;
            }
        }
        (bright, dark)
    }

    #[test]
    fn test_compose_draws_outlined_captions_in_both_bands() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        let font = crate::meme::font::bundled_font().unwrap();
        let renderer = MemeRenderer::with_font(
            &config,
            Arc::new(MemoryTemplateStore::new()),
            Some(font.clone()),
        );

        let grey = image::Rgb([128, 128, 128]);
        let base = DynamicImage::ImageRgb8(RgbImage::from_pixel(800, 600, grey));
        let out = renderer.compose(base, &generate_caption("top words and bottom words"));

        // size 800 / 10 = 80, margin 600 / 10 = 60
        let step = line_height(&font, 80.0) as u32;
        assert_eq!(band_has_outlined_text(&out, 60..60 + step), (true, true));
        assert_eq!(band_has_outlined_text(&out, 540 - step..540), (true, true));

        // nothing drawn between the captions or in the margins
        assert!((0..800).all(|x| *out.get_pixel(x, 300) == grey));
        assert!((0..800).all(|x| *out.get_pixel(x, 5) == grey));
        assert!((0..800).all(|x| *out.get_pixel(x, 595) == grey));
    }

    #[test]
    fn test_compose_without_font_returns_rgb_copy() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        let renderer = MemeRenderer::with_font(&config, Arc::new(MemoryTemplateStore::new()), None);
        assert!(!renderer.has_font());

        let base = DynamicImage::ImageRgba8(image::RgbaImage::new(10, 10));
        let caption = generate_caption("top words and bottom words");
        let out = renderer.compose(base, &caption);
        assert_eq!(out.dimensions(), (10, 10));
    }
}
