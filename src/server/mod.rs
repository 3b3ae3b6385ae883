//! Server module containing the MemeMindServer facade

use crate::config::Config;
use crate::error::Result;
use crate::meme::{FsTemplateStore, MemeRenderer, TemplateStore};
use crate::nlp::{AnalysisResult, TextAnalyzer};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use serde::Serialize;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// A rendered meme and the analysis it was built from
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedMeme {
    pub file_name: String,
    pub path: PathBuf,
    pub analysis: AnalysisResult,
}

/// Main MemeMind server implementation
#[derive(Clone)]
pub struct MemeMindServer {
    pub config: Arc<Config>,
    pub analyzer: Arc<TextAnalyzer>,
    pub renderer: Arc<MemeRenderer>,
    rng: Arc<Mutex<StdRng>>,
}

impl MemeMindServer {
    /// Templates on disk under `paths.templates_dir`.
    pub fn new(config: Config) -> Result<Self> {
        let store = Arc::new(FsTemplateStore::open(&config.paths.templates_dir)?);
        Ok(Self::with_store(config, store))
    }

    pub fn with_store(config: Config, store: Arc<dyn TemplateStore>) -> Self {
        let renderer = MemeRenderer::new(&config, store);
        Self::from_parts(config, TextAnalyzer::english(), renderer)
    }

    pub fn from_parts(config: Config, analyzer: TextAnalyzer, renderer: MemeRenderer) -> Self {
        let rng = match config.selection.seed {
            Some(seed) => {
                tracing::info!("Template selection seeded with {}", seed);
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_entropy(),
        };
        Self {
            config: Arc::new(config),
            analyzer: Arc::new(analyzer),
            renderer: Arc::new(renderer),
            rng: Arc::new(Mutex::new(rng)),
        }
    }

    pub fn analyze(&self, text: &str) -> AnalysisResult {
        self.analyzer.analyze(text)
    }

    /// Analyze `text` and render a meme as `meme_<8 hex>.jpg` in the output dir.
    pub fn generate_meme(&self, text: &str) -> Result<GeneratedMeme> {
        let analysis = self.analyzer.analyze(text);
        let params = self.analyzer.get_meme_parameters(&analysis);

        let file_name = format!("meme_{}.jpg", &uuid::Uuid::new_v4().simple().to_string()[..8]);
        let output = self.config.paths.output_dir.join(&file_name);

        let mut rng = self.request_rng();
        let path = self.renderer.create_meme(&params, Some(&output), &mut rng)?;

        Ok(GeneratedMeme {
            file_name,
            path,
            analysis,
        })
    }

    /// Image templates currently in the store, sorted by name.
    pub fn list_templates(&self) -> Result<Vec<String>> {
        self.renderer.selector().store().list_assets()
    }

    // Lock only long enough to draw a seed so renders don't serialize
    fn request_rng(&self) -> StdRng {
        let seed = self
            .rng
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .next_u64();
        StdRng::seed_from_u64(seed)
    }
}
