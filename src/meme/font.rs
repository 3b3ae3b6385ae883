//! TrueType font discovery for captions and placeholders.

use crate::config::Config;
use crate::error::{MemeMindError, Result};
use rusttype::Font;
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub type SharedFont = Arc<Font<'static>>;

/// File name looked up in the fonts directory and the user font dir
pub const USER_FONT_NAME: &str = "impact.ttf";

/// DejaVu Sans Bold, compiled in so text always renders.
/// Bitstream Vera license, see `assets/fonts/LICENSE-DejaVu.txt`.
static BUNDLED_FONT_BYTES: &[u8] = include_bytes!("../../assets/fonts/DejaVuSans-Bold.ttf");

const SYSTEM_FONT_PATHS: &[&str] = &[
    // Linux
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/TTF/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans-Bold.ttf",
    // macOS
    "/System/Library/Fonts/Supplemental/Impact.ttf",
    "/Library/Fonts/Arial.ttf",
    // Windows
    "C:\\Windows\\Fonts\\impact.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// Font paths to try, most specific first.
pub fn font_candidates(config: &Config) -> Vec<PathBuf> {
    let mut candidates = Vec::new();
    if let Some(path) = &config.render.font_path {
        candidates.push(path.clone());
    }
    candidates.push(config.paths.fonts_dir.join(USER_FONT_NAME));
    if let Some(user_fonts) = dirs::font_dir() {
        candidates.push(user_fonts.join(USER_FONT_NAME));
    }
    candidates.extend(SYSTEM_FONT_PATHS.iter().map(PathBuf::from));
    candidates
}

pub fn load_font(path: &Path) -> Result<Font<'static>> {
    let bytes = std::fs::read(path)?;
    Font::try_from_vec(bytes).ok_or_else(|| MemeMindError::Config {
        message: format!("Not a usable TrueType font: {}", path.display()),
    })
}

pub fn bundled_font() -> Option<SharedFont> {
    Font::try_from_bytes(BUNDLED_FONT_BYTES).map(Arc::new)
}

/// Font used for captions and placeholder labels: the first font found on
/// disk, else the bundled one.
pub fn caption_font(config: &Config) -> Option<SharedFont> {
    discover_font(config)
        .map(|(_, font)| font)
        .or_else(|| {
            tracing::info!("Using the bundled DejaVu Sans Bold for captions");
            bundled_font()
        })
}

/// First on-disk candidate that exists and parses.
pub fn discover_font(config: &Config) -> Option<(PathBuf, SharedFont)> {
    for path in font_candidates(config) {
        if !path.is_file() {
            continue;
        }
        match load_font(&path) {
            Ok(font) => {
                tracing::debug!("Using font {}", path.display());
                return Some((path, Arc::new(font)));
            }
            Err(e) => tracing::warn!("Skipping font {}: {}", path.display(), e),
        }
    }
    tracing::debug!(
        "No TrueType font on disk; put {} in {} to override the bundled font",
        USER_FONT_NAME,
        config.paths.fonts_dir.display()
    );
    None
}
