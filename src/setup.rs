//! One-shot resource provisioning for `--setup`.
//!
//! Never fails: every problem is logged and reflected in the report.

use crate::config::Config;
use crate::meme::font::discover_font;
use crate::meme::store::{FsTemplateStore, TemplateStore};
use crate::meme::TemplateMapping;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize)]
pub struct SetupReport {
    pub created_dirs: Vec<PathBuf>,
    pub mapping_written: bool,
    /// Font found on disk; `None` means the bundled font is used
    pub font: Option<PathBuf>,
    pub warnings: Vec<String>,
}

pub fn setup_resources(config: &Config) -> SetupReport {
    tracing::info!("Setting up resources...");
    let mut report = SetupReport::default();

    for dir in [
        &config.paths.templates_dir,
        &config.paths.output_dir,
        &config.paths.fonts_dir,
    ] {
        if dir.is_dir() {
            continue;
        }
        match std::fs::create_dir_all(dir) {
            Ok(()) => report.created_dirs.push(dir.clone()),
            Err(e) => warn(&mut report, format!("Could not create {}: {}", dir.display(), e)),
        }
    }

    match FsTemplateStore::open(&config.paths.templates_dir) {
        Ok(store) => match store.load_mapping() {
            Ok(Some(_)) => {}
            Ok(None) => match store.save_mapping(&TemplateMapping::builtin()) {
                Ok(()) => report.mapping_written = true,
                Err(e) => warn(&mut report, format!("Could not write template mapping: {}", e)),
            },
            Err(e) => warn(&mut report, format!("Existing template mapping is unreadable: {}", e)),
        },
        Err(e) => warn(&mut report, e.to_string()),
    }

    report.font = discover_font(config).map(|(path, _)| path);
    if report.font.is_none() {
        tracing::info!("No TrueType font on disk; captions will use the bundled font");
    }

    tracing::info!(
        created = report.created_dirs.len(),
        mapping_written = report.mapping_written,
        warnings = report.warnings.len(),
        "Resource setup complete"
    );
    report
}

fn warn(report: &mut SetupReport, message: String) {
    tracing::warn!("{}", message);
    report.warnings.push(message);
}
