//! Storage for the template mapping and template images.
//!
//! `FsTemplateStore` keeps everything in the templates directory
//! (`mappings.json` next to the image files). `MemoryTemplateStore` keeps
//! it in memory so selection and rendering can be tested without disk.

use super::mapping::TemplateMapping;
use crate::error::{MemeMindError, Result};
use image::DynamicImage;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

pub const MAPPING_FILE: &str = "mappings.json";
pub const IMAGE_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "gif"];

pub trait TemplateStore: Send + Sync {
    /// `Ok(None)` when no mapping has been persisted yet.
    fn load_mapping(&self) -> Result<Option<TemplateMapping>>;
    fn save_mapping(&self, mapping: &TemplateMapping) -> Result<()>;
    fn exists(&self, name: &str) -> bool;
    fn load_asset(&self, name: &str) -> Result<DynamicImage>;
    fn save_asset(&self, name: &str, image: &DynamicImage) -> Result<()>;
    /// Image asset names, sorted.
    fn list_assets(&self) -> Result<Vec<String>>;
    fn asset_path(&self, name: &str) -> PathBuf;
}

/// Load the persisted mapping, creating it from the built-in table if absent.
///
/// An unreadable or malformed mapping is logged and treated as empty.
pub fn load_or_init_mapping(store: &dyn TemplateStore) -> TemplateMapping {
    match store.load_mapping() {
        Ok(Some(mapping)) => mapping,
        Ok(None) => {
            let mapping = TemplateMapping::builtin();
            match store.save_mapping(&mapping) {
                Ok(()) => tracing::info!("Wrote default template mapping"),
                Err(e) => tracing::warn!("Failed to persist default template mapping: {}", e),
            }
            mapping
        }
        Err(e) => {
            tracing::warn!("Template mapping unreadable, using empty mapping: {}", e);
            TemplateMapping::default()
        }
    }
}

pub fn is_image_name(name: &str) -> bool {
    Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}

fn is_jpeg(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("jpg") || ext.eq_ignore_ascii_case("jpeg"))
}

/// Write an image, dropping alpha for JPEG targets.
pub fn save_image(image: &DynamicImage, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    if is_jpeg(path) {
        image.to_rgb8().save(path)?;
    } else {
        image.save(path)?;
    }
    Ok(())
}

/// Templates directory on disk.
#[derive(Debug, Clone)]
pub struct FsTemplateStore {
    dir: PathBuf,
}

impl FsTemplateStore {
    /// Open the store, creating the directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir).map_err(|e| MemeMindError::Io {
            message: format!("Failed to create templates dir {}: {}", dir.display(), e),
        })?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn mapping_path(&self) -> PathBuf {
        self.dir.join(MAPPING_FILE)
    }
}

impl TemplateStore for FsTemplateStore {
    fn load_mapping(&self) -> Result<Option<TemplateMapping>> {
        let path = self.mapping_path();
        if !path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(&path)?;
        let mapping = serde_json::from_str(&content)?;
        Ok(Some(mapping))
    }

    fn save_mapping(&self, mapping: &TemplateMapping) -> Result<()> {
        std::fs::create_dir_all(&self.dir)?;
        let json = serde_json::to_string_pretty(mapping)?;
        std::fs::write(self.mapping_path(), json)?;
        Ok(())
    }

    fn exists(&self, name: &str) -> bool {
        self.asset_path(name).is_file()
    }

    fn load_asset(&self, name: &str) -> Result<DynamicImage> {
        let path = self.asset_path(name);
        image::open(&path).map_err(|e| MemeMindError::Image {
            message: format!("Failed to load template {}: {}", path.display(), e),
        })
    }

    fn save_asset(&self, name: &str, image: &DynamicImage) -> Result<()> {
        save_image(image, &self.asset_path(name))
    }

    fn list_assets(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in std::fs::read_dir(&self.dir)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            if let Some(name) = entry.file_name().to_str()
                && is_image_name(name)
            {
                names.push(name.to_string());
            }
        }
        names.sort();
        Ok(names)
    }

    /// Only the final path component of `name` is used.
    fn asset_path(&self, name: &str) -> PathBuf {
        self.dir.join(Path::new(name).file_name().unwrap_or_default())
    }
}

/// In-memory store
#[derive(Debug, Default)]
pub struct MemoryTemplateStore {
    root: PathBuf,
    mapping: Mutex<Option<TemplateMapping>>,
    assets: Mutex<BTreeMap<String, DynamicImage>>,
}

impl MemoryTemplateStore {
    pub fn new() -> Self {
        Self {
            root: PathBuf::from("memory"),
            ..Self::default()
        }
    }

    pub fn with_mapping(mapping: TemplateMapping) -> Self {
        let store = Self::new();
        *store.mapping.lock().unwrap_or_else(|e| e.into_inner()) = Some(mapping);
        store
    }

    pub fn asset_count(&self) -> usize {
        self.assets.lock().unwrap_or_else(|e| e.into_inner()).len()
    }
}

impl TemplateStore for MemoryTemplateStore {
    fn load_mapping(&self) -> Result<Option<TemplateMapping>> {
        Ok(self.mapping.lock().unwrap_or_else(|e| e.into_inner()).clone())
    }

    fn save_mapping(&self, mapping: &TemplateMapping) -> Result<()> {
        *self.mapping.lock().unwrap_or_else(|e| e.into_inner()) = Some(mapping.clone());
        Ok(())
    }

    fn exists(&self, name: &str) -> bool {
        self.assets
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .contains_key(name)
    }

    fn load_asset(&self, name: &str) -> Result<DynamicImage> {
        self.assets
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get(name)
            .cloned()
            .ok_or_else(|| MemeMindError::Template {
                message: format!("No template named {}", name),
            })
    }

    fn save_asset(&self, name: &str, image: &DynamicImage) -> Result<()> {
        self.assets
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(name.to_string(), image.clone());
        Ok(())
    }

    fn list_assets(&self) -> Result<Vec<String>> {
        Ok(self
            .assets
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .keys()
            .filter(|name| is_image_name(name))
            .cloned()
            .collect())
    }

    fn asset_path(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }
}
