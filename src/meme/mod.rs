//! Meme generation: template mapping and storage, selection, captions, rendering.

pub mod caption;
pub mod draw;
pub mod font;
pub mod mapping;
pub mod render;
pub mod selector;
pub mod store;

pub use caption::{Caption, generate_caption};
pub use mapping::TemplateMapping;
pub use render::MemeRenderer;
pub use selector::{SelectedTemplate, TemplateSelector};
pub use store::{FsTemplateStore, MemoryTemplateStore, TemplateStore};
