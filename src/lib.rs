pub mod config;
pub mod error;
pub mod http;
pub mod meme;
pub mod nlp;
pub mod server;
pub mod setup;

pub use config::Config;
pub use error::{MemeMindError, Result};
pub use server::MemeMindServer;
