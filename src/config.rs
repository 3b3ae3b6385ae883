use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::PathBuf;

/// Main configuration structure loaded from meme_mind.toml and environment variables
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub selection: SelectionConfig,
    /// Runtime configuration loaded from environment variables
    #[serde(skip)]
    pub runtime: RuntimeConfig,
}

/// Filesystem locations for templates, generated memes and fonts
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PathsConfig {
    pub templates_dir: PathBuf,
    pub output_dir: PathBuf,
    pub fonts_dir: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            templates_dir: PathBuf::from("meme/templates"),
            output_dir: PathBuf::from("meme/output"),
            fonts_dir: PathBuf::from("meme/fonts"),
        }
    }
}

/// HTTP listener settings
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
        }
    }
}

impl ServerConfig {
    pub fn bind_addr(&self) -> anyhow::Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid bind address {}:{}: {}", self.host, self.port, e))
    }
}

/// Image rendering settings
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Explicit TrueType font; discovery falls back to system fonts when unset
    pub font_path: Option<PathBuf>,
    pub placeholder_width: u32,
    pub placeholder_height: u32,
    pub placeholder_font_size: f32,
    /// Caption font size is image width divided by this value
    pub font_scale_divisor: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            font_path: None,
            placeholder_width: 800,
            placeholder_height: 600,
            placeholder_font_size: 40.0,
            font_scale_divisor: 10,
        }
    }
}

/// Template selection settings
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct SelectionConfig {
    /// Fixed seed for template choice; entropy-seeded when unset
    pub seed: Option<u64>,
}

/// Runtime configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub log_level: String,
    pub debug: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            log_level: "meme_mind=info,tower_http=info".to_string(),
            debug: false,
        }
    }
}

impl RuntimeConfig {
    /// Load runtime configuration from environment variables
    pub fn load_from_env() -> Self {
        Self {
            log_level: std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "meme_mind=info,tower_http=info".to_string()),
            debug: std::env::var("MEME_MIND_DEBUG")
                .ok()
                .is_some_and(|v| v == "true" || v == "1"),
        }
    }

    /// Tracing filter: `log_level` as given, with debug directives for this
    /// crate and tower_http layered on top when `debug` is set.
    pub fn filter_directives(&self) -> String {
        const DEBUG_DIRECTIVES: &str = "meme_mind=debug,tower_http=debug";
        let base = self.log_level.trim().trim_end_matches(',');
        match (self.debug, base.is_empty()) {
            (false, _) => base.to_string(),
            (true, true) => DEBUG_DIRECTIVES.to_string(),
            (true, false) => format!("{base},{DEBUG_DIRECTIVES}"),
        }
    }
}

impl Config {
    /// Load configuration from TOML file and environment variables
    /// Uses MEME_MIND_CONFIG environment variable or defaults to "meme_mind.toml"
    pub fn load() -> anyhow::Result<Self> {
        // Load environment variables:
        // 1) MEME_MIND_ENV_FILE if set
        // 2) ./.env
        if let Ok(env_path) = std::env::var("MEME_MIND_ENV_FILE") {
            let _ = dotenvy::from_path(env_path);
        } else {
            let _ = dotenvy::from_path(".env");
        }

        let config_path =
            std::env::var("MEME_MIND_CONFIG").unwrap_or_else(|_| "meme_mind.toml".to_string());

        let mut config: Config = if let Ok(content) = std::fs::read_to_string(&config_path) {
            toml::from_str(&content)?
        } else {
            tracing::debug!("Config file {} not found, using defaults", config_path);
            Self::default()
        };

        config.apply_env_overrides();
        config.runtime = RuntimeConfig::load_from_env();
        config.validate()?;

        Ok(config)
    }

    /// Parse configuration from a TOML string without consulting the environment
    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        let mut config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(host) = std::env::var("MEME_MIND_HOST") {
            self.server.host = host;
        }
        if let Some(port) = std::env::var("MEME_MIND_PORT")
            .ok()
            .and_then(|v| v.parse::<u16>().ok())
        {
            self.server.port = port;
        }
        if let Ok(dir) = std::env::var("MEME_MIND_TEMPLATES_DIR") {
            self.paths.templates_dir = PathBuf::from(dir);
        }
        if let Ok(dir) = std::env::var("MEME_MIND_OUTPUT_DIR") {
            self.paths.output_dir = PathBuf::from(dir);
        }
        if let Ok(dir) = std::env::var("MEME_MIND_FONTS_DIR") {
            self.paths.fonts_dir = PathBuf::from(dir);
        }
        if let Ok(font) = std::env::var("MEME_MIND_FONT") {
            self.render.font_path = Some(PathBuf::from(font));
        }
        if let Some(seed) = std::env::var("MEME_MIND_SEED")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
        {
            self.selection.seed = Some(seed);
        }
    }

    /// Validate the configuration, clamping recoverable values
    pub fn validate(&mut self) -> anyhow::Result<()> {
        if self.server.port == 0 {
            anyhow::bail!("server.port must be non-zero");
        }
        if self.render.placeholder_width == 0 || self.render.placeholder_height == 0 {
            anyhow::bail!("render.placeholder_width and placeholder_height must be > 0");
        }
        if self.render.font_scale_divisor == 0 {
            tracing::warn!("render.font_scale_divisor of 0 is invalid, using 10");
            self.render.font_scale_divisor = 10;
        }
        if !(8.0..=200.0).contains(&self.render.placeholder_font_size) {
            tracing::warn!(
                "render.placeholder_font_size {} out of range, clamping to 8..=200",
                self.render.placeholder_font_size
            );
            self.render.placeholder_font_size = self.render.placeholder_font_size.clamp(8.0, 200.0);
        }
        if let Some(font) = &self.render.font_path
            && !font.exists()
        {
            tracing::warn!(
                "Configured font {} does not exist; falling back to discovery",
                font.display()
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_layers_on_top_of_user_filter() {
        let mut runtime = RuntimeConfig {
            log_level: "warn,hyper=info".to_string(),
            debug: false,
        };
        assert_eq!(runtime.filter_directives(), "warn,hyper=info");

        runtime.debug = true;
        assert_eq!(
            runtime.filter_directives(),
            "warn,hyper=info,meme_mind=debug,tower_http=debug"
        );

        runtime.log_level = String::new();
        assert_eq!(runtime.filter_directives(), "meme_mind=debug,tower_http=debug");
    }

    #[test]
    fn test_default_paths_and_port() {
        let config = Config::default();
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.paths.templates_dir, PathBuf::from("meme/templates"));
        assert_eq!(config.paths.output_dir, PathBuf::from("meme/output"));
        assert_eq!(config.render.placeholder_width, 800);
        assert_eq!(config.render.placeholder_height, 600);
        assert!(config.selection.seed.is_none());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config = Config::from_toml_str(
            r#"
            [server]
            port = 8080

            [selection]
            seed = 7
            "#,
        )
        .unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.selection.seed, Some(7));
        assert_eq!(config.render.font_scale_divisor, 10);
    }

    #[test]
    fn test_validation_rejects_zero_port_and_clamps_font_size() {
        assert!(Config::from_toml_str("[server]\nport = 0\n").is_err());

        let config = Config::from_toml_str("[render]\nplaceholder_font_size = 500.0\n").unwrap();
        assert_eq!(config.render.placeholder_font_size, 200.0);
    }

    #[test]
    fn test_bind_addr() {
        let server = ServerConfig {
            host: "127.0.0.1".into(),
            port: 9000,
        };
        assert_eq!(server.bind_addr().unwrap().port(), 9000);
    }
}
