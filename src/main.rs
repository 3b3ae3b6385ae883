use anyhow::Result;
use clap::Parser;
use meme_mind::{config::Config, http::start_http_server, server::MemeMindServer, setup};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "meme-mind")]
#[command(about = "Turns text into memes based on its sentiment, emotions and tone", long_about = None)]
struct Cli {
    /// Create directories and the default template mapping before starting
    #[arg(long)]
    setup: bool,

    /// Port to listen on (defaults to the configured port, 5000)
    #[arg(long)]
    port: Option<u16>,

    /// Host/interface to bind
    #[arg(long)]
    host: Option<String>,

    /// Verbose logging
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        e
    })?;
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(host) = cli.host {
        config.server.host = host;
    }
    config.runtime.debug |= cli.debug;

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(
            config.runtime.filter_directives(),
        ))
        .with_target(false)
        .init();

    if cli.setup {
        let report = setup::setup_resources(&config);
        match &report.font {
            Some(font) => info!("Caption font: {}", font.display()),
            None => info!("Caption font: bundled DejaVu Sans Bold"),
        }
    }

    info!(
        "Configuration loaded: templates={}, output={}",
        config.paths.templates_dir.display(),
        config.paths.output_dir.display()
    );

    let server = MemeMindServer::new(config)?;
    start_http_server(server).await
}
