//! HTTP transport for meme-mind
//!
//! Axum router with the JSON API, static serving for generated memes and
//! templates, and a minimal HTML page at `/`. Analysis and rendering run
//! on the blocking pool.

use crate::error::{MemeMindError, Result};
use crate::nlp::AnalysisResult;
use crate::server::MemeMindServer;
use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    response::{Html, IntoResponse},
    routing::{get, post},
};
use serde::Deserialize;
use serde_json::{Value, json};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

const INDEX_HTML: &str = r#"<!doctype html>
<html>
<head><meta charset="utf-8"><title>MemeMind</title></head>
<body>
<h1>MemeMind</h1>
<form id="f"><textarea id="t" rows="4" cols="60"></textarea><br><button>Generate meme</button></form>
<p id="err"></p>
<img id="meme" alt="">
<pre id="analysis"></pre>
<script>
document.getElementById('f').addEventListener('submit', async (ev) => {
  ev.preventDefault();
  const res = await fetch('/api/generate-meme', {
    method: 'POST',
    headers: {'Content-Type': 'application/json'},
    body: JSON.stringify({text: document.getElementById('t').value})
  });
  const body = await res.json();
  if (!res.ok) { document.getElementById('err').textContent = body.error; return; }
  document.getElementById('err').textContent = '';
  document.getElementById('meme').src = body.meme_url;
  document.getElementById('analysis').textContent = JSON.stringify(body.analysis, null, 2);
});
</script>
</body>
</html>
"#;

/// Request body for the text endpoints
#[derive(Debug, Deserialize)]
pub struct TextRequest {
    #[serde(default)]
    pub text: Option<String>,
}

fn require_text(payload: std::result::Result<Json<TextRequest>, JsonRejection>) -> Result<String> {
    match payload {
        Ok(Json(TextRequest { text: Some(text) })) => Ok(text),
        Ok(_) => Err(no_text()),
        Err(rejection) => {
            tracing::debug!("Rejected request body: {}", rejection);
            Err(no_text())
        }
    }
}

fn no_text() -> MemeMindError {
    MemeMindError::InvalidParams {
        message: "No text provided".to_string(),
    }
}

pub async fn index_handler() -> impl IntoResponse {
    Html(INDEX_HTML)
}

/// Health check endpoint
pub async fn health_handler() -> impl IntoResponse {
    "ok"
}

pub async fn analyze_handler(
    State(server): State<MemeMindServer>,
    payload: std::result::Result<Json<TextRequest>, JsonRejection>,
) -> Result<Json<AnalysisResult>> {
    let text = require_text(payload)?;
    let analysis = tokio::task::spawn_blocking(move || server.analyze(&text)).await?;
    Ok(Json(analysis))
}

pub async fn generate_meme_handler(
    State(server): State<MemeMindServer>,
    payload: std::result::Result<Json<TextRequest>, JsonRejection>,
) -> Result<Json<Value>> {
    let text = require_text(payload)?;
    let meme = tokio::task::spawn_blocking(move || server.generate_meme(&text)).await??;
    Ok(Json(json!({
        "meme_url": format!("/memes/{}", meme.file_name),
        "analysis": meme.analysis,
    })))
}

pub async fn list_templates_handler(State(server): State<MemeMindServer>) -> Result<Json<Value>> {
    let names = tokio::task::spawn_blocking(move || server.list_templates()).await??;
    let templates: Vec<Value> = names
        .into_iter()
        .map(|name| json!({ "url": format!("/templates/{}", name), "name": name }))
        .collect();
    Ok(Json(json!({ "templates": templates })))
}

/// Build the application router
pub fn router(server: MemeMindServer) -> Router {
    let memes = ServeDir::new(&server.config.paths.output_dir);
    let templates = ServeDir::new(&server.config.paths.templates_dir);

    Router::new()
        .route("/", get(index_handler))
        .route("/health", get(health_handler))
        .route("/api/analyze", post(analyze_handler))
        .route("/api/generate-meme", post(generate_meme_handler))
        .route("/api/templates", get(list_templates_handler))
        .nest_service("/memes", memes)
        .nest_service("/templates", templates)
        .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
        .with_state(server)
}

/// Start the HTTP server
pub async fn start_http_server(server: MemeMindServer) -> anyhow::Result<()> {
    let addr = server.config.server.bind_addr()?;
    let app = router(server);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind HTTP listener: {}", e))?;

    tracing::info!("Starting MemeMind on http://{}", addr);
    if addr.ip().is_unspecified() {
        tracing::info!(
            "Open http://localhost:{}/ in a browser to use the application",
            addr.port()
        );
    }

    axum::serve(listener, app)
        .await
        .map_err(|e| anyhow::anyhow!("HTTP server error: {}", e))?;

    Ok(())
}
