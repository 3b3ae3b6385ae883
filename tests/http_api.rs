use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use meme_mind::{config::Config, http::router, server::MemeMindServer};
use serde_json::{Value, json};
use tower::ServiceExt;

fn app(root: &std::path::Path) -> Router {
    let mut config = Config::default();
    config.paths.templates_dir = root.join("templates");
    config.paths.output_dir = root.join("output");
    config.paths.fonts_dir = root.join("fonts");
    config.selection.seed = Some(5);
    router(MemeMindServer::new(config).unwrap())
}

fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Vec<u8>) {
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    (status, bytes.to_vec())
}

async fn send_json(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let (status, bytes) = send(app, req).await;
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn health_and_index() {
    let dir = tempfile::tempdir().unwrap();
    let app = app(dir.path());

    let (status, body) = send(&app, get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"ok");

    let (status, body) = send(&app, get("/")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(String::from_utf8(body).unwrap().contains("MemeMind"));
}

#[tokio::test]
async fn analyze_returns_analysis_json() {
    let dir = tempfile::tempdir().unwrap();
    let app = app(dir.path());

    let body = json!({"text": "Really?"}).to_string();
    let (status, value) = send_json(&app, post_json("/api/analyze", &body)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(value["original_text"], "Really?");
    assert_eq!(value["tone"], "inquisitive");
    assert!(value["emotions"].as_array().is_some_and(|e| !e.is_empty()));
}

#[tokio::test]
async fn missing_text_is_a_bad_request() {
    let dir = tempfile::tempdir().unwrap();
    let app = app(dir.path());

    for (uri, body) in [
        ("/api/analyze", "{}"),
        ("/api/analyze", "not json"),
        ("/api/generate-meme", r#"{"prompt": "hi"}"#),
        ("/api/generate-meme", ""),
    ] {
        let (status, value) = send_json(&app, post_json(uri, body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri} {body}");
        assert_eq!(value, json!({"error": "No text provided"}));
    }

    let req = Request::builder()
        .method("POST")
        .uri("/api/analyze")
        .body(Body::from(r#"{"text": "hi"}"#))
        .unwrap();
    let (status, _) = send_json(&app, req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn generate_meme_then_fetch_it() {
    let dir = tempfile::tempdir().unwrap();
    let app = app(dir.path());

    let body = json!({"text": "I am so happy today! This is the best day ever!"}).to_string();
    let (status, value) = send_json(&app, post_json("/api/generate-meme", &body)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(value["analysis"]["tone"], "excited");

    let url = value["meme_url"].as_str().unwrap().to_string();
    assert!(url.starts_with("/memes/meme_") && url.ends_with(".jpg"));

    let (status, bytes) = send(&app, get(&url)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(image::load_from_memory(&bytes).is_ok());

    let (status, value) = send_json(&app, get("/api/templates")).await;
    assert_eq!(status, StatusCode::OK);
    let templates = value["templates"].as_array().unwrap();
    assert!(!templates.is_empty());
    let first = &templates[0];
    let name = first["name"].as_str().unwrap();
    assert_eq!(first["url"], format!("/templates/{name}"));

    let (status, _) = send(&app, get(&format!("/templates/{name}"))).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn unknown_meme_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let app = app(dir.path());
    let (status, _) = send(&app, get("/memes/nope.jpg")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
