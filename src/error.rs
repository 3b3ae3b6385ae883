//! Domain-specific error types for meme-mind

use axum::{
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Main error type for the meme-mind service
#[derive(Error, Debug)]
pub enum MemeMindError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("I/O error: {message}")]
    Io { message: String },

    #[error("Image error: {message}")]
    Image { message: String },

    #[error("Template error: {message}")]
    Template { message: String },

    #[error("Serialization error: {message}")]
    Serialization { message: String },

    #[error("Invalid parameters: {message}")]
    InvalidParams { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl From<anyhow::Error> for MemeMindError {
    fn from(err: anyhow::Error) -> Self {
        MemeMindError::Internal {
            message: err.to_string(),
        }
    }
}

impl From<std::io::Error> for MemeMindError {
    fn from(err: std::io::Error) -> Self {
        MemeMindError::Io {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for MemeMindError {
    fn from(err: serde_json::Error) -> Self {
        MemeMindError::Serialization {
            message: err.to_string(),
        }
    }
}

impl From<image::ImageError> for MemeMindError {
    fn from(err: image::ImageError) -> Self {
        MemeMindError::Image {
            message: err.to_string(),
        }
    }
}

impl From<tokio::task::JoinError> for MemeMindError {
    fn from(err: tokio::task::JoinError) -> Self {
        MemeMindError::Internal {
            message: format!("Background task failed: {}", err),
        }
    }
}

impl MemeMindError {
    /// HTTP status and short label for this error
    pub fn status(&self) -> (StatusCode, &'static str) {
        match self {
            MemeMindError::Config { .. } => (StatusCode::INTERNAL_SERVER_ERROR, "Configuration error"),
            MemeMindError::Io { .. } => (StatusCode::INTERNAL_SERVER_ERROR, "I/O error"),
            MemeMindError::Image { .. } => (StatusCode::INTERNAL_SERVER_ERROR, "Image error"),
            MemeMindError::Template { .. } => (StatusCode::INTERNAL_SERVER_ERROR, "Template error"),
            MemeMindError::Serialization { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Serialization error")
            }
            MemeMindError::InvalidParams { .. } => (StatusCode::BAD_REQUEST, "Invalid parameters"),
            MemeMindError::Internal { .. } => (StatusCode::INTERNAL_SERVER_ERROR, "Internal error"),
        }
    }
}

/// Convert MemeMindError to an HTTP JSON error response
impl IntoResponse for MemeMindError {
    fn into_response(self) -> Response {
        let (status, label) = self.status();
        let message = match self {
            // Client errors carry their message verbatim
            MemeMindError::InvalidParams { message } => message,
            other => {
                tracing::error!("{}: {}", label, other);
                other.to_string()
            }
        };
        (
            status,
            [(header::CONTENT_TYPE, "application/json")],
            json!({ "error": message }).to_string(),
        )
            .into_response()
    }
}

/// Result type alias for MemeMind operations
pub type Result<T> = std::result::Result<T, MemeMindError>;
