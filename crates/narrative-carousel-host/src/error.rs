//! Narrative Carousel host: error types.

use narrative_carousel_core::error::DomainError;
use thiserror::Error;

/// Startup and runtime errors for the host.
#[derive(Debug, Error)]
pub enum AppError {
    /// A required environment variable is missing or a document is unusable.
    #[error("configuration error: {0}")]
    Config(String),

    /// Reading a document from disk failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// A JSON document failed to parse or serialize.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// A YAML document failed to parse.
    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The carousel rejected an operation.
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),
}
