//! Loads JSON or YAML documents from disk.

use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::AppError;

/// Document encodings the loader understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    /// `.json` and anything without a recognised extension.
    Json,
    /// `.yaml` / `.yml`.
    Yaml,
}

impl DocumentFormat {
    /// Picks the format from the file extension.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("yaml" | "yml") => Self::Yaml,
            _ => Self::Json,
        }
    }
}

/// Parses `text` as `format`.
///
/// # Errors
///
/// Returns `AppError::Json` or `AppError::Yaml` if the document is malformed.
pub fn parse_document<T: DeserializeOwned>(
    text: &str,
    format: DocumentFormat,
) -> Result<T, AppError> {
    let document = match format {
        DocumentFormat::Json => serde_json::from_str(text)?,
        DocumentFormat::Yaml => serde_yaml::from_str(text)?,
    };
    Ok(document)
}

/// Reads and parses the document at `path`.
///
/// # Errors
///
/// Returns `AppError::Io` if the file cannot be read, or a parse error.
pub fn load_document<T: DeserializeOwned>(path: &Path) -> Result<T, AppError> {
    let text = std::fs::read_to_string(path)?;
    parse_document(&text, DocumentFormat::from_path(path))
}
