//! Source loading with per-source error isolation.
//!
//! Turns a heterogeneous list of source descriptors (local paths or URLs)
//! into [`Document`]s. Every descriptor yields exactly one document — either
//! with extracted text or with a captured error — so one bad source never
//! aborts the batch.

use std::path::Path;
use std::time::Duration;

use crate::config::Config;
use crate::extract;
use crate::html;
use crate::models::{Document, SourceKind};

/// A per-source load failure, recorded on the document rather than raised.
#[derive(Debug)]
pub enum LoadError {
    /// File extension not handled by any reader.
    UnsupportedType(String),
    /// Filesystem read failed.
    FileRead(String),
    /// Transport-level failure: connect, DNS, or timeout.
    Network(String),
    /// Server responded with a non-success status.
    HttpStatus(u16),
    /// Content was fetched or read but could not be parsed into text.
    Parse(String),
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::UnsupportedType(ext) => write!(f, "unsupported file type: .{}", ext),
            LoadError::FileRead(e) => write!(f, "file read failed: {}", e),
            LoadError::Network(e) => write!(f, "network error: {}", e),
            LoadError::HttpStatus(code) => write!(f, "HTTP error: {}", code),
            LoadError::Parse(e) => write!(f, "parse error: {}", e),
        }
    }
}

impl std::error::Error for LoadError {}

/// True if the descriptor names a remote page rather than a local file.
/// Decided by URL-scheme prefix, not file extension.
pub fn is_url(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

/// Loads every source in order, one [`Document`] per descriptor.
pub fn load_sources(config: &Config, sources: &[String]) -> Vec<Document> {
    sources
        .iter()
        .map(|source| load_source(config, source))
        .collect()
}

/// Loads a single source descriptor.
pub fn load_source(config: &Config, source: &str) -> Document {
    if is_url(source) {
        match fetch_url(config, source) {
            Ok(text) => Document::ok(source, SourceKind::Url, text),
            Err(e) => Document::failed(source, SourceKind::Url, e.to_string()),
        }
    } else {
        match read_file(config, Path::new(source)) {
            Ok(text) => Document::ok(source, SourceKind::File, text),
            Err(e) => Document::failed(source, SourceKind::File, e.to_string()),
        }
    }
}

fn read_file(config: &Config, path: &Path) -> Result<String, LoadError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();

    if config
        .loader
        .text_extensions
        .iter()
        .any(|known| known.eq_ignore_ascii_case(&ext))
    {
        return std::fs::read_to_string(path).map_err(|e| LoadError::FileRead(e.to_string()));
    }

    match ext.as_str() {
        "pdf" => {
            let bytes = std::fs::read(path).map_err(|e| LoadError::FileRead(e.to_string()))?;
            extract::extract_pdf(&bytes).map_err(|e| LoadError::Parse(e.to_string()))
        }
        "docx" | "doc" => {
            let bytes = std::fs::read(path).map_err(|e| LoadError::FileRead(e.to_string()))?;
            extract::extract_docx(&bytes).map_err(|e| LoadError::Parse(e.to_string()))
        }
        other => Err(LoadError::UnsupportedType(other.to_string())),
    }
}

fn fetch_url(config: &Config, url: &str) -> Result<String, LoadError> {
    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(config.http.timeout_secs))
        .user_agent(&config.http.user_agent)
        .build()
        .map_err(|e| LoadError::Network(e.to_string()))?;

    let response = client
        .get(url)
        .send()
        .map_err(|e| LoadError::Network(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(LoadError::HttpStatus(status.as_u16()));
    }

    let body = response
        .text()
        .map_err(|e| LoadError::Network(e.to_string()))?;

    let text = html::extract_text(&body);
    if text.is_empty() {
        return Err(LoadError::Parse("page contains no extractable text".to_string()));
    }
    Ok(text)
}
