//! Core data models for the knowledge-base pipeline.
//!
//! These types represent the documents, chunks, and query results that flow
//! from the loader through the store to the caller.

use serde::Serialize;

/// How a source descriptor was interpreted by the loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    File,
    Url,
}

/// One loaded source: either extracted text or a captured load error.
///
/// The loader produces exactly one `Document` per source descriptor.
/// Exactly one of `content` / `error` is set. Documents are never mutated
/// after loading; error documents are excluded from indexing but surfaced
/// to the caller as diagnostics.
#[derive(Debug, Clone)]
pub struct Document {
    /// The original source descriptor (path or URL).
    pub source: String,
    pub kind: SourceKind,
    /// Extracted plain text, if loading succeeded.
    pub content: Option<String>,
    /// Human-readable failure description, if loading failed.
    pub error: Option<String>,
}

impl Document {
    pub fn ok(source: impl Into<String>, kind: SourceKind, content: String) -> Self {
        Self {
            source: source.into(),
            kind,
            content: Some(content),
            error: None,
        }
    }

    pub fn failed(source: impl Into<String>, kind: SourceKind, error: String) -> Self {
        Self {
            source: source.into(),
            kind,
            content: None,
            error: Some(error),
        }
    }
}

/// A paragraph-bounded segment of a document, the atomic unit of retrieval.
///
/// Invariant: `text` is non-empty and not whitespace-only. `index` is the
/// chunk's ordinal position within its parent document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    pub source: String,
    pub index: usize,
    pub text: String,
}

/// A per-source failure recorded during a store build.
#[derive(Debug, Clone, Serialize)]
pub struct BuildError {
    pub source: String,
    pub message: String,
}

/// Outcome of a store build: how many chunks were indexed and which
/// sources failed to contribute.
#[derive(Debug, Clone, Serialize)]
pub struct BuildReport {
    pub chunk_count: usize,
    pub errors: Vec<BuildError>,
}

/// A ranked chunk returned from a query, paired with its origin so the
/// caller can attribute the answer.
#[derive(Debug, Clone, Serialize)]
pub struct QueryHit {
    pub text: String,
    pub source: String,
    /// Count of distinct word tokens shared with the query.
    pub score: usize,
}

/// Summary counts for a built store.
#[derive(Debug, Clone, Serialize)]
pub struct StoreStats {
    pub chunk_count: usize,
    pub source_count: usize,
}
