//! In-memory knowledge store.
//!
//! [`KnowledgeStore`] is an explicit value owned by the caller — one store
//! per session is cheap — never a hidden global. A build replaces the chunk
//! sequence wholesale; there is no incremental update and nothing persists
//! across process restarts. The store performs no internal locking: hosts
//! with concurrent sessions must serialize builds and queries themselves.

use std::collections::HashSet;

use crate::chunk::chunk_document;
use crate::models::{BuildError, BuildReport, Chunk, Document, QueryHit, StoreStats};
use crate::search;

/// An ordered, in-memory collection of chunks available for querying.
#[derive(Debug, Default)]
pub struct KnowledgeStore {
    chunks: Vec<Chunk>,
}

impl KnowledgeStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds the store from a batch of loaded documents, replacing any
    /// previous contents.
    ///
    /// Documents that carry a load error contribute zero chunks; their
    /// errors are aggregated into the report so successful sources still
    /// index while failures stay visible to the caller.
    pub fn build(&mut self, documents: &[Document], min_chunk_chars: usize) -> BuildReport {
        let mut chunks = Vec::new();
        let mut errors = Vec::new();

        for doc in documents {
            if let Some(message) = &doc.error {
                errors.push(BuildError {
                    source: doc.source.clone(),
                    message: message.clone(),
                });
                continue;
            }
            chunks.extend(chunk_document(doc, min_chunk_chars));
        }

        self.chunks = chunks;
        BuildReport {
            chunk_count: self.chunks.len(),
            errors,
        }
    }

    /// Returns the top-`k` chunks by lexical overlap with `query`.
    ///
    /// Read-only. An empty store, an empty query, or zero overlap all yield
    /// an empty result — "no relevant chunks" is a normal answer path for
    /// the caller, not a fault.
    pub fn query(&self, query: &str, k: usize) -> Vec<QueryHit> {
        search::rank(&self.chunks, query, k)
    }

    /// Empties the store without reloading anything.
    pub fn reset(&mut self) {
        self.chunks.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Chunk and distinct-source counts for the current contents.
    pub fn stats(&self) -> StoreStats {
        let sources: HashSet<&str> = self.chunks.iter().map(|c| c.source.as_str()).collect();
        StoreStats {
            chunk_count: self.chunks.len(),
            source_count: sources.len(),
        }
    }

    /// The stored chunks, in insertion order.
    pub fn chunks(&self) -> &[Chunk] {
        &self.chunks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SourceKind;

    fn ok_doc(source: &str, content: &str) -> Document {
        Document::ok(source, SourceKind::File, content.to_string())
    }

    #[test]
    fn build_from_empty_batch_yields_empty_store() {
        let mut store = KnowledgeStore::new();
        let report = store.build(&[], 0);
        assert_eq!(report.chunk_count, 0);
        assert!(report.errors.is_empty());
        assert!(store.query("anything", 3).is_empty());
    }

    #[test]
    fn build_replaces_previous_contents() {
        let mut store = KnowledgeStore::new();
        store.build(&[ok_doc("old.txt", "Old paragraph.")], 0);
        let report = store.build(&[ok_doc("new.txt", "New paragraph.")], 0);
        assert_eq!(report.chunk_count, 1);
        assert!(store.query("old", 3).is_empty());
        assert_eq!(store.query("new", 3).len(), 1);
    }

    #[test]
    fn error_documents_reported_but_do_not_block_others() {
        let mut store = KnowledgeStore::new();
        let docs = vec![
            Document::failed("http://x/404", SourceKind::Url, "HTTP error: 404".to_string()),
            ok_doc("kb.txt", "Working content here."),
        ];
        let report = store.build(&docs, 0);
        assert_eq!(report.chunk_count, 1);
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].source, "http://x/404");
        assert_eq!(report.errors[0].message, "HTTP error: 404");
        assert_eq!(store.query("working content", 3).len(), 1);
    }

    #[test]
    fn rebuild_from_same_documents_is_idempotent() {
        let docs = vec![ok_doc("kb.txt", "One.\n\nTwo.\n\nThree.")];
        let mut store = KnowledgeStore::new();
        store.build(&docs, 0);
        let first: Vec<Chunk> = store.chunks().to_vec();
        store.build(&docs, 0);
        assert_eq!(store.chunks(), first.as_slice());
    }

    #[test]
    fn reset_empties_without_reload() {
        let mut store = KnowledgeStore::new();
        store.build(&[ok_doc("kb.txt", "Some content.")], 0);
        assert!(!store.is_empty());
        store.reset();
        assert!(store.is_empty());
        assert!(store.query("content", 3).is_empty());
    }

    #[test]
    fn stats_count_chunks_and_distinct_sources() {
        let mut store = KnowledgeStore::new();
        store.build(
            &[
                ok_doc("a.txt", "One.\n\nTwo."),
                ok_doc("b.txt", "Three."),
            ],
            0,
        );
        let stats = store.stats();
        assert_eq!(stats.chunk_count, 3);
        assert_eq!(stats.source_count, 2);
    }

    #[test]
    fn empty_query_on_nonempty_store_returns_empty() {
        let mut store = KnowledgeStore::new();
        store.build(&[ok_doc("kb.txt", "Some content.")], 0);
        assert!(store.query("", 3).is_empty());
    }

    #[test]
    fn min_chunk_chars_forwarded_to_chunker() {
        let mut store = KnowledgeStore::new();
        let report = store.build(&[ok_doc("kb.txt", "Hi\n\nA longer paragraph.")], 4);
        assert_eq!(report.chunk_count, 1);
    }
}
