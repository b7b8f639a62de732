//! Lexical overlap scoring and ranking.
//!
//! A chunk's score against a query is the number of distinct word tokens the
//! two share: case-insensitive, split on non-alphanumeric boundaries, no
//! stemming and no stopword removal. Zero-overlap chunks are excluded from
//! results entirely.

use std::collections::HashSet;

use crate::models::{Chunk, QueryHit};

/// Tokenizes text into a case-insensitive set of word tokens.
pub fn tokenize(text: &str) -> HashSet<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(|t| t.to_lowercase())
        .collect()
}

/// Ranks chunks against a query, returning at most `k` hits.
///
/// Chunks are scored by token-set intersection size, sorted descending, with
/// ties kept in insertion order so the same query against the same chunks
/// always returns identical output. An empty or whitespace-only query
/// returns no hits.
pub fn rank(chunks: &[Chunk], query: &str, k: usize) -> Vec<QueryHit> {
    let query_tokens = tokenize(query);
    if query_tokens.is_empty() {
        return Vec::new();
    }

    let mut hits: Vec<QueryHit> = chunks
        .iter()
        .filter_map(|chunk| {
            let overlap = tokenize(&chunk.text)
                .intersection(&query_tokens)
                .count();
            if overlap > 0 {
                Some(QueryHit {
                    text: chunk.text.clone(),
                    source: chunk.source.clone(),
                    score: overlap,
                })
            } else {
                None
            }
        })
        .collect();

    // Stable sort: equal scores keep chunk insertion order.
    hits.sort_by(|a, b| b.score.cmp(&a.score));
    hits.truncate(k);
    hits
}
