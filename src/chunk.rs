//! Paragraph-boundary text chunker.
//!
//! Splits document text into [`Chunk`]s on blank lines. Empty and
//! whitespace-only segments are discarded; surviving segments are numbered
//! contiguously within their document. Oversized paragraphs are kept whole —
//! chunk size is naturally variable and caller-uncontrolled.

use crate::models::{Chunk, Document};

/// Splits a loaded document into paragraph chunks.
///
/// `min_chars` drops paragraphs shorter than that many characters after
/// trimming; 0 keeps everything. Documents that failed to load (or loaded
/// empty) produce no chunks.
pub fn chunk_document(doc: &Document, min_chars: usize) -> Vec<Chunk> {
    let content = match &doc.content {
        Some(c) => c,
        None => return Vec::new(),
    };

    let mut chunks = Vec::new();
    for segment in content.split("\n\n") {
        let trimmed = segment.trim();
        if trimmed.is_empty() || trimmed.chars().count() < min_chars {
            continue;
        }
        chunks.push(Chunk {
            source: doc.source.clone(),
            index: chunks.len(),
            text: trimmed.to_string(),
        });
    }
    chunks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SourceKind;

    fn doc(content: &str) -> Document {
        Document::ok("kb.txt", SourceKind::File, content.to_string())
    }

    #[test]
    fn splits_on_blank_lines() {
        let chunks = chunk_document(&doc("Cats are great.\n\nDogs are loyal."), 0);
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].text, "Cats are great.");
        assert_eq!(chunks[1].text, "Dogs are loyal.");
    }

    #[test]
    fn indices_are_contiguous_per_document() {
        let chunks = chunk_document(&doc("A\n\n\n\nB\n\n   \n\nC"), 0);
        assert_eq!(chunks.len(), 3);
        for (i, c) in chunks.iter().enumerate() {
            assert_eq!(c.index, i);
        }
    }

    #[test]
    fn whitespace_only_segments_discarded() {
        let chunks = chunk_document(&doc("  \n\n\t\n\nReal text.\n\n"), 0);
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].text, "Real text.");
    }

    #[test]
    fn single_paragraph_is_one_chunk() {
        let chunks = chunk_document(&doc("Only one paragraph here.\nWith a second line."), 0);
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].text, "Only one paragraph here.\nWith a second line.");
    }

    #[test]
    fn error_document_produces_no_chunks() {
        let failed = Document::failed("bad.txt", SourceKind::File, "file read failed".to_string());
        assert!(chunk_document(&failed, 0).is_empty());
    }

    #[test]
    fn min_chars_drops_short_paragraphs() {
        let chunks = chunk_document(&doc("Hi\n\nA longer paragraph of text."), 5);
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].text, "A longer paragraph of text.");
        assert_eq!(chunks[0].index, 0);
    }

    #[test]
    fn concatenation_reconstructs_content() {
        let content = "First.\n\nSecond.\n\nThird.";
        let chunks = chunk_document(&doc(content), 0);
        let rebuilt = chunks
            .iter()
            .map(|c| c.text.as_str())
            .collect::<Vec<_>>()
            .join("\n\n");
        assert_eq!(rebuilt, content);
    }

    #[test]
    fn chunking_is_deterministic() {
        let d = doc("Alpha\n\nBeta\n\nGamma");
        let a = chunk_document(&d, 0);
        let b = chunk_document(&d, 0);
        assert_eq!(a, b);
    }

    #[test]
    fn source_inherited_from_document() {
        let chunks = chunk_document(&doc("Text."), 0);
        assert_eq!(chunks[0].source, "kb.txt");
    }
}
