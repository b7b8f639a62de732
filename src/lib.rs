//! # Support KB
//!
//! A lexical knowledge-base retrieval engine for a conversational support
//! agent. Documents and web pages are loaded into plain text, split into
//! paragraph chunks, and ranked against queries by word-token overlap —
//! no embeddings, no persistence, no background indexing.
//!
//! ## Pipeline
//!
//! ```text
//! ┌──────────────┐   ┌───────────┐   ┌─────────────────┐
//! │   Loader      │──▶│  Chunker   │──▶│ KnowledgeStore  │
//! │ txt/pdf/docx │   │ paragraph │   │  (in-memory)    │
//! │ + web pages  │   │  splits   │   │  lexical top-K  │
//! └──────────────┘   └───────────┘   └─────────────────┘
//! ```
//!
//! ## Quick start
//!
//! ```no_run
//! use support_kb::config::Config;
//! use support_kb::loader::load_sources;
//! use support_kb::store::KnowledgeStore;
//!
//! let config = Config::default();
//! let sources = vec!["faq.txt".to_string(), "https://example.com/help".to_string()];
//! let documents = load_sources(&config, &sources);
//!
//! let mut store = KnowledgeStore::new();
//! let report = store.build(&documents, config.retrieval.min_chunk_chars);
//! println!("indexed {} chunks, {} errors", report.chunk_count, report.errors.len());
//!
//! for hit in store.query("how do I reset my password", config.retrieval.max_results) {
//!     println!("[{}] {} — {}", hit.score, hit.source, hit.text);
//! }
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | TOML configuration parsing |
//! | [`models`] | Core data types |
//! | [`loader`] | Per-source loading with error isolation |
//! | [`extract`] | PDF and DOCX text extraction |
//! | [`html`] | Web page text extraction |
//! | [`chunk`] | Paragraph chunking |
//! | [`search`] | Tokenization and overlap ranking |
//! | [`store`] | In-memory knowledge store |

pub mod chunk;
pub mod config;
pub mod extract;
pub mod html;
pub mod loader;
pub mod models;
pub mod search;
pub mod store;
