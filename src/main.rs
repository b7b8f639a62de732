//! # Support KB CLI (`skb`)
//!
//! Command-line interface for the knowledge-base retrieval engine. The store
//! lives only in memory, so each invocation loads its sources, builds the
//! store, and answers within a single run.
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `skb load <sources...>` | Load sources and print per-source diagnostics |
//! | `skb search <query> --from <source>...` | Load, build, and print ranked chunks |
//! | `skb stats --from <source>...` | Load, build, and print store statistics |
//!
//! ## Examples
//!
//! ```bash
//! # Check which sources load cleanly
//! skb load faq.txt handbook.pdf https://example.com/help
//!
//! # Ask the knowledge base a question
//! skb search "reset password" --from faq.txt --from handbook.pdf
//!
//! # Machine-readable output for the chat layer
//! skb search "pricing plans" --from faq.txt --json
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use support_kb::config::{load_config, Config};
use support_kb::loader::load_sources;
use support_kb::store::KnowledgeStore;

/// Support KB — lexical knowledge-base retrieval for a support agent.
///
/// All commands accept an optional `--config` flag pointing to a TOML file;
/// without one, built-in defaults apply (top-3 results, 10s HTTP timeout,
/// txt/md treated as plain text).
#[derive(Parser)]
#[command(
    name = "skb",
    about = "Support KB — lexical knowledge-base retrieval for a support agent",
    version
)]
struct Cli {
    /// Path to configuration file (TOML). Defaults apply when omitted.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand)]
enum Commands {
    /// Load sources and report each outcome without building a store.
    ///
    /// Every source yields exactly one line: `ok` with the extracted text
    /// size, or the captured error. A failing source never aborts the batch.
    Load {
        /// Source descriptors: local paths (txt/md/pdf/docx) or http(s) URLs.
        #[arg(required = true)]
        sources: Vec<String>,
    },

    /// Search the knowledge base built from the given sources.
    ///
    /// Loads all sources, builds the in-memory store, and prints the top
    /// chunks ranked by lexical overlap with the query. Sources that fail
    /// to load are reported as diagnostics but do not block the search.
    Search {
        /// The query string.
        query: String,

        /// Source descriptors to index (repeatable).
        #[arg(long = "from", required = true)]
        sources: Vec<String>,

        /// Maximum number of results. Overrides `retrieval.max_results`.
        #[arg(long)]
        limit: Option<usize>,

        /// Emit results as JSON instead of plain text.
        #[arg(long)]
        json: bool,
    },

    /// Build the store from the given sources and print its statistics.
    Stats {
        /// Source descriptors to index (repeatable).
        #[arg(long = "from", required = true)]
        sources: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => Config::default(),
    };

    match cli.command {
        Commands::Load { sources } => run_load(&config, &sources),
        Commands::Search {
            query,
            sources,
            limit,
            json,
        } => run_search(&config, &query, &sources, limit, json),
        Commands::Stats { sources } => run_stats(&config, &sources),
    }
}

fn run_load(config: &Config, sources: &[String]) -> Result<()> {
    let documents = load_sources(config, sources);
    let mut failures = 0usize;

    for doc in &documents {
        match &doc.content {
            Some(content) => {
                println!("ok   {} ({} bytes)", doc.source, content.len());
            }
            None => {
                let error = doc.error.as_deref().unwrap_or("unknown error");
                println!("fail {} ({})", doc.source, error);
                failures += 1;
            }
        }
    }

    println!("loaded {} sources, {} failed", documents.len(), failures);
    Ok(())
}

fn run_search(
    config: &Config,
    query: &str,
    sources: &[String],
    limit: Option<usize>,
    json: bool,
) -> Result<()> {
    let documents = load_sources(config, sources);
    let mut store = KnowledgeStore::new();
    let report = store.build(&documents, config.retrieval.min_chunk_chars);

    let k = limit.unwrap_or(config.retrieval.max_results);
    let hits = store.query(query, k);

    if json {
        println!("{}", serde_json::to_string_pretty(&hits)?);
        return Ok(());
    }

    for err in &report.errors {
        eprintln!("warning: {}: {}", err.source, err.message);
    }

    if hits.is_empty() {
        println!("No results.");
        return Ok(());
    }

    for (i, hit) in hits.iter().enumerate() {
        println!("{}. [{}] {}", i + 1, hit.score, hit.source);
        println!("    excerpt: \"{}\"", excerpt(&hit.text));
        println!();
    }

    Ok(())
}

fn run_stats(config: &Config, sources: &[String]) -> Result<()> {
    let documents = load_sources(config, sources);
    let mut store = KnowledgeStore::new();
    let report = store.build(&documents, config.retrieval.min_chunk_chars);
    let stats = store.stats();

    println!("sources: {}", documents.len());
    println!("indexed sources: {}", stats.source_count);
    println!("chunks: {}", stats.chunk_count);
    println!("load errors: {}", report.errors.len());
    for err in &report.errors {
        println!("  {}: {}", err.source, err.message);
    }
    Ok(())
}

/// First 240 characters of a chunk, newlines flattened for display.
fn excerpt(text: &str) -> String {
    let flat = text.replace('\n', " ");
    let trimmed = flat.trim();
    if trimmed.chars().count() > 240 {
        let cut: String = trimmed.chars().take(240).collect();
        format!("{}...", cut)
    } else {
        trimmed.to_string()
    }
}
