use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub retrieval: RetrievalConfig,
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub loader: LoaderConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RetrievalConfig {
    /// Maximum number of chunks returned per query (the K in top-K).
    #[serde(default = "default_max_results")]
    pub max_results: usize,
    /// Paragraphs shorter than this many characters (after trimming) are
    /// dropped during chunking. 0 keeps everything.
    #[serde(default)]
    pub min_chunk_chars: usize,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            max_results: default_max_results(),
            min_chunk_chars: 0,
        }
    }
}

fn default_max_results() -> usize {
    3
}

#[derive(Debug, Deserialize, Clone)]
pub struct HttpConfig {
    /// Per-request timeout for URL fetches, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// User-Agent header sent with URL fetches. Some servers reject
    /// unlabeled automated clients.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0 Safari/537.36"
        .to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoaderConfig {
    /// File extensions read as plain text. Matched case-insensitively.
    #[serde(default = "default_text_extensions")]
    pub text_extensions: Vec<String>,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            text_extensions: default_text_extensions(),
        }
    }
}

fn default_text_extensions() -> Vec<String> {
    vec!["txt".to_string(), "md".to_string()]
}

pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: Config = toml::from_str(&content).with_context(|| "Failed to parse config file")?;

    if config.retrieval.max_results < 1 {
        anyhow::bail!("retrieval.max_results must be >= 1");
    }

    if config.http.timeout_secs == 0 {
        anyhow::bail!("http.timeout_secs must be > 0");
    }

    if config.loader.text_extensions.is_empty() {
        anyhow::bail!("loader.text_extensions must not be empty");
    }

    Ok(config)
}
