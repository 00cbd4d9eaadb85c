use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Which embedder collaborator to construct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmbeddingProviderKind {
    /// Offline hashed TF-IDF vectors.
    Tfidf,
    /// OpenAI-compatible `/v1/embeddings` endpoint.
    Api,
    /// Local Ollama server.
    Ollama,
}

impl fmt::Display for EmbeddingProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Tfidf => "tfidf",
            Self::Api => "api",
            Self::Ollama => "ollama",
        })
    }
}

impl FromStr for EmbeddingProviderKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "tfidf" => Ok(Self::Tfidf),
            "api" => Ok(Self::Api),
            "ollama" => Ok(Self::Ollama),
            other => Err(format!("unknown embedding provider: {other}")),
        }
    }
}

/// Embedding subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingConfig {
    pub provider: EmbeddingProviderKind,
    /// Model name sent to remote providers.
    pub model: String,
    /// Expected vector dimensions.
    pub dimensions: usize,
    /// Override for the provider's default endpoint.
    pub endpoint: Option<String>,
    pub api_key: Option<String>,
    /// Texts per provider call during corpus build.
    pub batch_size: usize,
    pub timeout_secs: u64,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            provider: EmbeddingProviderKind::Tfidf,
            model: defaults::DEFAULT_EMBEDDING_MODEL.to_string(),
            dimensions: defaults::DEFAULT_EMBEDDING_DIMENSIONS,
            endpoint: None,
            api_key: None,
            batch_size: defaults::DEFAULT_EMBEDDING_BATCH_SIZE,
            timeout_secs: defaults::DEFAULT_EMBEDDING_TIMEOUT_SECS,
        }
    }
}
