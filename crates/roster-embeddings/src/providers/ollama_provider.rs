//! Ollama local embedding provider.

use std::time::Duration;

use roster_core::errors::EmbeddingError;
use roster_core::traits::IEmbeddingProvider;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::http;

const DEFAULT_BASE_URL: &str = "http://localhost:11434";

/// Embedding provider backed by a local Ollama server.
pub struct OllamaProvider {
    base_url: String,
    model: String,
    dimensions: usize,
    client: reqwest::blocking::Client,
}

#[derive(Serialize)]
struct OllamaEmbedRequest<'a> {
    model: &'a str,
    input: &'a [String],
}

#[derive(Deserialize)]
struct OllamaEmbedResponse {
    embeddings: Vec<Vec<f32>>,
}

impl OllamaProvider {
    /// `base_url` defaults to `http://localhost:11434` if `None`.
    pub fn new(
        model: String,
        dimensions: usize,
        base_url: Option<String>,
        timeout: Duration,
    ) -> Result<Self, EmbeddingError> {
        let base_url = base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            model,
            dimensions,
            client: http::build_client(timeout)?,
        })
    }

    fn request_embeddings(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        debug!(model = %self.model, texts = texts.len(), "requesting Ollama embeddings");
        let url = format!("{}/api/embed", self.base_url);
        let resp: OllamaEmbedResponse = http::post_json(
            &self.client,
            &url,
            None,
            &OllamaEmbedRequest {
                model: &self.model,
                input: texts,
            },
        )?;
        Ok(resp.embeddings)
    }
}

impl IEmbeddingProvider for OllamaProvider {
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        self.request_embeddings(&[text.to_string()])?
            .into_iter()
            .next()
            .ok_or_else(|| EmbeddingError::InferenceFailed {
                reason: "empty response".to_string(),
            })
    }

    fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        self.request_embeddings(texts)
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        "ollama"
    }
}
