//! OpenAI-compatible embedding API provider.
//!
//! One blocking request per call, bounded by the configured timeout.
//! Failures are reported immediately; the caller decides what to do.

use std::time::Duration;

use roster_core::errors::EmbeddingError;
use roster_core::traits::IEmbeddingProvider;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::http;

const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1/embeddings";

/// Remote embedding provider speaking the `/v1/embeddings` protocol.
pub struct ApiProvider {
    model: String,
    api_key: String,
    endpoint: String,
    dimensions: usize,
    client: reqwest::blocking::Client,
}

#[derive(Serialize)]
struct EmbedRequest<'a> {
    model: &'a str,
    input: &'a [String],
}

#[derive(Deserialize)]
struct EmbedResponse {
    data: Vec<EmbedData>,
}

#[derive(Deserialize)]
struct EmbedData {
    #[serde(default)]
    index: usize,
    embedding: Vec<f32>,
}

impl ApiProvider {
    pub fn new(
        model: String,
        api_key: String,
        endpoint: Option<String>,
        dimensions: usize,
        timeout: Duration,
    ) -> Result<Self, EmbeddingError> {
        Ok(Self {
            model,
            api_key,
            endpoint: endpoint.unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            dimensions,
            client: http::build_client(timeout)?,
        })
    }

    fn request_embeddings(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        debug!(model = %self.model, texts = texts.len(), "requesting embeddings");
        let resp: EmbedResponse = http::post_json(
            &self.client,
            &self.endpoint,
            Some(&self.api_key),
            &EmbedRequest {
                model: &self.model,
                input: texts,
            },
        )?;

        Ok(into_ordered(resp))
    }
}

/// Vectors in input order. The protocol tags each vector with its input
/// position and does not promise to return them sorted.
fn into_ordered(resp: EmbedResponse) -> Vec<Vec<f32>> {
    let mut data = resp.data;
    data.sort_by_key(|d| d.index);
    data.into_iter().map(|d| d.embedding).collect()
}

impl IEmbeddingProvider for ApiProvider {
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
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unreachable_endpoint_is_an_inference_failure() {
        let provider = ApiProvider::new(
            "text-embedding-3-small".into(),
            "sk-test".into(),
            Some("http://127.0.0.1:1/v1/embeddings".into()),
            8,
            Duration::from_secs(2),
        )
        .unwrap();
        let err = provider.embed("hello").unwrap_err();
        assert!(matches!(err, EmbeddingError::InferenceFailed { .. }));
    }

    #[test]
    fn response_order_follows_index() {
        let json = r#"{"data": [
            {"index": 2, "embedding": [0.0, 0.0, 1.0]},
            {"index": 0, "embedding": [1.0, 0.0, 0.0]},
            {"index": 1, "embedding": [0.0, 1.0, 0.0]}
        ]}"#;
        let resp: EmbedResponse = serde_json::from_str(json).unwrap();
        assert_eq!(
            into_ordered(resp),
            vec![
                vec![1.0, 0.0, 0.0],
                vec![0.0, 1.0, 0.0],
                vec![0.0, 0.0, 1.0],
            ]
        );
    }

    #[test]
    fn untagged_single_vector_is_kept() {
        let resp: EmbedResponse =
            serde_json::from_str(r#"{"data": [{"embedding": [0.5, 0.5]}]}"#).unwrap();
        assert_eq!(into_ordered(resp), vec![vec![0.5, 0.5]]);
    }
}
