//! Embedder implementations and the config-driven factory.

pub mod api_provider;
mod http;
pub mod ollama_provider;
pub mod tfidf_provider;

use std::time::Duration;

use roster_core::config::{EmbeddingConfig, EmbeddingProviderKind};
use roster_core::errors::EmbeddingError;
use roster_core::traits::IEmbeddingProvider;
use tracing::info;

pub use api_provider::ApiProvider;
pub use ollama_provider::OllamaProvider;
pub use tfidf_provider::TfIdfProvider;

/// Construct the provider named by `config.provider`.
///
/// # Errors
/// `ProviderUnavailable` when the API provider has no key, or an HTTP
/// client cannot be built.
pub fn create_provider(
    config: &EmbeddingConfig,
) -> Result<Box<dyn IEmbeddingProvider>, EmbeddingError> {
    let timeout = Duration::from_secs(config.timeout_secs);
    let provider: Box<dyn IEmbeddingProvider> = match config.provider {
        EmbeddingProviderKind::Tfidf => Box::new(TfIdfProvider::new(config.dimensions)),
        EmbeddingProviderKind::Api => {
            let api_key = config
                .api_key
                .clone()
                .filter(|k| !k.trim().is_empty())
                .ok_or_else(|| EmbeddingError::ProviderUnavailable {
                    provider: "api (no api_key configured)".to_string(),
                })?;
            Box::new(ApiProvider::new(
                config.model.clone(),
                api_key,
                config.endpoint.clone(),
                config.dimensions,
                timeout,
            )?)
        }
        EmbeddingProviderKind::Ollama => Box::new(OllamaProvider::new(
            config.model.clone(),
            config.dimensions,
            config.endpoint.clone(),
            timeout,
        )?),
    };
    info!(
        provider = provider.name(),
        dims = provider.dimensions(),
        "embedding provider created"
    );
    Ok(provider)
}
