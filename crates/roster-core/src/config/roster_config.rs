//! Top-level roster configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::{
    CorpusConfig, EmbeddingConfig, EmbeddingProviderKind, GenerationConfig, ObservabilityConfig,
    RetrievalConfig,
};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`ROSTER_*`, plus `OPENAI_API_KEY`)
/// 2. Config file (`roster.toml` or an explicit path)
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RosterConfig {
    pub corpus: CorpusConfig,
    pub embedding: EmbeddingConfig,
    pub retrieval: RetrievalConfig,
    pub generation: GenerationConfig,
    pub observability: ObservabilityConfig,
}

impl RosterConfig {
    /// Load configuration from an optional TOML file, then apply the
    /// process environment and validate.
    ///
    /// A missing file is not an error; defaults are used instead.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path.unwrap_or_else(|| Path::new("roster.toml"));
        let mut config = if path.exists() {
            let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Parse {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
            toml::from_str(&content).map_err(|e| ConfigError::Parse {
                path: path.display().to_string(),
                message: e.to_string(),
            })?
        } else {
            Self::default()
        };

        config.apply_env(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::Parse {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Apply environment overrides read through `lookup`.
    ///
    /// An unknown provider name is a validation error. Unparseable numeric
    /// values are logged and ignored.
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<(), ConfigError> {
        if let Some(v) = lookup("ROSTER_CORPUS_PATH") {
            self.corpus.path = v;
        }
        if let Some(v) = lookup("ROSTER_EMBEDDING_PROVIDER") {
            self.embedding.provider = v
                .parse::<EmbeddingProviderKind>()
                .map_err(|e: String| invalid("embedding.provider", &e))?;
        }
        if let Some(v) = lookup("ROSTER_EMBEDDING_ENDPOINT") {
            self.embedding.endpoint = Some(v);
        }
        if let Some(v) = lookup("ROSTER_EMBEDDING_API_KEY") {
            self.embedding.api_key = Some(v);
        }
        if let Some(v) = lookup("ROSTER_TOP_K") {
            match v.parse::<usize>() {
                Ok(k) => self.retrieval.top_k = k,
                Err(_) => warn!(value = %v, "ignoring ROSTER_TOP_K"),
            }
        }
        if let Some(v) = lookup("ROSTER_MIN_SCORE") {
            match v.parse::<f32>() {
                Ok(s) => self.retrieval.min_score = s,
                Err(_) => warn!(value = %v, "ignoring ROSTER_MIN_SCORE"),
            }
        }
        if let Some(v) = lookup("ROSTER_GENERATION_MODEL") {
            self.generation.model = v;
        }
        if self.generation.api_key.is_none() {
            if let Some(v) = lookup("OPENAI_API_KEY") {
                self.generation.api_key = Some(v);
            }
        }
        if let Some(v) = lookup("ROSTER_LOG_LEVEL") {
            self.observability.log_level = v;
        }
        Ok(())
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.retrieval.top_k == 0 {
            return Err(invalid("retrieval.top_k", "must be at least 1"));
        }
        if !(-1.0..=1.0).contains(&self.retrieval.min_score) {
            return Err(invalid("retrieval.min_score", "must be between -1.0 and 1.0"));
        }
        if self.embedding.dimensions == 0 {
            return Err(invalid("embedding.dimensions", "must be greater than 0"));
        }
        if self.embedding.batch_size == 0 {
            return Err(invalid("embedding.batch_size", "must be greater than 0"));
        }
        if self.embedding.timeout_secs == 0 {
            return Err(invalid("embedding.timeout_secs", "must be at least 1"));
        }
        if self.generation.timeout_secs == 0 {
            return Err(invalid("generation.timeout_secs", "must be at least 1"));
        }
        if !(0.0..=2.0).contains(&self.generation.temperature) {
            return Err(invalid("generation.temperature", "must be between 0.0 and 2.0"));
        }
        Ok(())
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Parse {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

fn invalid(field: &str, message: &str) -> ConfigError {
    ConfigError::Validation {
        field: field.to_string(),
        message: message.to_string(),
    }
}
