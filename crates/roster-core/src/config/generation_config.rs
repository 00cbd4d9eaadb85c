use serde::{Deserialize, Serialize};

use super::defaults;

/// Generative collaborator configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    pub enabled: bool,
    /// Full chat-completions URL.
    pub endpoint: String,
    pub model: String,
    pub api_key: Option<String>,
    pub max_tokens: u32,
    pub temperature: f32,
    pub timeout_secs: u64,
}

impl GenerationConfig {
    /// The collaborator is usable only when enabled and keyed.
    pub fn is_available(&self) -> bool {
        self.enabled && self.api_key.as_deref().is_some_and(|k| !k.trim().is_empty())
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            endpoint: defaults::DEFAULT_GENERATION_ENDPOINT.to_string(),
            model: defaults::DEFAULT_GENERATION_MODEL.to_string(),
            api_key: None,
            max_tokens: defaults::DEFAULT_GENERATION_MAX_TOKENS,
            temperature: defaults::DEFAULT_GENERATION_TEMPERATURE,
            timeout_secs: defaults::DEFAULT_GENERATION_TIMEOUT_SECS,
        }
    }
}
