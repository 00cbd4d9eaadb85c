//! Generative collaborator backed by an OpenAI-compatible chat-completions
//! endpoint.
//!
//! One blocking request per reply, bounded by the configured timeout. No
//! retry: a failure is reported and the synthesizer falls back to its
//! template.

use std::time::Duration;

use roster_core::config::GenerationConfig;
use roster_core::constants::GENERATION_SYSTEM_PROMPT;
use roster_core::errors::GenerationError;
use roster_core::traits::IResponseGenerator;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

pub struct ChatCompletionGenerator {
    endpoint: String,
    model: String,
    api_key: String,
    max_tokens: u32,
    temperature: f32,
    client: reqwest::blocking::Client,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    max_tokens: u32,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

impl ChatCompletionGenerator {
    pub fn new(
        config: &GenerationConfig,
        api_key: String,
    ) -> Result<Self, GenerationError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| GenerationError::Transport {
                reason: format!("http client: {e}"),
            })?;
        Ok(Self {
            endpoint: config.endpoint.clone(),
            model: config.model.clone(),
            api_key,
            max_tokens: config.max_tokens,
            temperature: config.temperature,
            client,
        })
    }

    fn request<'a>(&'a self, prompt: &'a str) -> ChatRequest<'a> {
        ChatRequest {
            model: &self.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: GENERATION_SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        }
    }
}

/// Pull the first completion out of a decoded response.
fn first_completion(response: ChatResponse) -> Result<String, GenerationError> {
    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| GenerationError::MalformedResponse {
            reason: "no choices".to_string(),
        })?;
    match choice.message.content {
        Some(text) if !text.trim().is_empty() => Ok(text),
        _ => Err(GenerationError::EmptyCompletion),
    }
}

impl IResponseGenerator for ChatCompletionGenerator {
    fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        debug!(model = %self.model, prompt_len = prompt.len(), "requesting chat completion");
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&self.request(prompt))
            .send()
            .map_err(|e| GenerationError::Transport {
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(GenerationError::BadStatus {
                status: status.as_u16(),
                body: response.text().unwrap_or_default(),
            });
        }

        let decoded: ChatResponse =
            response
                .json()
                .map_err(|e| GenerationError::MalformedResponse {
                    reason: e.to_string(),
                })?;
        first_completion(decoded)
    }

    fn name(&self) -> &str {
        &self.model
    }
}

/// Build the configured generator, or `None` when generation is disabled,
/// unkeyed, or the client cannot be constructed.
pub fn create_generator(config: &GenerationConfig) -> Option<Box<dyn IResponseGenerator>> {
    if !config.is_available() {
        info!("generative replies disabled; using templates");
        return None;
    }
    let api_key = config.api_key.clone()?;
    match ChatCompletionGenerator::new(config, api_key) {
        Ok(generator) => {
            info!(model = %config.model, "generative replies enabled");
            Some(Box::new(generator))
        }
        Err(e) => {
            warn!(error = %e, "generator unavailable; using templates");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keyed(endpoint: &str) -> GenerationConfig {
        GenerationConfig {
            endpoint: endpoint.to_string(),
            api_key: Some("sk-test".into()),
            timeout_secs: 2,
            ..GenerationConfig::default()
        }
    }

    #[test]
    fn request_body_has_system_and_user_messages() {
        let generator =
            ChatCompletionGenerator::new(&keyed("http://127.0.0.1:1"), "sk-test".into()).unwrap();
        let body = serde_json::to_value(generator.request("find rust devs")).unwrap();
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][0]["content"], GENERATION_SYSTEM_PROMPT);
        assert_eq!(body["messages"][1]["role"], "user");
        assert_eq!(body["messages"][1]["content"], "find rust devs");
        assert_eq!(body["max_tokens"], 500);
    }

    #[test]
    fn unreachable_endpoint_is_transport_error() {
        let generator = ChatCompletionGenerator::new(
            &keyed("http://127.0.0.1:1/v1/chat/completions"),
            "sk-test".into(),
        )
        .unwrap();
        let err = generator.generate("hello").unwrap_err();
        assert!(matches!(err, GenerationError::Transport { .. }));
    }

    #[test]
    fn completion_extraction() {
        let ok: ChatResponse =
            serde_json::from_str(r#"{"choices":[{"message":{"content":"Ann fits."}}]}"#).unwrap();
        assert_eq!(first_completion(ok).unwrap(), "Ann fits.");

        let blank: ChatResponse =
            serde_json::from_str(r#"{"choices":[{"message":{"content":"  "}}]}"#).unwrap();
        assert_eq!(first_completion(blank), Err(GenerationError::EmptyCompletion));

        let none: ChatResponse = serde_json::from_str(r#"{"choices":[]}"#).unwrap();
        assert!(matches!(
            first_completion(none),
            Err(GenerationError::MalformedResponse { .. })
        ));
    }

    #[test]
    fn unkeyed_config_has_no_generator() {
        let config = GenerationConfig {
            api_key: None,
            ..GenerationConfig::default()
        };
        assert!(create_generator(&config).is_none());
        let disabled = GenerationConfig {
            enabled: false,
            ..keyed("http://127.0.0.1:1")
        };
        assert!(create_generator(&disabled).is_none());
        assert!(create_generator(&keyed("http://127.0.0.1:1")).is_some());
    }
}
