//! Blocking JSON-over-HTTP helper shared by the remote providers.

use std::time::Duration;

use roster_core::errors::EmbeddingError;
use serde::{de::DeserializeOwned, Serialize};

pub(crate) fn build_client(timeout: Duration) -> Result<reqwest::blocking::Client, EmbeddingError> {
    reqwest::blocking::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| EmbeddingError::ProviderUnavailable {
            provider: format!("http client: {e}"),
        })
}

/// POST `body` as JSON and decode the JSON reply. Single attempt, no retry.
pub(crate) fn post_json<Req: Serialize, Resp: DeserializeOwned>(
    client: &reqwest::blocking::Client,
    url: &str,
    bearer: Option<&str>,
    body: &Req,
) -> Result<Resp, EmbeddingError> {
    let mut request = client.post(url).json(body);
    if let Some(token) = bearer {
        request = request.bearer_auth(token);
    }

    let response = request.send().map_err(|e| EmbeddingError::InferenceFailed {
        reason: format!("HTTP error: {e}"),
    })?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().unwrap_or_default();
        return Err(EmbeddingError::InferenceFailed {
            reason: format!("endpoint returned {status}: {body}"),
        });
    }

    response.json().map_err(|e| EmbeddingError::InferenceFailed {
        reason: format!("JSON parse error: {e}"),
    })
}
