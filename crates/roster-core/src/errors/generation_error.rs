use super::error_code::{self, ErrorCode};

/// Generative collaborator errors.
///
/// Always absorbed by the response synthesizer, which falls back to the
/// template path. Never returned to a query caller.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GenerationError {
    #[error("no generative collaborator configured")]
    Unavailable,

    #[error("transport error: {reason}")]
    Transport { reason: String },

    #[error("generator returned {status}: {body}")]
    BadStatus { status: u16, body: String },

    #[error("malformed generator response: {reason}")]
    MalformedResponse { reason: String },

    #[error("generator returned an empty completion")]
    EmptyCompletion,
}

impl ErrorCode for GenerationError {
    fn error_code(&self) -> &'static str {
        error_code::GENERATION_FAILURE
    }
}
