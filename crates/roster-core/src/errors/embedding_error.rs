use super::error_code::{self, ErrorCode};

/// Embedder collaborator errors. Fatal for the call that triggered them.
#[derive(Debug, thiserror::Error)]
pub enum EmbeddingError {
    #[error("inference failed: {reason}")]
    InferenceFailed { reason: String },

    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("provider unavailable: {provider}")]
    ProviderUnavailable { provider: String },

    #[error("batch length mismatch: sent {expected} texts, received {actual} vectors")]
    BatchLengthMismatch { expected: usize, actual: usize },
}

impl ErrorCode for EmbeddingError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::DimensionMismatch { .. } => error_code::DIMENSION_MISMATCH,
            _ => error_code::EMBEDDING_FAILURE,
        }
    }
}
