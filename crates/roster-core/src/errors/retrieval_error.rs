use super::error_code::{self, ErrorCode};

/// Vector index and retriever errors.
#[derive(Debug, thiserror::Error)]
pub enum RetrievalError {
    #[error("dimension mismatch: index holds {expected}-d vectors, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("build received {vectors} vectors for {refs} record references")]
    LengthMismatch { vectors: usize, refs: usize },

    #[error("top_k must be at least 1")]
    InvalidTopK,

    #[error("vector {position} has a NaN or infinite component")]
    NonFiniteVector { position: usize },
}

impl ErrorCode for RetrievalError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::DimensionMismatch { .. } => error_code::DIMENSION_MISMATCH,
            Self::LengthMismatch { .. } | Self::InvalidTopK | Self::NonFiniteVector { .. } => {
                error_code::INVALID_ARGUMENT
            }
        }
    }
}
