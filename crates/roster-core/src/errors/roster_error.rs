use super::error_code::ErrorCode;
use super::{ConfigError, CorpusError, EmbeddingError, GenerationError, RetrievalError};

/// Top-level error for the roster engine.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    #[error("embedding error: {0}")]
    Embedding(#[from] EmbeddingError),

    #[error("retrieval error: {0}")]
    Retrieval(#[from] RetrievalError),

    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),

    #[error("corpus error: {0}")]
    Corpus(#[from] CorpusError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl ErrorCode for RosterError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Embedding(e) => e.error_code(),
            Self::Retrieval(e) => e.error_code(),
            Self::Generation(e) => e.error_code(),
            Self::Corpus(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}

pub type RosterResult<T> = Result<T, RosterError>;
