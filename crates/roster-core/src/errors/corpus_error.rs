use super::error_code::{self, ErrorCode};

/// Errors raised while loading and validating the employee dataset.
#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    #[error("cannot read corpus {path}: {reason}")]
    Io { path: String, reason: String },

    #[error("invalid corpus: {reason}")]
    Parse { reason: String },

    #[error("duplicate employee id {id}")]
    DuplicateId { id: u64 },

    #[error("employee {id} has an empty name")]
    EmptyName { id: u64 },
}

impl ErrorCode for CorpusError {
    fn error_code(&self) -> &'static str {
        error_code::CORPUS_ERROR
    }
}
