//! Stable error codes for callers that need to identify a failure.

/// Every error enum implements this to expose a machine-readable code.
pub trait ErrorCode {
    /// Returns the error code string (e.g., "EMBEDDING_FAILURE").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const EMBEDDING_FAILURE: &str = "EMBEDDING_FAILURE";
pub const DIMENSION_MISMATCH: &str = "DIMENSION_MISMATCH";
pub const INVALID_ARGUMENT: &str = "INVALID_ARGUMENT";
pub const GENERATION_FAILURE: &str = "GENERATION_FAILURE";
pub const CORPUS_ERROR: &str = "CORPUS_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
