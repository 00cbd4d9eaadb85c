//! Error handling for roster.
//! One error enum per subsystem, `thiserror` only, aggregated by `RosterError`.

pub mod config_error;
pub mod corpus_error;
pub mod embedding_error;
pub mod error_code;
pub mod generation_error;
pub mod retrieval_error;
pub mod roster_error;

pub use config_error::ConfigError;
pub use corpus_error::CorpusError;
pub use embedding_error::EmbeddingError;
pub use error_code::ErrorCode;
pub use generation_error::GenerationError;
pub use retrieval_error::RetrievalError;
pub use roster_error::{RosterError, RosterResult};
