//! Configuration system for roster.
//! TOML-based, 3-layer resolution: env > config file > defaults.

pub mod corpus_config;
pub mod defaults;
pub mod embedding_config;
pub mod generation_config;
pub mod observability_config;
pub mod retrieval_config;
pub mod roster_config;

pub use corpus_config::CorpusConfig;
pub use embedding_config::{EmbeddingConfig, EmbeddingProviderKind};
pub use generation_config::GenerationConfig;
pub use observability_config::ObservabilityConfig;
pub use retrieval_config::RetrievalConfig;
pub use roster_config::RosterConfig;
