//! # roster-embeddings
//!
//! Text → vector collaborators consumed by the retrieval core.
//!
//! ```text
//! EmbeddingEngine (encode / encode_many, fixes dimension D)
//! └── Box<dyn IEmbeddingProvider>
//!     ├── TfIdfProvider   (offline, deterministic)
//!     ├── ApiProvider     (OpenAI-compatible /v1/embeddings)
//!     └── OllamaProvider  (local /api/embed)
//! ```

pub mod engine;
pub mod providers;

pub use engine::EmbeddingEngine;
pub use providers::{create_provider, ApiProvider, OllamaProvider, TfIdfProvider};
