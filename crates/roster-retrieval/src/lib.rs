//! # roster-retrieval
//!
//! The semantic retrieval core. Build once at startup, then answer
//! staffing queries concurrently against the immutable index.
//!
//! ## Architecture
//!
//! ```text
//! StaffingEngine
//! ├── Retriever
//! │   ├── normalizer   (record → canonical text)
//! │   ├── EmbeddingEngine (text → vector, from roster-embeddings)
//! │   └── VectorIndex  (exact cosine top-k)
//! └── ResponseSynthesizer
//!     ├── prompt       (query + candidate summaries)
//!     ├── IResponseGenerator (optional, e.g. ChatCompletionGenerator)
//!     └── template     (deterministic fallback)
//! ```

pub mod engine;
pub mod generation;
pub mod index;
pub mod normalizer;
pub mod retriever;
pub mod synthesis;

pub use engine::StaffingEngine;
pub use generation::{create_generator, ChatCompletionGenerator};
pub use index::{SearchHit, VectorIndex};
pub use normalizer::{normalize, NormalizedText};
pub use retriever::Retriever;
pub use synthesis::{GenerationOutcome, ResponseSynthesizer, Synthesis};
