pub mod embedding;
pub mod generator;

pub use embedding::IEmbeddingProvider;
pub use generator::IResponseGenerator;
