//! Compiled defaults for every config section.

// Corpus
pub const DEFAULT_CORPUS_PATH: &str = "employees_data.json";

// Embedding
pub const DEFAULT_EMBEDDING_MODEL: &str = "all-MiniLM-L6-v2";
pub const DEFAULT_EMBEDDING_DIMENSIONS: usize = 384;
pub const DEFAULT_EMBEDDING_BATCH_SIZE: usize = 32;
pub const DEFAULT_EMBEDDING_TIMEOUT_SECS: u64 = 30;

// Retrieval
pub const DEFAULT_TOP_K: usize = 5;
pub const DEFAULT_MIN_SCORE: f32 = 0.3;

// Generation
pub const DEFAULT_GENERATION_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_GENERATION_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_GENERATION_MAX_TOKENS: u32 = 500;
pub const DEFAULT_GENERATION_TEMPERATURE: f32 = 0.7;
pub const DEFAULT_GENERATION_TIMEOUT_SECS: u64 = 30;

// Observability
pub const DEFAULT_LOG_LEVEL: &str = "info";
