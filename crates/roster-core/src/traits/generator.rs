use crate::errors::GenerationError;

/// Generative language-model collaborator used to phrase recommendations.
pub trait IResponseGenerator: Send + Sync {
    /// Complete a prompt. Any failure is reported, never panicked.
    fn generate(&self, prompt: &str) -> Result<String, GenerationError>;

    /// Human-readable generator name.
    fn name(&self) -> &str;
}
