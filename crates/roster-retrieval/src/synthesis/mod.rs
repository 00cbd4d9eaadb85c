//! Response synthesis: turns ranked candidates into a reply.
//!
//! Generative output is preferred when a collaborator is configured. Any
//! collaborator failure degrades to the deterministic template, so once at
//! least one candidate exists a reply is always produced.

pub mod prompt;
pub mod template;

use roster_core::constants::NO_MATCH_REPLY;
use roster_core::errors::GenerationError;
use roster_core::models::{Candidate, ReplySource};
use roster_core::traits::IResponseGenerator;
use tracing::{debug, warn};

/// Result of one attempt at the generative collaborator.
#[derive(Debug, Clone, PartialEq)]
pub enum GenerationOutcome {
    Generated(String),
    Failed(GenerationError),
    Unavailable,
}

/// A synthesized reply and the branch that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct Synthesis {
    pub reply: String,
    pub source: ReplySource,
}

pub struct ResponseSynthesizer {
    generator: Option<Box<dyn IResponseGenerator>>,
}

impl ResponseSynthesizer {
    pub fn new(generator: Option<Box<dyn IResponseGenerator>>) -> Self {
        Self { generator }
    }

    /// A synthesizer that never calls out; replies are always templated.
    pub fn template_only() -> Self {
        Self { generator: None }
    }

    pub fn has_generator(&self) -> bool {
        self.generator.is_some()
    }

    /// Produce a reply for `query` from `candidates`. Never fails.
    pub fn synthesize(&self, query: &str, candidates: &[Candidate]) -> Synthesis {
        if candidates.is_empty() {
            return Synthesis {
                reply: NO_MATCH_REPLY.to_string(),
                source: ReplySource::NoMatch,
            };
        }

        match self.try_generate(query, candidates) {
            GenerationOutcome::Generated(reply) => Synthesis {
                reply,
                source: ReplySource::Generated,
            },
            GenerationOutcome::Failed(err) => {
                warn!(error = %err, "generation failed, falling back to template");
                self.templated(query, candidates)
            }
            GenerationOutcome::Unavailable => self.templated(query, candidates),
        }
    }

    /// Ask the collaborator, if any, for a reply.
    pub fn try_generate(&self, query: &str, candidates: &[Candidate]) -> GenerationOutcome {
        let Some(generator) = &self.generator else {
            return GenerationOutcome::Unavailable;
        };
        let prompt = prompt::build_prompt(query, candidates);
        debug!(generator = generator.name(), candidates = candidates.len(), "requesting completion");
        match generator.generate(&prompt) {
            Ok(text) => GenerationOutcome::Generated(text),
            Err(GenerationError::Unavailable) => GenerationOutcome::Unavailable,
            Err(e) => GenerationOutcome::Failed(e),
        }
    }

    fn templated(&self, query: &str, candidates: &[Candidate]) -> Synthesis {
        Synthesis {
            reply: template::render(query, candidates),
            source: ReplySource::Template,
        }
    }
}

impl Default for ResponseSynthesizer {
    fn default() -> Self {
        Self::template_only()
    }
}
