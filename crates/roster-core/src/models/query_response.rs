use serde::{Deserialize, Serialize};

use super::Candidate;

/// Which synthesizer branch produced a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplySource {
    /// No candidate cleared the threshold; fixed apology message.
    NoMatch,
    /// Text returned verbatim by the generative collaborator.
    Generated,
    /// Deterministic template text.
    Template,
}

/// The result of answering one staffing query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryResponse {
    pub reply: String,
    pub candidates: Vec<Candidate>,
    pub source: ReplySource,
}
