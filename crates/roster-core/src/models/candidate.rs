use serde::{Deserialize, Serialize};

use super::EmployeeRecord;

/// An employee record annotated with its similarity to a query.
/// Produced per query, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    #[serde(flatten)]
    pub record: EmployeeRecord,
    /// Cosine similarity in [-1.0, 1.0].
    pub similarity_score: f32,
}
