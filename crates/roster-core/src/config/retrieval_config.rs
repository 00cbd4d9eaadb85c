use serde::{Deserialize, Serialize};

use super::defaults;

/// Ranking and relevance-cut policy for queries.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    /// Maximum candidates taken from the index per query.
    pub top_k: usize,
    /// Candidates scoring at or below this are dropped.
    pub min_score: f32,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            top_k: defaults::DEFAULT_TOP_K,
            min_score: defaults::DEFAULT_MIN_SCORE,
        }
    }
}
