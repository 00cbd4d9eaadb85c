//! Retriever: owns the one-time corpus build and the per-query
//! search → threshold pipeline.
//!
//! Ranking (top-k) and the relevance cut (absolute threshold) are separate
//! steps so each can be tuned and tested without touching the index.

use std::sync::Arc;

use roster_core::errors::{RetrievalError, RosterResult};
use roster_core::models::{Candidate, EmployeeRecord};
use roster_embeddings::EmbeddingEngine;
use tracing::{debug, info};

use crate::index::{SearchHit, VectorIndex};
use crate::normalizer;

/// Semantic retriever over an immutable employee corpus.
pub struct Retriever {
    records: Arc<[EmployeeRecord]>,
    index: VectorIndex<usize>,
    embedder: EmbeddingEngine,
}

impl Retriever {
    /// Normalize every record, batch-embed the texts, and build the index.
    ///
    /// An empty record set is valid and produces an empty index.
    ///
    /// # Errors
    /// Any embedder failure (the build fails as a whole) or an embedding of
    /// inconsistent dimension.
    pub fn initialize(
        records: Arc<[EmployeeRecord]>,
        embedder: EmbeddingEngine,
    ) -> RosterResult<Self> {
        if records.is_empty() {
            info!("empty corpus; queries will return no candidates");
            return Ok(Self {
                records,
                index: VectorIndex::empty(),
                embedder,
            });
        }

        let texts: Vec<String> = records
            .iter()
            .map(|r| normalizer::normalize(r).into_string())
            .collect();
        let vectors = embedder.encode_many(&texts)?;
        let index = VectorIndex::build(vectors, (0..records.len()).collect())?;

        info!(
            employees = index.len(),
            dims = index.dimensions().unwrap_or(0),
            provider = embedder.provider_name(),
            "vector index built"
        );

        Ok(Self {
            records,
            index,
            embedder,
        })
    }

    /// Candidates for `text`, best first, each scoring strictly above
    /// `min_score`. At most `top_k` are returned.
    ///
    /// # Errors
    /// `InvalidTopK` for `top_k == 0`, embedder failures, and query vectors
    /// whose dimension differs from the index.
    pub fn query(&self, text: &str, top_k: usize, min_score: f32) -> RosterResult<Vec<Candidate>> {
        if top_k == 0 {
            return Err(RetrievalError::InvalidTopK.into());
        }
        if self.index.is_empty() {
            debug!("index empty; skipping query embedding");
            return Ok(Vec::new());
        }

        let embedded = self.embedder.encode(text)?;
        let hits = self.index.search(&embedded, top_k)?;
        let ranked = hits.len();
        let candidates = apply_threshold(self.to_candidates(hits), min_score);

        debug!(
            ranked,
            kept = candidates.len(),
            min_score,
            "query scored"
        );
        Ok(candidates)
    }

    fn to_candidates(&self, hits: Vec<SearchHit<usize>>) -> Vec<Candidate> {
        hits.into_iter()
            .filter_map(|hit| {
                self.records.get(hit.reference).map(|record| Candidate {
                    record: record.clone(),
                    similarity_score: hit.score,
                })
            })
            .collect()
    }

    pub fn records(&self) -> &[EmployeeRecord] {
        &self.records
    }

    /// Number of indexed records.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Dimension of the indexed vectors, or `None` while empty.
    pub fn dimensions(&self) -> Option<usize> {
        self.index.dimensions()
    }
}

/// Drop candidates scoring at or below `min_score`, preserving order.
pub fn apply_threshold(candidates: Vec<Candidate>, min_score: f32) -> Vec<Candidate> {
    candidates
        .into_iter()
        .filter(|c| c.similarity_score > min_score)
        .collect()
}
