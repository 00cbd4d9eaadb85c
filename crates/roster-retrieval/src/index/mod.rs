//! Exact (exhaustive) cosine-similarity index.
//!
//! Every query is scored against every entry: O(n·D) per search. This is
//! the intended scaling limit for an in-memory corpus of a few thousand
//! records; there is no approximate structure.

pub mod vector_math;

use roster_core::errors::RetrievalError;
use tracing::debug;

pub use vector_math::{dot, l2_norm, normalize_in_place, normalize_vector};

/// One stored unit vector paired with a back-reference to its source.
#[derive(Debug, Clone)]
struct IndexEntry<R> {
    vector: Vec<f32>,
    reference: R,
}

/// One search result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchHit<R> {
    /// Cosine similarity in [-1.0, 1.0].
    pub score: f32,
    pub reference: R,
}

/// Immutable vector index built once from a full corpus.
///
/// `R` is the record back-reference (e.g. a position in the corpus); the
/// index never owns the records themselves.
#[derive(Debug, Clone)]
pub struct VectorIndex<R> {
    entries: Vec<IndexEntry<R>>,
    dimensions: Option<usize>,
}

impl<R: Copy> Default for VectorIndex<R> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<R: Copy> VectorIndex<R> {
    /// An index with no entries and no dimension.
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
            dimensions: None,
        }
    }

    /// Build the index from parallel sequences of vectors and references.
    ///
    /// Each vector is L2-normalized (zero vectors are kept as-is) and stored
    /// with its reference, in input order. An empty input yields an empty
    /// index.
    ///
    /// # Errors
    /// `LengthMismatch` if the sequences differ in length;
    /// `DimensionMismatch` if the vectors do not all share one length;
    /// `NonFiniteVector` if any component is NaN or infinite.
    pub fn build(vectors: Vec<Vec<f32>>, refs: Vec<R>) -> Result<Self, RetrievalError> {
        if vectors.len() != refs.len() {
            return Err(RetrievalError::LengthMismatch {
                vectors: vectors.len(),
                refs: refs.len(),
            });
        }
        let Some(dims) = vectors.first().map(Vec::len) else {
            return Ok(Self::empty());
        };

        let mut entries = Vec::with_capacity(vectors.len());
        for (position, (mut vector, reference)) in vectors.into_iter().zip(refs).enumerate() {
            if vector.len() != dims {
                return Err(RetrievalError::DimensionMismatch {
                    expected: dims,
                    actual: vector.len(),
                });
            }
            if !all_finite(&vector) {
                return Err(RetrievalError::NonFiniteVector { position });
            }
            normalize_in_place(&mut vector);
            entries.push(IndexEntry { vector, reference });
        }

        debug!(entries = entries.len(), dims, "vector index built");
        Ok(Self {
            entries,
            dimensions: Some(dims),
        })
    }

    /// Top-`k` entries by cosine similarity to `query`.
    ///
    /// Results are sorted by descending score; equal scores keep insertion
    /// order. `k` larger than the index returns every entry once. An empty
    /// index returns no hits regardless of the query.
    ///
    /// # Errors
    /// `InvalidTopK` for `k == 0`; `DimensionMismatch` if the query length
    /// differs from the indexed vectors; `NonFiniteVector` (position 0) for
    /// a query holding NaN or infinity.
    pub fn search(&self, query: &[f32], k: usize) -> Result<Vec<SearchHit<R>>, RetrievalError> {
        if k == 0 {
            return Err(RetrievalError::InvalidTopK);
        }
        let Some(dims) = self.dimensions else {
            return Ok(Vec::new());
        };
        if query.len() != dims {
            return Err(RetrievalError::DimensionMismatch {
                expected: dims,
                actual: query.len(),
            });
        }
        if !all_finite(query) {
            return Err(RetrievalError::NonFiniteVector { position: 0 });
        }

        let query = normalize_vector(query);
        let mut hits: Vec<SearchHit<R>> = self
            .entries
            .iter()
            .map(|entry| SearchHit {
                // `+ 0.0` folds -0.0 into 0.0 so the two tie under total_cmp.
                score: dot(&query, &entry.vector).clamp(-1.0, 1.0) + 0.0,
                reference: entry.reference,
            })
            .collect();

        // Stable: ties stay in insertion order.
        hits.sort_by(|a, b| b.score.total_cmp(&a.score));
        hits.truncate(k);
        Ok(hits)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Vector dimension, or `None` while empty.
    pub fn dimensions(&self) -> Option<usize> {
        self.dimensions
    }
}

fn all_finite(v: &[f32]) -> bool {
    v.iter().all(|x| x.is_finite())
}
