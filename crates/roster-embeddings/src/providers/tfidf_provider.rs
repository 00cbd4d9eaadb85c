//! Hashed TF-IDF embedder.
//!
//! Term weights are folded into a fixed number of buckets, so any text maps
//! to a vector of the configured length without a vocabulary or a model.

use std::collections::BTreeMap;

use roster_core::errors::EmbeddingError;
use roster_core::traits::IEmbeddingProvider;

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0100_0000_01b3;

/// Offline, deterministic embedding provider. The default collaborator.
///
/// Vectors are left unnormalized; the index normalizes on insert.
pub struct TfIdfProvider {
    dimensions: usize,
}

impl TfIdfProvider {
    pub fn new(dimensions: usize) -> Self {
        Self { dimensions }
    }

    fn bucket(&self, term: &str) -> usize {
        let hash = term
            .bytes()
            .fold(FNV_OFFSET, |h, b| (h ^ u64::from(b)).wrapping_mul(FNV_PRIME));
        (hash % self.dimensions as u64) as usize
    }

    /// Weighted terms of `text`: relative frequency scaled by `1 + ln(len)`.
    /// Terms are split on anything but alphanumerics and `_`, lowercased,
    /// and kept when at least two bytes long.
    ///
    /// Ordered so bucket sums accumulate identically on every call.
    fn weighted_terms(text: &str) -> BTreeMap<String, f32> {
        let mut counts: BTreeMap<String, u32> = BTreeMap::new();
        let mut total = 0u32;
        for term in text
            .split(|c: char| !c.is_alphanumeric() && c != '_')
            .filter(|t| t.len() >= 2)
        {
            *counts.entry(term.to_lowercase()).or_default() += 1;
            total += 1;
        }

        counts
            .into_iter()
            .map(|(term, n)| {
                let weight = n as f32 / total as f32 * (1.0 + (term.len() as f32).ln());
                (term, weight)
            })
            .collect()
    }

    fn vectorize(&self, text: &str) -> Vec<f32> {
        let mut out = vec![0.0f32; self.dimensions];
        if self.dimensions == 0 {
            return out;
        }
        for (term, weight) in Self::weighted_terms(text) {
            out[self.bucket(&term)] += weight;
        }
        out
    }
}

impl IEmbeddingProvider for TfIdfProvider {
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        Ok(self.vectorize(text))
    }

    fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        Ok(texts.iter().map(|t| self.vectorize(t)).collect())
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        "tfidf"
    }
}
