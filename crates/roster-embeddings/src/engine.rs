//! EmbeddingEngine: the embedder collaborator as seen by the retrieval core.
//!
//! Wraps one provider, batches corpus encoding, and pins the vector
//! dimension `D` on first use so every later vector can be checked against it.

use std::sync::OnceLock;

use roster_core::config::EmbeddingConfig;
use roster_core::errors::EmbeddingError;
use roster_core::traits::IEmbeddingProvider;
use tracing::{debug, info};

use crate::providers;

/// Dimension-checking front end for an `IEmbeddingProvider`.
///
/// Safe to share across threads once constructed: the only interior state
/// is the write-once dimension.
pub struct EmbeddingEngine {
    provider: Box<dyn IEmbeddingProvider>,
    batch_size: usize,
    dimensions: OnceLock<usize>,
}

impl EmbeddingEngine {
    pub fn new(provider: Box<dyn IEmbeddingProvider>, batch_size: usize) -> Self {
        Self {
            provider,
            batch_size: batch_size.max(1),
            dimensions: OnceLock::new(),
        }
    }

    /// Build the engine around the provider named in `config`.
    pub fn from_config(config: &EmbeddingConfig) -> Result<Self, EmbeddingError> {
        let provider = providers::create_provider(config)?;
        Ok(Self::new(provider, config.batch_size))
    }

    /// Encode one text.
    ///
    /// # Errors
    /// Provider failures, empty vectors, vectors holding NaN or infinity,
    /// and vectors whose length differs from the pinned dimension.
    pub fn encode(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        let vector = self.provider.embed(text)?;
        self.check_dimensions(&vector)?;
        Ok(vector)
    }

    /// Encode many texts, preserving input order one-to-one.
    ///
    /// Texts are sent to the provider in chunks of `batch_size`. Any chunk
    /// failure fails the whole call.
    pub fn encode_many(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        let mut vectors = Vec::with_capacity(texts.len());
        for chunk in texts.chunks(self.batch_size) {
            let batch = self.provider.embed_batch(chunk)?;
            if batch.len() != chunk.len() {
                return Err(EmbeddingError::BatchLengthMismatch {
                    expected: chunk.len(),
                    actual: batch.len(),
                });
            }
            for vector in &batch {
                self.check_dimensions(vector)?;
            }
            debug!(chunk = chunk.len(), done = vectors.len() + batch.len(), "encoded batch");
            vectors.extend(batch);
        }
        Ok(vectors)
    }

    /// The pinned dimension, once any vector has been produced.
    pub fn dimensions(&self) -> Option<usize> {
        self.dimensions.get().copied()
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    fn check_dimensions(&self, vector: &[f32]) -> Result<(), EmbeddingError> {
        if vector.is_empty() {
            return Err(EmbeddingError::InferenceFailed {
                reason: format!("{} returned an empty vector", self.provider.name()),
            });
        }
        if let Some(position) = vector.iter().position(|x| !x.is_finite()) {
            return Err(EmbeddingError::InferenceFailed {
                reason: format!(
                    "{} returned a non-finite component at position {position}",
                    self.provider.name()
                ),
            });
        }
        let expected = *self.dimensions.get_or_init(|| {
            info!(
                provider = self.provider.name(),
                dims = vector.len(),
                "embedding dimension fixed"
            );
            vector.len()
        });
        if vector.len() != expected {
            return Err(EmbeddingError::DimensionMismatch {
                expected,
                actual: vector.len(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::providers::TfIdfProvider;

    /// Returns vectors whose length grows with every call.
    struct GrowingProvider {
        calls: AtomicUsize,
    }
    impl IEmbeddingProvider for GrowingProvider {
        fn embed(&self, _text: &str) -> Result<Vec<f32>, EmbeddingError> {
            let n = self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(vec![1.0; 4 + n])
        }
        fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
            texts.iter().map(|t| self.embed(t)).collect()
        }
        fn dimensions(&self) -> usize {
            4
        }
        fn name(&self) -> &str {
            "growing-mock"
        }
    }

    /// Drops the last vector of every batch.
    struct LossyProvider;
    impl IEmbeddingProvider for LossyProvider {
        fn embed(&self, _text: &str) -> Result<Vec<f32>, EmbeddingError> {
            Ok(vec![1.0; 4])
        }
        fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
            Ok(vec![vec![1.0; 4]; texts.len().saturating_sub(1)])
        }
        fn dimensions(&self) -> usize {
            4
        }
        fn name(&self) -> &str {
            "lossy-mock"
        }
    }

    /// Emits NaN in one component of every third vector.
    struct NanProvider;
    impl IEmbeddingProvider for NanProvider {
        fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
            let mut v = vec![0.5; 4];
            if text.len() % 3 == 0 {
                v[2] = f32::NAN;
            }
            Ok(v)
        }
        fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
            texts.iter().map(|t| self.embed(t)).collect()
        }
        fn dimensions(&self) -> usize {
            4
        }
        fn name(&self) -> &str {
            "nan-mock"
        }
    }

    #[test]
    fn non_finite_components_are_rejected() {
        let engine = EmbeddingEngine::new(Box::new(NanProvider), 8);
        assert!(engine.encode("ab").is_ok());
        assert!(matches!(
            engine.encode("abc"),
            Err(EmbeddingError::InferenceFailed { .. })
        ));

        let texts: Vec<String> = (1..=30).map(|n| "x".repeat(n)).collect();
        assert!(matches!(
            engine.encode_many(&texts),
            Err(EmbeddingError::InferenceFailed { .. })
        ));
    }

    #[test]
    fn dimension_is_pinned_on_first_use() {
        let engine = EmbeddingEngine::new(Box::new(TfIdfProvider::new(32)), 8);
        assert_eq!(engine.dimensions(), None);
        engine.encode("rust").unwrap();
        assert_eq!(engine.dimensions(), Some(32));
    }

    #[test]
    fn later_dimension_change_is_rejected() {
        let engine = EmbeddingEngine::new(
            Box::new(GrowingProvider {
                calls: AtomicUsize::new(0),
            }),
            8,
        );
        engine.encode("first").unwrap();
        let err = engine.encode("second").unwrap_err();
        assert!(matches!(
            err,
            EmbeddingError::DimensionMismatch {
                expected: 4,
                actual: 5
            }
        ));
    }

    #[test]
    fn short_batch_reply_is_rejected() {
        let engine = EmbeddingEngine::new(Box::new(LossyProvider), 8);
        let texts = vec!["a".to_string(), "b".to_string()];
        assert!(matches!(
            engine.encode_many(&texts),
            Err(EmbeddingError::BatchLengthMismatch {
                expected: 2,
                actual: 1
            })
        ));
    }

    #[test]
    fn encode_many_chunks_and_preserves_order() {
        let engine = EmbeddingEngine::new(Box::new(TfIdfProvider::new(64)), 2);
        let texts: Vec<String> = ["alpha beta", "gamma", "delta epsilon", "zeta", "eta theta"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let batch = engine.encode_many(&texts).unwrap();
        assert_eq!(batch.len(), texts.len());
        for (text, vector) in texts.iter().zip(&batch) {
            assert_eq!(vector, &engine.encode(text).unwrap());
        }
    }

    #[test]
    fn encode_many_of_nothing_is_empty() {
        let engine = EmbeddingEngine::new(Box::new(TfIdfProvider::new(64)), 4);
        assert!(engine.encode_many(&[]).unwrap().is_empty());
        assert_eq!(engine.dimensions(), None);
    }

    #[test]
    fn zero_batch_size_is_clamped() {
        let engine = EmbeddingEngine::new(Box::new(TfIdfProvider::new(16)), 0);
        assert_eq!(engine.encode_many(&["x y".to_string()]).unwrap().len(), 1);
    }
}
