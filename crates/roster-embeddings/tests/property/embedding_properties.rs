use proptest::prelude::*;
use roster_core::traits::IEmbeddingProvider;
use roster_embeddings::{EmbeddingEngine, TfIdfProvider};

proptest! {
    #[test]
    fn tfidf_always_has_configured_length(s in ".{0,200}", dims in 1usize..512) {
        let p = TfIdfProvider::new(dims);
        prop_assert_eq!(p.embed(&s).unwrap().len(), dims);
    }

    #[test]
    fn tfidf_is_deterministic(s in ".{0,200}") {
        let p = TfIdfProvider::new(128);
        prop_assert_eq!(p.embed(&s).unwrap(), p.embed(&s).unwrap());
    }

    #[test]
    fn tfidf_components_are_finite_and_non_negative(s in ".{0,200}") {
        let p = TfIdfProvider::new(64);
        prop_assert!(p.embed(&s).unwrap().iter().all(|x| x.is_finite() && *x >= 0.0));
    }

    #[test]
    fn encode_many_matches_encode(texts in prop::collection::vec("[a-z ]{0,40}", 0..12), batch in 1usize..5) {
        let engine = EmbeddingEngine::new(Box::new(TfIdfProvider::new(48)), batch);
        let many = engine.encode_many(&texts).unwrap();
        prop_assert_eq!(many.len(), texts.len());
        for (t, v) in texts.iter().zip(&many) {
            prop_assert_eq!(v, &engine.encode(t).unwrap());
        }
    }
}
