use roster_core::errors::*;

#[test]
fn embedding_failure_converts_and_keeps_code() {
    let err: RosterError = EmbeddingError::InferenceFailed {
        reason: "model offline".into(),
    }
    .into();
    assert_eq!(err.error_code(), "EMBEDDING_FAILURE");
    assert!(err.to_string().contains("model offline"));
}

#[test]
fn dimension_mismatch_has_its_own_code() {
    let err: RosterError = RetrievalError::DimensionMismatch {
        expected: 384,
        actual: 768,
    }
    .into();
    assert_eq!(err.error_code(), "DIMENSION_MISMATCH");
    let msg = err.to_string();
    assert!(msg.contains("384"));
    assert!(msg.contains("768"));

    let from_embedder = EmbeddingError::DimensionMismatch {
        expected: 3,
        actual: 4,
    };
    assert_eq!(from_embedder.error_code(), "DIMENSION_MISMATCH");
}

#[test]
fn coded_string_prefixes_code() {
    let err = CorpusError::DuplicateId { id: 42 };
    assert_eq!(err.coded_string(), "[CORPUS_ERROR] duplicate employee id 42");
}

#[test]
fn generation_error_is_comparable() {
    assert_eq!(GenerationError::Unavailable, GenerationError::Unavailable);
    assert_eq!(
        GenerationError::EmptyCompletion.error_code(),
        "GENERATION_FAILURE"
    );
}
