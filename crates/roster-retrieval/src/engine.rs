//! StaffingEngine: the owned, shareable entry point.
//!
//! Built once from configuration and a corpus, then `Send + Sync` so one
//! instance can be shared behind an `Arc` and queried concurrently. Nothing
//! is mutated after construction.

use std::path::Path;

use roster_core::config::{RetrievalConfig, RosterConfig};
use roster_core::corpus::{Corpus, CorpusStats, EmployeeFilter};
use roster_core::errors::RosterResult;
use roster_core::models::{EmployeeRecord, QueryResponse};
use roster_core::observability;
use roster_core::traits::IResponseGenerator;
use roster_embeddings::EmbeddingEngine;
use tracing::{info, info_span};

use crate::generation::create_generator;
use crate::retriever::Retriever;
use crate::synthesis::ResponseSynthesizer;

pub struct StaffingEngine {
    corpus: Corpus,
    retriever: Retriever,
    synthesizer: ResponseSynthesizer,
    retrieval: RetrievalConfig,
}

impl StaffingEngine {
    /// Load the corpus named by `config.corpus.path` and build.
    pub fn from_config(config: &RosterConfig) -> RosterResult<Self> {
        let corpus = Corpus::load(Path::new(&config.corpus.path))?;
        Self::build(config, corpus)
    }

    /// Build with the configured embedder and generator. Installs the
    /// tracing subscriber on first use.
    pub fn build(config: &RosterConfig, corpus: Corpus) -> RosterResult<Self> {
        observability::init_tracing(&config.observability);
        let embedder = EmbeddingEngine::from_config(&config.embedding)?;
        let generator = create_generator(&config.generation);
        Self::with_collaborators(corpus, embedder, generator, config.retrieval.clone())
    }

    /// Build from explicit collaborators. The index is built here, once.
    pub fn with_collaborators(
        corpus: Corpus,
        embedder: EmbeddingEngine,
        generator: Option<Box<dyn IResponseGenerator>>,
        retrieval: RetrievalConfig,
    ) -> RosterResult<Self> {
        let retriever = Retriever::initialize(corpus.shared(), embedder)?;
        let synthesizer = ResponseSynthesizer::new(generator);
        info!(
            employees = corpus.len(),
            top_k = retrieval.top_k,
            min_score = retrieval.min_score,
            generative = synthesizer.has_generator(),
            "staffing engine ready"
        );
        Ok(Self {
            corpus,
            retriever,
            synthesizer,
            retrieval,
        })
    }

    /// Answer with the configured `top_k` and `min_score`.
    pub fn answer(&self, text: &str) -> RosterResult<QueryResponse> {
        self.answer_with(text, self.retrieval.top_k, self.retrieval.min_score)
    }

    /// Retrieve candidates for `text` and synthesize a reply.
    ///
    /// # Errors
    /// Retrieval failures only. Generation failures degrade to a template.
    pub fn answer_with(&self, text: &str, top_k: usize, min_score: f32) -> RosterResult<QueryResponse> {
        let _span = info_span!("answer", top_k, min_score).entered();
        let candidates = self.retriever.query(text, top_k, min_score)?;
        let synthesis = self.synthesizer.synthesize(text, &candidates);
        info!(
            candidates = candidates.len(),
            source = ?synthesis.source,
            "query answered"
        );
        Ok(QueryResponse {
            reply: synthesis.reply,
            candidates,
            source: synthesis.source,
        })
    }

    pub fn employee(&self, id: u64) -> Option<&EmployeeRecord> {
        self.corpus.get(id)
    }

    /// Structured directory search; no embedding involved.
    pub fn search(&self, filter: &EmployeeFilter) -> Vec<&EmployeeRecord> {
        self.corpus.filter(filter)
    }

    pub fn stats(&self) -> CorpusStats {
        self.corpus.stats()
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    pub fn has_generator(&self) -> bool {
        self.synthesizer.has_generator()
    }

    pub fn retrieval_config(&self) -> &RetrievalConfig {
        &self.retrieval
    }
}
