//! The employee corpus: loaded once, validated once, read-only afterwards.

pub mod filter;
pub mod stats;

use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;
use tracing::info;

pub use filter::EmployeeFilter;
pub use stats::CorpusStats;

use crate::errors::CorpusError;
use crate::models::EmployeeRecord;

/// On-disk dataset shape.
#[derive(Deserialize)]
struct Dataset {
    employees: Vec<EmployeeRecord>,
}

/// An immutable, validated set of employee records.
///
/// Cloning is cheap; clones share the same records.
#[derive(Debug, Clone)]
pub struct Corpus {
    records: Arc<[EmployeeRecord]>,
}

impl Corpus {
    /// Read and validate a `{"employees": [...]}` JSON file.
    pub fn load(path: &Path) -> Result<Self, CorpusError> {
        let content = std::fs::read_to_string(path).map_err(|e| CorpusError::Io {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let corpus = Self::from_json(&content)?;
        info!(path = %path.display(), employees = corpus.len(), "corpus loaded");
        Ok(corpus)
    }

    /// Parse and validate a `{"employees": [...]}` JSON document.
    ///
    /// Every record field is required; a missing list field is rejected
    /// rather than treated as empty.
    pub fn from_json(json: &str) -> Result<Self, CorpusError> {
        let dataset: Dataset = serde_json::from_str(json).map_err(|e| CorpusError::Parse {
            reason: e.to_string(),
        })?;
        Self::from_records(dataset.employees)
    }

    /// Validate records built in code.
    pub fn from_records(records: Vec<EmployeeRecord>) -> Result<Self, CorpusError> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.id) {
                return Err(CorpusError::DuplicateId { id: record.id });
            }
            if record.name.trim().is_empty() {
                return Err(CorpusError::EmptyName { id: record.id });
            }
        }
        Ok(Self {
            records: records.into(),
        })
    }

    /// An empty corpus. Valid; every query against it finds nothing.
    pub fn empty() -> Self {
        Self {
            records: Arc::from(Vec::new()),
        }
    }

    pub fn records(&self) -> &[EmployeeRecord] {
        &self.records
    }

    /// Shared handle to the records, for components that outlive a borrow.
    pub fn shared(&self) -> Arc<[EmployeeRecord]> {
        Arc::clone(&self.records)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Look up one employee by id.
    pub fn get(&self, id: u64) -> Option<&EmployeeRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// All employees matching every criterion in `filter`, in corpus order.
    pub fn filter(&self, filter: &EmployeeFilter) -> Vec<&EmployeeRecord> {
        self.records.iter().filter(|r| filter.matches(r)).collect()
    }

    /// Aggregate statistics over the corpus.
    pub fn stats(&self) -> CorpusStats {
        CorpusStats::compute(&self.records)
    }
}
