use serde::{Deserialize, Serialize};

use super::defaults;

/// Location of the employee dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CorpusConfig {
    /// Path to the `{"employees": [...]}` JSON file.
    pub path: String,
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            path: defaults::DEFAULT_CORPUS_PATH.to_string(),
        }
    }
}
