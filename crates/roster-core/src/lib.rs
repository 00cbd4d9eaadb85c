//! # roster-core
//!
//! Foundation crate for the roster staffing engine.
//! Defines the employee data model, corpus loading, collaborator traits,
//! errors, config, and tracing setup. Every other crate in the workspace
//! depends on this.

pub mod config;
pub mod constants;
pub mod corpus;
pub mod errors;
pub mod models;
pub mod observability;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::RosterConfig;
pub use corpus::{Corpus, CorpusStats, EmployeeFilter};
pub use errors::{RosterError, RosterResult};
pub use models::{Availability, Candidate, EmployeeRecord, QueryResponse, ReplySource};
