pub mod candidate;
pub mod employee;
pub mod query_response;

pub use candidate::Candidate;
pub use employee::{Availability, EmployeeRecord};
pub use query_response::{QueryResponse, ReplySource};
