use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Current staffing status of an employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Availability {
    Available,
    Busy,
    #[serde(alias = "on leave")]
    OnLeave,
}

impl Availability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Busy => "busy",
            Self::OnLeave => "on_leave",
        }
    }
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Availability {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(' ', "_").as_str() {
            "available" => Ok(Self::Available),
            "busy" => Ok(Self::Busy),
            "on_leave" => Ok(Self::OnLeave),
            other => Err(format!("unknown availability: {other}")),
        }
    }
}

/// One employee in the corpus.
///
/// Every field is required on load: an absent list field is a data error,
/// never an empty list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    pub id: u64,
    pub name: String,
    pub skills: Vec<String>,
    pub experience_years: u32,
    pub projects: Vec<String>,
    pub department: String,
    pub specialization: String,
    pub certifications: Vec<String>,
    pub availability: Availability,
}

impl EmployeeRecord {
    /// The first `n` skills, in record order.
    pub fn top_skills(&self, n: usize) -> &[String] {
        &self.skills[..n.min(self.skills.len())]
    }

    /// Case-insensitive exact match against any of this employee's skills.
    pub fn has_skill(&self, skill: &str) -> bool {
        self.skills.iter().any(|s| s.eq_ignore_ascii_case(skill))
    }
}
