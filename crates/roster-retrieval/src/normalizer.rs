//! Canonical text form of an employee record, used as embedding input.

use std::fmt;

use roster_core::constants::LIST_SEPARATOR;
use roster_core::models::EmployeeRecord;

/// Labeled, fixed-order text derived from exactly one record.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedText(String);

impl NormalizedText {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for NormalizedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Render `record` as labeled lines in a fixed order: name, skills,
/// experience, projects, department, specialization, certifications,
/// availability. Pure; identical records always yield identical text.
pub fn normalize(record: &EmployeeRecord) -> NormalizedText {
    NormalizedText(format!(
        "Name: {}\n\
         Skills: {}\n\
         Experience: {} years\n\
         Projects: {}\n\
         Department: {}\n\
         Specialization: {}\n\
         Certifications: {}\n\
         Availability: {}",
        record.name,
        record.skills.join(LIST_SEPARATOR),
        record.experience_years,
        record.projects.join(LIST_SEPARATOR),
        record.department,
        record.specialization,
        record.certifications.join(LIST_SEPARATOR),
        record.availability,
    ))
}
