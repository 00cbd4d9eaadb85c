use serde::{Deserialize, Serialize};

use crate::models::{Availability, EmployeeRecord};

/// Structured (non-semantic) employee search criteria.
/// Unset fields match everything; set fields are combined with AND.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmployeeFilter {
    /// Matches when any of these equals any employee skill, ignoring case.
    pub skills: Vec<String>,
    pub experience_min: Option<u32>,
    pub experience_max: Option<u32>,
    /// Case-insensitive substring of the department name.
    pub department: Option<String>,
    pub availability: Option<Availability>,
}

impl EmployeeFilter {
    /// Split a comma-separated skill list such as `"Python, AWS"`.
    pub fn parse_skills(list: &str) -> Vec<String> {
        list.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }

    pub fn matches(&self, record: &EmployeeRecord) -> bool {
        if !self.skills.is_empty() && !self.skills.iter().any(|s| record.has_skill(s)) {
            return false;
        }
        if self.experience_min.is_some_and(|min| record.experience_years < min) {
            return false;
        }
        if self.experience_max.is_some_and(|max| record.experience_years > max) {
            return false;
        }
        if let Some(dept) = &self.department {
            if !record
                .department
                .to_lowercase()
                .contains(&dept.to_lowercase())
            {
                return false;
            }
        }
        if self.availability.is_some_and(|a| a != record.availability) {
            return false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_skills_trims_and_drops_blanks() {
        assert_eq!(
            EmployeeFilter::parse_skills(" Python, ,AWS "),
            vec!["Python".to_string(), "AWS".to_string()]
        );
    }

    #[test]
    fn default_filter_is_unrestricted() {
        let record = EmployeeRecord {
            id: 1,
            name: "X".into(),
            skills: vec![],
            experience_years: 0,
            projects: vec![],
            department: String::new(),
            specialization: String::new(),
            certifications: vec![],
            availability: Availability::Busy,
        };
        assert!(EmployeeFilter::default().matches(&record));
    }
}
