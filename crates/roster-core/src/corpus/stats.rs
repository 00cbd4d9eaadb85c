use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::constants::STATS_TOP_SKILLS;
use crate::models::EmployeeRecord;

/// Corpus-wide aggregates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorpusStats {
    pub total_employees: usize,
    /// Employee count per department, keyed by department name.
    pub departments: BTreeMap<String, usize>,
    /// Most frequent skills, highest count first, ties alphabetical.
    pub top_skills: Vec<(String, usize)>,
    /// Mean experience in years; 0.0 for an empty corpus.
    pub avg_experience: f64,
}

impl CorpusStats {
    pub fn compute(records: &[EmployeeRecord]) -> Self {
        let mut departments = BTreeMap::new();
        let mut skill_counts: HashMap<&str, usize> = HashMap::new();
        let mut total_years = 0u64;

        for record in records {
            *departments.entry(record.department.clone()).or_insert(0) += 1;
            for skill in &record.skills {
                *skill_counts.entry(skill.as_str()).or_insert(0) += 1;
            }
            total_years += u64::from(record.experience_years);
        }

        let mut top_skills: Vec<(String, usize)> = skill_counts
            .into_iter()
            .map(|(skill, count)| (skill.to_string(), count))
            .collect();
        top_skills.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        top_skills.truncate(STATS_TOP_SKILLS);

        let avg_experience = if records.is_empty() {
            0.0
        } else {
            total_years as f64 / records.len() as f64
        };

        Self {
            total_employees: records.len(),
            departments,
            top_skills,
            avg_experience,
        }
    }
}
