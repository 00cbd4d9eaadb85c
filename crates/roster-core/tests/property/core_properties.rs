use proptest::prelude::*;
use roster_core::corpus::{CorpusStats, EmployeeFilter};
use roster_core::models::{Availability, EmployeeRecord};

fn employee() -> impl Strategy<Value = EmployeeRecord> {
    (
        prop::collection::vec("[A-Za-z]{1,8}", 0..5),
        0u32..40,
        prop_oneof![Just("Engineering"), Just("Design"), Just("Data")],
    )
        .prop_map(|(skills, experience_years, department)| EmployeeRecord {
            id: 0,
            name: "Someone".into(),
            skills,
            experience_years,
            projects: vec![],
            department: department.into(),
            specialization: "General".into(),
            certifications: vec![],
            availability: Availability::Available,
        })
}

proptest! {
    #[test]
    fn parsed_skills_are_trimmed_and_non_empty(list in "[A-Za-z ,]{0,60}") {
        for skill in EmployeeFilter::parse_skills(&list) {
            prop_assert!(!skill.is_empty());
            prop_assert_eq!(skill.trim(), skill.as_str());
            prop_assert!(!skill.contains(','));
        }
    }

    #[test]
    fn default_filter_matches_everyone(record in employee()) {
        prop_assert!(EmployeeFilter::default().matches(&record));
    }

    #[test]
    fn stats_are_consistent(records in prop::collection::vec(employee(), 0..30)) {
        let stats = CorpusStats::compute(&records);
        prop_assert_eq!(stats.total_employees, records.len());
        prop_assert_eq!(stats.departments.values().sum::<usize>(), records.len());
        prop_assert!(stats.top_skills.len() <= 10);
        for pair in stats.top_skills.windows(2) {
            prop_assert!(pair[0].1 >= pair[1].1);
        }
        let max_years = records.iter().map(|r| r.experience_years).max().unwrap_or(0);
        prop_assert!(stats.avg_experience >= 0.0 && stats.avg_experience <= f64::from(max_years));
    }
}
