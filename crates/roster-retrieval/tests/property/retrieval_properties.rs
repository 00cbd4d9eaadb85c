use proptest::prelude::*;
use roster_core::models::{Availability, Candidate, EmployeeRecord};
use roster_retrieval::index::{l2_norm, normalize_vector};
use roster_retrieval::retriever::apply_threshold;
use roster_retrieval::{normalize, VectorIndex};

fn vectors_and_query() -> impl Strategy<Value = (Vec<Vec<f32>>, Vec<f32>)> {
    (1usize..8).prop_flat_map(|d| {
        (
            prop::collection::vec(prop::collection::vec(-10.0f32..10.0, d), 1..20),
            prop::collection::vec(-10.0f32..10.0, d),
        )
    })
}

fn availability() -> impl Strategy<Value = Availability> {
    prop_oneof![
        Just(Availability::Available),
        Just(Availability::Busy),
        Just(Availability::OnLeave),
    ]
}

fn employee() -> impl Strategy<Value = EmployeeRecord> {
    let word = "[A-Za-z][A-Za-z ]{0,10}";
    (
        any::<u64>(),
        word,
        prop::collection::vec(word, 0..6),
        0u32..45,
        prop::collection::vec(word, 0..4),
        (word, word),
        prop::collection::vec(word, 0..3),
        availability(),
    )
        .prop_map(
            |(id, name, skills, experience_years, projects, (department, specialization), certifications, availability)| {
                EmployeeRecord {
                    id,
                    name,
                    skills,
                    experience_years,
                    projects,
                    department,
                    specialization,
                    certifications,
                    availability,
                }
            },
        )
}

fn candidate(score: f32) -> Candidate {
    Candidate {
        record: EmployeeRecord {
            id: 0,
            name: "X".into(),
            skills: vec![],
            experience_years: 0,
            projects: vec![],
            department: String::new(),
            specialization: String::new(),
            certifications: vec![],
            availability: Availability::Available,
        },
        similarity_score: score,
    }
}

proptest! {
    #[test]
    fn normalized_vectors_have_unit_length(v in prop::collection::vec(-100.0f32..100.0, 1..32)) {
        prop_assume!(l2_norm(&v) > 1e-3);
        let n = normalize_vector(&v);
        prop_assert!((l2_norm(&n) - 1.0).abs() < 1e-4);
    }

    #[test]
    fn normalization_is_idempotent(v in prop::collection::vec(-100.0f32..100.0, 1..32)) {
        let once = normalize_vector(&v);
        let twice = normalize_vector(&once);
        for (a, b) in once.iter().zip(&twice) {
            prop_assert!((a - b).abs() < 1e-5);
        }
    }

    #[test]
    fn search_is_sorted_bounded_and_clamped((vectors, query) in vectors_and_query(), k in 1usize..25) {
        let n = vectors.len();
        let index = VectorIndex::build(vectors, (0..n).collect()).unwrap();
        let hits = index.search(&query, k).unwrap();

        prop_assert_eq!(hits.len(), k.min(n));
        for pair in hits.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
        }
        prop_assert!(hits.iter().all(|h| (-1.0..=1.0).contains(&h.score)));
    }

    #[test]
    fn stored_vector_matches_itself_with_unit_score(v in prop::collection::vec(-10.0f32..10.0, 1..16)) {
        prop_assume!(l2_norm(&v) > 1e-3);
        let index = VectorIndex::build(vec![v.clone()], vec![0usize]).unwrap();
        let hits = index.search(&v, 1).unwrap();
        prop_assert!((hits[0].score - 1.0).abs() < 1e-5);
    }

    #[test]
    fn oversized_k_returns_every_entry_once((vectors, query) in vectors_and_query()) {
        let n = vectors.len();
        let index = VectorIndex::build(vectors, (0..n).collect()).unwrap();
        let mut refs: Vec<usize> = index.search(&query, n + 3).unwrap().into_iter().map(|h| h.reference).collect();
        refs.sort_unstable();
        prop_assert_eq!(refs, (0..n).collect::<Vec<_>>());
    }

    #[test]
    fn threshold_keeps_exactly_the_scores_above(scores in prop::collection::vec(-1.0f32..=1.0, 0..20), t in -1.0f32..=1.0) {
        let kept = apply_threshold(scores.iter().map(|s| candidate(*s)).collect(), t);
        let expected: Vec<f32> = scores.iter().copied().filter(|s| *s > t).collect();
        let actual: Vec<f32> = kept.iter().map(|c| c.similarity_score).collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn normalizer_is_pure_and_complete(record in employee()) {
        let text = normalize(&record);
        prop_assert_eq!(&text, &normalize(&record.clone()));

        let s = text.as_str();
        for item in record.skills.iter().chain(&record.projects).chain(&record.certifications) {
            prop_assert!(s.contains(item.as_str()));
        }
        let labels: Vec<&str> = s.lines().map(|l| l.split(':').next().unwrap_or("")).collect();
        prop_assert_eq!(
            labels,
            vec!["Name", "Skills", "Experience", "Projects", "Department", "Specialization", "Certifications", "Availability"]
        );
    }
}
