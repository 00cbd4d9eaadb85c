//! Deterministic reply templates.

use std::fmt::Write;

use roster_core::constants::{
    LIST_SEPARATOR, TEMPLATE_LIST_SKILLS, TEMPLATE_MAX_LISTED, TEMPLATE_SINGLE_SKILLS,
};
use roster_core::models::Candidate;

/// Render a template reply. `candidates` must be non-empty; an empty slice
/// renders the multi-candidate header with no entries.
pub fn render(query: &str, candidates: &[Candidate]) -> String {
    match candidates {
        [only] => render_single(query, only),
        _ => render_list(query, candidates),
    }
}

fn render_single(query: &str, candidate: &Candidate) -> String {
    let r = &candidate.record;
    format!(
        "Based on your query \"{query}\", I found an excellent candidate:\n\n\
         **{name}** would be perfect for this role. They have {years} years of experience \
         and their skills include {skills}.\n\n\
         They have worked on projects like: {projects}\n\n\
         Department: {department}\n\
         Specialization: {specialization}\n\
         Current availability: {availability}\n\n\
         Would you like more details about their background or see other candidates?",
        name = r.name,
        years = r.experience_years,
        skills = r.top_skills(TEMPLATE_SINGLE_SKILLS).join(LIST_SEPARATOR),
        projects = r.projects.join(LIST_SEPARATOR),
        department = r.department,
        specialization = r.specialization,
        availability = r.availability,
    )
}

fn render_list(query: &str, candidates: &[Candidate]) -> String {
    let mut out = format!(
        "Based on your query \"{query}\", I found {} excellent candidates:\n\n",
        candidates.len()
    );
    for (i, candidate) in candidates.iter().take(TEMPLATE_MAX_LISTED).enumerate() {
        let r = &candidate.record;
        let _ = write!(
            out,
            "**{}. {}** ({} years experience)\n\
             - Key skills: {}\n\
             - Specialization: {}\n\
             - Availability: {}\n\n",
            i + 1,
            r.name,
            r.experience_years,
            r.top_skills(TEMPLATE_LIST_SKILLS).join(LIST_SEPARATOR),
            r.specialization,
            r.availability,
        );
    }

    let rest = candidates.len().saturating_sub(TEMPLATE_MAX_LISTED);
    if rest > 0 {
        let noun = if rest == 1 { "candidate" } else { "candidates" };
        let _ = write!(
            out,
            "\nI found {rest} more {noun}. Would you like to see them?"
        );
    }
    out
}
