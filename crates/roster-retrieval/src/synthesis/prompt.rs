//! Prompt construction for the generative collaborator.

use std::fmt::Write;

use roster_core::constants::LIST_SEPARATOR;
use roster_core::models::Candidate;

/// Build the user prompt: the query plus a summary block per candidate.
pub fn build_prompt(query: &str, candidates: &[Candidate]) -> String {
    let mut context = String::from("Based on your query, here are the relevant employees:\n\n");
    for candidate in candidates {
        let r = &candidate.record;
        // Writing into a String cannot fail.
        let _ = write!(
            context,
            "**{}** ({} years experience)\n\
             - Skills: {}\n\
             - Projects: {}\n\
             - Department: {}\n\
             - Specialization: {}\n\
             - Availability: {}\n\n",
            r.name,
            r.experience_years,
            r.skills.join(LIST_SEPARATOR),
            r.projects.join(LIST_SEPARATOR),
            r.department,
            r.specialization,
            r.availability,
        );
    }

    format!(
        "You are an HR assistant helping to find the right employees for projects.\n\
         A user asked: \"{query}\"\n\n\
         {context}\
         Please provide a helpful, natural response recommending the most suitable candidates \
         and explaining why they would be a good fit. Be conversational and highlight their \
         relevant experience and skills."
    )
}
