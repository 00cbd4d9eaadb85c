/// Roster system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Separator used when joining list fields into text.
pub const LIST_SEPARATOR: &str = ", ";

/// Reply returned when no candidate clears the relevance threshold.
pub const NO_MATCH_REPLY: &str =
    "I couldn't find any employees matching your criteria. Please try a different search query.";

/// System message sent to the generative collaborator.
pub const GENERATION_SYSTEM_PROMPT: &str = "You are a helpful HR assistant.";

/// Candidates listed by the multi-candidate template.
pub const TEMPLATE_MAX_LISTED: usize = 3;

/// Skills shown per candidate in the multi-candidate template.
pub const TEMPLATE_LIST_SKILLS: usize = 3;

/// Skills shown in the single-candidate template.
pub const TEMPLATE_SINGLE_SKILLS: usize = 5;

/// Skills reported by corpus statistics.
pub const STATS_TOP_SKILLS: usize = 10;
