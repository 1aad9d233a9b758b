use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::import::text::normalize_whitespace;

pub const MAX_SKILLS: usize = 12;

/// Allow-listed technologies. `C#` ends in a non-word character, so it is matched
/// without a trailing word boundary.
static SKILL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:TypeScript|JavaScript|React|Next\.js|Node\.js|Python|Java|SQL|AWS|GCP|Azure|Docker|Kubernetes)\b|\bC#",
    )
    .expect("skill pattern must compile")
});

/// Skills in scan order, case as first seen, deduplicated ignoring case,
/// at most `MAX_SKILLS`.
pub fn extract_skills(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    SKILL_PATTERN
        .find_iter(text)
        .filter_map(|m| normalize_whitespace(m.as_str()))
        .filter(|skill| seen.insert(skill.to_lowercase()))
        .take(MAX_SKILLS)
        .collect()
}
