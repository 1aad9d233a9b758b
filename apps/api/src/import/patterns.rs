//! Compiled patterns shared by the import and enrichment parsers.

use std::sync::LazyLock;

use regex::Regex;

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("static pattern must compile")
}

/// `role: X`, `position - X`, `title X`.
pub static ROLE_LABEL: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)\b(?:role|position|title)\b\s*[:\-]?\s*(.+)"));

/// `company: X`, `employer: X`, `organization: X`.
pub static COMPANY_LABEL: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)\b(?:company|employer|organization)\b\s*[:\-]?\s*(.+)"));

/// `<role> at <company>` on a single line.
pub static ROLE_AT_COMPANY: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)^(.+?)\s+at\s+(.+)$"));

/// `<company> is hiring <role>` on a single line.
pub static COMPANY_IS_HIRING: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)^(.+?)\s+is hiring\s+(.+)$"));

/// Trailing `| LinkedIn` on page titles.
pub static LINKEDIN_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)\s*\|\s*LinkedIn\s*$"));

/// Labeled location, stopping at the first separator.
pub static LOCATION_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"(?i)\b(?:location|located in|based in)\b\s*[:\-]?\s*([^\n|.,;]{2,80})")
});

/// Bare work-mode keyword used as a location.
pub static WORK_MODE: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)\b(remote|hybrid|on-site|onsite)\b"));

/// `City, Region` or `City, Region, Country` in capitalized words.
pub static CITY_REGION: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"\b([A-Z][A-Za-z.'-]+,\s*[A-Z][A-Za-z.'-]+(?:,\s*[A-Z][A-Za-z.'-]+)?)\b")
});
