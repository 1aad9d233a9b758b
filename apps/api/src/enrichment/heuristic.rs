//! Offline, regex-only enrichment. Always produces a complete record.

use std::sync::LazyLock;

use regex::Regex;

use super::models::{EmploymentType, JobEnrichment, RemoteType, Seniority};
use super::rules::{compile_rules, first_match, RuleSet};
use super::salary::parse_salary_range;
use super::skills::extract_skills;
use crate::import::patterns::{COMPANY_LABEL, ROLE_LABEL};
use crate::import::text::normalize_whitespace;

static REMOTE_RULES: LazyLock<RuleSet<RemoteType>> = LazyLock::new(|| {
    compile_rules(&[
        (r"(?i)\bhybrid\b", RemoteType::Hybrid),
        (r"(?i)\bremote\b", RemoteType::Remote),
        (r"(?i)\b(?:on-site|onsite)\b", RemoteType::Onsite),
    ])
});

static EMPLOYMENT_RULES: LazyLock<RuleSet<EmploymentType>> = LazyLock::new(|| {
    compile_rules(&[
        (r"(?i)\bintern(?:ship)?\b", EmploymentType::Internship),
        (r"(?i)\bcontract\b", EmploymentType::Contract),
        (r"(?i)\bpart[- ]?time\b", EmploymentType::PartTime),
        (r"(?i)\bfull[- ]?time\b", EmploymentType::FullTime),
    ])
});

static SENIORITY_RULES: LazyLock<RuleSet<Seniority>> = LazyLock::new(|| {
    compile_rules(&[
        (r"(?i)\bintern(?:ship)?\b", Seniority::Intern),
        (r"(?i)\bjunior\b", Seniority::Junior),
        (r"(?i)\bmid\b", Seniority::Mid),
        (r"(?i)\bsenior\b", Seniority::Senior),
        (r"(?i)\blead\b", Seniority::Lead),
    ])
});

/// Unlike the import parser's location label, this one keeps the rest of the line.
static LOCATION_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:location|based in|located in)\b\s*[:\-]?\s*(.+)")
        .expect("location pattern must compile")
});

static REMOTE_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bremote\b").expect("remote pattern must compile"));

pub fn heuristic_job_enrichment(job_text: &str) -> JobEnrichment {
    let text = job_text.trim();

    let role = labeled(&ROLE_LABEL, text).or_else(|| text.lines().find_map(normalize_whitespace));
    let company = labeled(&COMPANY_LABEL, text);
    let location = labeled(&LOCATION_LINE, text)
        .or_else(|| REMOTE_WORD.is_match(text).then(|| "Remote".to_string()));

    let salary = parse_salary_range(text);

    JobEnrichment {
        company,
        role,
        location,
        employment_type: first_match(&EMPLOYMENT_RULES, text, EmploymentType::Other),
        seniority: first_match(&SENIORITY_RULES, text, Seniority::Unknown),
        remote_type: first_match(&REMOTE_RULES, text, RemoteType::Unknown),
        salary_min: salary.min,
        salary_max: salary.max,
        currency: salary.currency,
        skills: extract_skills(text),
    }
}

fn labeled(pattern: &Regex, text: &str) -> Option<String> {
    pattern
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| normalize_whitespace(m.as_str()))
}
