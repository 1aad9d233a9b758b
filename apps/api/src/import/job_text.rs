//! Free-text field parser for pasted job descriptions.

use crate::import::location::parse_location;
use crate::import::models::PartialFields;
use crate::import::patterns::{COMPANY_LABEL, ROLE_AT_COMPANY, ROLE_LABEL};
use crate::import::text::{capture_clean, clean_text};

/// Parses a pasted job description. Never sets `job_url`.
pub fn parse_job_text(job_text: Option<&str>) -> PartialFields {
    let Some(text) = job_text else {
        return PartialFields::default();
    };

    let lines: Vec<String> = text.lines().filter_map(clean_text).collect();
    let first_line = lines.first();
    let headline = first_line.and_then(|line| ROLE_AT_COMPANY.captures(line));
    let headline_part = |group: usize| {
        headline
            .as_ref()
            .and_then(|caps| caps.get(group))
            .and_then(|m| clean_text(m.as_str()))
    };

    let role = capture_clean(&ROLE_LABEL, text, 1)
        .or_else(|| headline_part(1))
        .or_else(|| first_line.cloned());

    let company = capture_clean(&COMPANY_LABEL, text, 1)
        .or_else(|| headline_part(2))
        .or_else(|| lines.get(1).cloned());

    PartialFields {
        company,
        role,
        location: parse_location(text),
        job_url: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labeled_fields() {
        let text = r#"
            Role: Backend Engineer
            Company: Deloitte
            Location: Thessaloniki
        "#;
        let fields = parse_job_text(Some(text));
        assert_eq!(fields.role.as_deref(), Some("Backend Engineer"));
        assert_eq!(fields.company.as_deref(), Some("Deloitte"));
        assert_eq!(fields.location.as_deref(), Some("Thessaloniki"));
        assert_eq!(fields.job_url, None);
    }

    #[test]
    fn test_headline_at_pattern() {
        let text = "Senior Data Engineer at Globex\nWe are growing fast.";
        let fields = parse_job_text(Some(text));
        assert_eq!(fields.role.as_deref(), Some("Senior Data Engineer"));
        assert_eq!(fields.company.as_deref(), Some("Globex"));
    }

    #[test]
    fn test_first_and_second_line_fallback() {
        let text = "\n\n  Frontend Developer \n\n Initech  \nWe ship things.";
        let fields = parse_job_text(Some(text));
        assert_eq!(fields.role.as_deref(), Some("Frontend Developer"));
        assert_eq!(fields.company.as_deref(), Some("Initech"));
    }

    #[test]
    fn test_label_beats_headline() {
        let text = "Engineer at Foo\nEmployer: Bar Industries";
        let fields = parse_job_text(Some(text));
        assert_eq!(fields.role.as_deref(), Some("Engineer"));
        assert_eq!(fields.company.as_deref(), Some("Bar Industries"));
    }

    #[test]
    fn test_location_keyword_and_city_pattern() {
        let remote = parse_job_text(Some("Platform Engineer\nAcme\nThis is a remote position"));
        assert_eq!(remote.location.as_deref(), Some("remote"));

        let city = parse_job_text(Some("Platform Engineer\nAcme\nOffice in Athens, Attica"));
        assert_eq!(city.location.as_deref(), Some("Athens, Attica"));
    }

    #[test]
    fn test_missing_or_blank_text() {
        assert_eq!(parse_job_text(None), PartialFields::default());
        assert_eq!(parse_job_text(Some("  \n \n")), PartialFields::default());
    }

    #[test]
    fn test_single_line_has_no_company() {
        let fields = parse_job_text(Some("Site Reliability Engineer"));
        assert_eq!(fields.role.as_deref(), Some("Site Reliability Engineer"));
        assert_eq!(fields.company, None);
    }
}
