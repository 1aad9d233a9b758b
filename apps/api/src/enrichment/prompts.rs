use crate::import::text::truncate_chars;

pub const ENRICHMENT_SYSTEM: &str = "Extract structured job fields from text. \
Return only JSON per schema. Leave unknown fields as null or UNKNOWN.";

/// Cap on the user message sent to the model.
pub const MAX_INPUT_CHARS: usize = 12_000;

/// Optional URL paragraph, a header, then the raw text; blank-line separated.
pub fn build_input(job_text: &str, linkedin_url: Option<&str>) -> String {
    let url_line = linkedin_url
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .map(|url| format!("LinkedIn URL: {url}"));

    let parts: Vec<&str> = url_line
        .as_deref()
        .into_iter()
        .chain(["Job description:", job_text])
        .collect();

    truncate_chars(&parts.join("\n\n"), MAX_INPUT_CHARS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_with_url() {
        let input = build_input("Backend Engineer", Some("https://www.linkedin.com/jobs/view/1"));
        assert_eq!(
            input,
            "LinkedIn URL: https://www.linkedin.com/jobs/view/1\n\nJob description:\n\nBackend Engineer"
        );
    }

    #[test]
    fn test_blank_url_is_skipped() {
        assert_eq!(
            build_input("Backend Engineer", Some("  ")),
            "Job description:\n\nBackend Engineer"
        );
        assert_eq!(
            build_input("Backend Engineer", None),
            "Job description:\n\nBackend Engineer"
        );
    }

    #[test]
    fn test_input_is_truncated() {
        let input = build_input(&"ä".repeat(MAX_INPUT_CHARS), None);
        assert_eq!(input.chars().count(), MAX_INPUT_CHARS);
        assert!(input.starts_with("Job description:"));
    }
}
