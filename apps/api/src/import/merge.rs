use crate::import::models::{ImportFields, PartialFields};
use crate::import::text::first_non_empty;

pub const COMPANY_WARNING: &str =
    "Company could not be detected reliably. Please fill it manually.";
pub const ROLE_WARNING: &str = "Role could not be detected reliably. Please fill it manually.";

/// Combines the HTML and free-text results. HTML values take precedence;
/// `job_url` falls back to `source_url`. Missing company/role produce warnings,
/// company first.
pub fn merge_import_fields(
    from_html: PartialFields,
    from_text: PartialFields,
    source_url: &str,
) -> ImportFields {
    let mut fields = ImportFields {
        company: first_non_empty([from_html.company, from_text.company]),
        role: first_non_empty([from_html.role, from_text.role]),
        location: first_non_empty([from_html.location, from_text.location]),
        job_url: first_non_empty([from_html.job_url, Some(source_url.to_string())]),
        warnings: Vec::new(),
    };

    let required = [
        (fields.company.is_none(), COMPANY_WARNING),
        (fields.role.is_none(), ROLE_WARNING),
    ];
    fields.warnings = required
        .into_iter()
        .filter(|(missing, _)| *missing)
        .map(|(_, warning)| warning.to_string())
        .collect();

    fields
}
