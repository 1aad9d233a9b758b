//! HTML field parser: role, company and location from a job-posting page.

use scraper::{Html, Selector};
use tracing::debug;

use crate::import::location::parse_location;
use crate::import::models::PartialFields;
use crate::import::patterns::{COMPANY_IS_HIRING, LINKEDIN_SUFFIX, ROLE_AT_COMPANY};
use crate::import::text::{capture_clean, clean_text};

/// What a page title can tell us.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TitleFields {
    pub role: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
}

type TitleShape = fn(&str) -> Option<TitleFields>;

/// Title shapes in precedence order. The first shape that parses wins.
pub const TITLE_SHAPES: &[(&str, TitleShape)] = &[
    ("role_at_company", role_at_company as TitleShape),
    ("company_is_hiring", company_is_hiring as TitleShape),
    ("hyphen_segments", hyphen_segments as TitleShape),
];

/// Parses a job-posting page. `job_url` is always `source_url`.
pub fn parse_job_html(html: &str, source_url: &str) -> PartialFields {
    let document = Html::parse_document(html);

    let title = extract_meta(&document, "og:title").or_else(|| extract_title(&document));
    let title_fields = title.as_deref().map(parse_title).unwrap_or_default();

    let description = extract_meta(&document, "og:description")
        .or_else(|| extract_meta(&document, "description"));

    let location = title_fields
        .location
        .or_else(|| description.as_deref().and_then(parse_location));

    PartialFields {
        company: title_fields.company,
        role: title_fields.role,
        location,
        job_url: Some(source_url.to_string()),
    }
}

/// Splits a page title into role/company/location.
/// Falls back to the whole cleaned title as the role.
pub fn parse_title(title: &str) -> TitleFields {
    let normalized = LINKEDIN_SUFFIX.replace(title, "");
    let normalized = normalized.trim();

    TITLE_SHAPES
        .iter()
        .find_map(|(name, shape)| {
            let fields = shape(normalized)?;
            debug!(shape = *name, "title shape matched");
            Some(fields)
        })
        .unwrap_or_else(|| TitleFields {
            role: clean_text(normalized),
            ..TitleFields::default()
        })
}

fn role_at_company(title: &str) -> Option<TitleFields> {
    let role = capture_clean(&ROLE_AT_COMPANY, title, 1)?;
    let company = capture_clean(&ROLE_AT_COMPANY, title, 2)?;
    Some(TitleFields {
        role: Some(role),
        company: Some(company),
        location: None,
    })
}

fn company_is_hiring(title: &str) -> Option<TitleFields> {
    let company = capture_clean(&COMPANY_IS_HIRING, title, 1)?;
    let role = capture_clean(&COMPANY_IS_HIRING, title, 2)?;
    Some(TitleFields {
        role: Some(role),
        company: Some(company),
        location: None,
    })
}

/// `<role> - <location...> - <company>`; middle segments form the location.
fn hyphen_segments(title: &str) -> Option<TitleFields> {
    let segments: Vec<String> = title.split(" - ").filter_map(clean_text).collect();
    let [first, middle @ .., last] = segments.as_slice() else {
        return None;
    };

    Some(TitleFields {
        role: Some(first.clone()),
        company: Some(last.clone()),
        location: clean_text(&middle.join(", ")),
    })
}

fn extract_title(document: &Html) -> Option<String> {
    let selector = Selector::parse("title").ok()?;
    document
        .select(&selector)
        .find_map(|element| clean_text(&element.text().collect::<String>()))
}

/// Content of the first `<meta>` whose `property` or `name` equals `key` (any case).
/// Attribute order in the markup does not matter.
fn extract_meta(document: &Html, key: &str) -> Option<String> {
    let selector = Selector::parse("meta").ok()?;
    document.select(&selector).find_map(|element| {
        let meta = element.value();
        let matches_key = ["property", "name"]
            .iter()
            .filter_map(|attr| meta.attr(attr))
            .any(|value| value.eq_ignore_ascii_case(key));
        if !matches_key {
            return None;
        }
        meta.attr("content").and_then(clean_text)
    })
}
