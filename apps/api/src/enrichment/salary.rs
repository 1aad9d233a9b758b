//! Salary range detection.
//!
//! Thousands groups are assumed to be exactly three digits after `,` or `.`;
//! other grouping conventions ("80 500") are not recognised.

use std::sync::LazyLock;

use regex::{Captures, Regex};

/// Optional currency, then `NN[N][,.NNN] - NN[N][,.NNN]` with a hyphen or en dash.
static SALARY_RANGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(\b[A-Z]{3}\b|\$|€|£)?\s?([0-9]{2,3})(?:[.,]([0-9]{3}))?\s*[-–]\s*([0-9]{2,3})(?:[.,]([0-9]{3}))?",
    )
    .expect("salary pattern must compile")
});

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SalaryRange {
    pub min: Option<u64>,
    pub max: Option<u64>,
    pub currency: Option<String>,
}

/// First salary range in `text`. Later ranges are ignored.
pub fn parse_salary_range(text: &str) -> SalaryRange {
    let Some(caps) = SALARY_RANGE.captures(text) else {
        return SalaryRange::default();
    };

    SalaryRange {
        min: amount(&caps, 2, 3),
        max: amount(&caps, 4, 5),
        currency: caps.get(1).and_then(|m| currency_code(m.as_str())),
    }
}

/// `major * 1000 + minor` when a thousands group is present, else `major`.
/// Zero is not a salary.
fn amount(caps: &Captures<'_>, major: usize, minor: usize) -> Option<u64> {
    let major: u64 = caps.get(major)?.as_str().parse().ok()?;
    let value = match caps.get(minor) {
        Some(group) => major * 1000 + group.as_str().parse::<u64>().ok()?,
        None => major,
    };
    (value > 0).then_some(value)
}

fn currency_code(symbol: &str) -> Option<String> {
    match symbol {
        "$" => Some("USD".to_string()),
        "€" => Some("EUR".to_string()),
        "£" => Some("GBP".to_string()),
        code if code.len() == 3 && code.chars().all(|c| c.is_ascii_uppercase()) => {
            Some(code.to_string())
        }
        _ => None,
    }
}
