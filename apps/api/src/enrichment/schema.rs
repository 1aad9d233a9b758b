//! Strict output schema for AI enrichment and validation of what comes back.

use std::collections::HashSet;
use std::sync::LazyLock;

use serde::Deserialize;
use serde_json::{json, Value};
use thiserror::Error;

use super::models::{EmploymentType, RemoteType, Seniority};
use super::skills::MAX_SKILLS;

pub const SCHEMA_NAME: &str = "job_enrichment";

const MAX_TEXT_CHARS: usize = 120;
const MAX_SKILL_CHARS: usize = 40;

/// JSON schema sent as `text.format.schema`. Strict mode needs every key
/// listed in `required` and no additional properties.
pub static ENRICHMENT_SCHEMA: LazyLock<Value> = LazyLock::new(|| {
    json!({
        "type": "object",
        "additionalProperties": false,
        "properties": {
            "company": { "type": ["string", "null"], "maxLength": MAX_TEXT_CHARS },
            "role": { "type": ["string", "null"], "maxLength": MAX_TEXT_CHARS },
            "location": { "type": ["string", "null"], "maxLength": MAX_TEXT_CHARS },
            "employmentType": {
                "type": ["string", "null"],
                "enum": ["FULL_TIME", "PART_TIME", "CONTRACT", "INTERNSHIP", "OTHER", null]
            },
            "seniority": {
                "type": ["string", "null"],
                "enum": ["INTERN", "JUNIOR", "MID", "SENIOR", "LEAD", "UNKNOWN", null]
            },
            "remoteType": {
                "type": ["string", "null"],
                "enum": ["REMOTE", "HYBRID", "ONSITE", "UNKNOWN", null]
            },
            "salaryMin": { "type": ["number", "null"] },
            "salaryMax": { "type": ["number", "null"] },
            "currency": { "type": ["string", "null"], "pattern": "^[A-Z]{3}$" },
            "skills": {
                "type": "array",
                "maxItems": MAX_SKILLS,
                "items": { "type": "string", "maxLength": MAX_SKILL_CHARS }
            }
        },
        "required": [
            "company", "role", "location", "employmentType", "seniority",
            "remoteType", "salaryMin", "salaryMax", "currency", "skills"
        ]
    })
});

#[derive(Debug, Error, PartialEq)]
pub enum SchemaViolation {
    #[error("{field} must be 1..={max} characters after trimming")]
    Length { field: &'static str, max: usize },

    #[error("skills has {0} entries, more than allowed")]
    TooManySkills(usize),

    #[error("currency {0:?} is not a 3-letter uppercase code")]
    Currency(String),

    #[error("{field} must be a positive integer, got {value}")]
    Salary { field: &'static str, value: f64 },
}

/// Model output as received. Enum membership is enforced by serde; everything
/// else is checked in [`RawAiEnrichment::validate`].
///
/// The schema sent to the model requires all ten keys, but a missing key is
/// read as null here rather than rejecting the whole reply.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawAiEnrichment {
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub employment_type: Option<EmploymentType>,
    #[serde(default)]
    pub seniority: Option<Seniority>,
    #[serde(default)]
    pub remote_type: Option<RemoteType>,
    #[serde(default)]
    pub salary_min: Option<f64>,
    #[serde(default)]
    pub salary_max: Option<f64>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
}

/// Validated AI fields. `None` means the model had no opinion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AiEnrichment {
    pub company: Option<String>,
    pub role: Option<String>,
    pub location: Option<String>,
    pub employment_type: Option<EmploymentType>,
    pub seniority: Option<Seniority>,
    pub remote_type: Option<RemoteType>,
    pub salary_min: Option<u64>,
    pub salary_max: Option<u64>,
    pub currency: Option<String>,
    pub skills: Vec<String>,
}

impl RawAiEnrichment {
    pub fn validate(self) -> Result<AiEnrichment, SchemaViolation> {
        if self.skills.len() > MAX_SKILLS {
            return Err(SchemaViolation::TooManySkills(self.skills.len()));
        }
        let mut seen = HashSet::new();
        let mut skills = Vec::with_capacity(self.skills.len());
        for skill in &self.skills {
            let skill = bounded_text("skills", skill, MAX_SKILL_CHARS)?;
            if seen.insert(skill.to_lowercase()) {
                skills.push(skill);
            }
        }

        Ok(AiEnrichment {
            company: optional_text("company", self.company)?,
            role: optional_text("role", self.role)?,
            location: optional_text("location", self.location)?,
            employment_type: self.employment_type,
            seniority: self.seniority,
            remote_type: self.remote_type,
            salary_min: salary("salaryMin", self.salary_min)?,
            salary_max: salary("salaryMax", self.salary_max)?,
            currency: self.currency.map(currency).transpose()?,
            skills,
        })
    }
}

fn bounded_text(field: &'static str, value: &str, max: usize) -> Result<String, SchemaViolation> {
    let trimmed = value.trim();
    let len = trimmed.chars().count();
    if len == 0 || len > max {
        return Err(SchemaViolation::Length { field, max });
    }
    Ok(trimmed.to_string())
}

fn optional_text(
    field: &'static str,
    value: Option<String>,
) -> Result<Option<String>, SchemaViolation> {
    value
        .map(|value| bounded_text(field, &value, MAX_TEXT_CHARS))
        .transpose()
}

fn currency(value: String) -> Result<String, SchemaViolation> {
    let trimmed = value.trim();
    if trimmed.len() == 3 && trimmed.chars().all(|c| c.is_ascii_uppercase()) {
        Ok(trimmed.to_string())
    } else {
        Err(SchemaViolation::Currency(value))
    }
}

fn salary(field: &'static str, value: Option<f64>) -> Result<Option<u64>, SchemaViolation> {
    match value {
        None => Ok(None),
        Some(v) if v.is_finite() && v.fract() == 0.0 && v > 0.0 && v <= u64::MAX as f64 => {
            Ok(Some(v as u64))
        }
        Some(v) => Err(SchemaViolation::Salary { field, value: v }),
    }
}
