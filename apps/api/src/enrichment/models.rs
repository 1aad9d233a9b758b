use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EmploymentType {
    FullTime,
    PartTime,
    Contract,
    Internship,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Seniority {
    Intern,
    Junior,
    Mid,
    Senior,
    Lead,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RemoteType {
    Remote,
    Hybrid,
    Onsite,
    Unknown,
}

/// Fully populated enrichment record. "No signal" is `None`, `Unknown` or `Other`;
/// no key is ever omitted on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobEnrichment {
    pub company: Option<String>,
    pub role: Option<String>,
    pub location: Option<String>,
    pub employment_type: EmploymentType,
    pub seniority: Seniority,
    pub remote_type: RemoteType,
    pub salary_min: Option<u64>,
    pub salary_max: Option<u64>,
    pub currency: Option<String>,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnrichmentSource {
    Ai,
    Heuristic,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichResult {
    pub fields: JobEnrichment,
    pub source: EnrichmentSource,
    pub warnings: Vec<String>,
}

impl EnrichResult {
    pub fn heuristic(fields: JobEnrichment, warnings: Vec<String>) -> Self {
        Self {
            fields,
            source: EnrichmentSource::Heuristic,
            warnings,
        }
    }

    pub fn ai(fields: JobEnrichment) -> Self {
        Self {
            fields,
            source: EnrichmentSource::Ai,
            warnings: Vec::new(),
        }
    }
}
