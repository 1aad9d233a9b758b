//! AI-assisted enrichment with heuristic fallback.
//!
//! The heuristic result is computed first and is what the caller gets whenever
//! the model is unconfigured, unreachable, slow, or returns something that does
//! not validate. The model is asked exactly once.

use thiserror::Error;
use tracing::{debug, warn};

use super::fallback::{enhance_or_fallback, Outcome, Overlay};
use super::heuristic::heuristic_job_enrichment;
use super::models::{EnrichResult, JobEnrichment};
use super::prompts::{build_input, ENRICHMENT_SYSTEM};
use super::schema::{AiEnrichment, RawAiEnrichment, SchemaViolation, ENRICHMENT_SCHEMA, SCHEMA_NAME};
use crate::import::text::truncate_chars;
use crate::llm_client::{JsonSchemaFormat, LlmClient, LlmError};

pub const NOT_CONFIGURED: &str = "AI enrichment is not configured. Using heuristic extraction.";
pub const EMPTY_OUTPUT: &str = "AI returned empty output. Using heuristic extraction.";
pub const TIMED_OUT: &str = "AI enrichment timed out. Using heuristic extraction.";
pub const INVALID_OUTPUT: &str = "AI returned invalid output. Using heuristic extraction.";
pub const FAILED: &str = "AI enrichment failed. Using heuristic extraction.";

/// Characters of an upstream error body echoed back as a warning.
const ERROR_SNIPPET_CHARS: usize = 180;

#[derive(Debug, Error)]
pub enum EnrichmentError {
    #[error(transparent)]
    Llm(#[from] LlmError),

    #[error("enrichment output failed validation: {0}")]
    Schema(#[from] SchemaViolation),
}

impl EnrichmentError {
    /// User-facing warnings for this failure, in display order.
    pub fn warnings(&self) -> Vec<String> {
        match self {
            EnrichmentError::Llm(LlmError::Api { status, message }) => {
                let mut warnings = vec![format!(
                    "AI enrichment request failed ({status}). Using heuristic extraction."
                )];
                let snippet = truncate_chars(message, ERROR_SNIPPET_CHARS);
                if !snippet.trim().is_empty() {
                    warnings.push(snippet);
                }
                warnings
            }
            EnrichmentError::Llm(LlmError::EmptyContent) => vec![EMPTY_OUTPUT.to_string()],
            EnrichmentError::Llm(e) if e.is_timeout() => vec![TIMED_OUT.to_string()],
            EnrichmentError::Llm(LlmError::Parse(_)) | EnrichmentError::Schema(_) => {
                vec![INVALID_OUTPUT.to_string()]
            }
            EnrichmentError::Llm(LlmError::Http(_)) => vec![FAILED.to_string()],
        }
    }
}

impl Overlay<JobEnrichment> for AiEnrichment {
    fn overlay(self, base: JobEnrichment) -> JobEnrichment {
        JobEnrichment {
            company: self.company.or(base.company),
            role: self.role.or(base.role),
            location: self.location.or(base.location),
            employment_type: self.employment_type.unwrap_or(base.employment_type),
            seniority: self.seniority.unwrap_or(base.seniority),
            remote_type: self.remote_type.unwrap_or(base.remote_type),
            salary_min: self.salary_min.or(base.salary_min),
            salary_max: self.salary_max.or(base.salary_max),
            currency: self.currency.or(base.currency),
            skills: if self.skills.is_empty() {
                base.skills
            } else {
                self.skills
            },
        }
    }
}

/// Enriches `job_text`, preferring the model when `llm` is configured.
pub async fn enrich_job_text(
    job_text: &str,
    linkedin_url: Option<&str>,
    llm: Option<&LlmClient>,
) -> EnrichResult {
    let baseline = heuristic_job_enrichment(job_text);

    let Some(llm) = llm else {
        return EnrichResult::heuristic(baseline, vec![NOT_CONFIGURED.to_string()]);
    };

    let input = build_input(job_text, linkedin_url);
    match enhance_or_fallback(baseline, request_enrichment(llm, &input)).await {
        Outcome::Enhanced(fields) => EnrichResult::ai(fields),
        Outcome::Fallback { baseline, error } => {
            warn!(model = llm.model(), error = %error, "enrichment.ai_fallback");
            EnrichResult::heuristic(baseline, error.warnings())
        }
    }
}

async fn request_enrichment(llm: &LlmClient, input: &str) -> Result<AiEnrichment, EnrichmentError> {
    let format = JsonSchemaFormat {
        name: SCHEMA_NAME,
        schema: &*ENRICHMENT_SCHEMA,
    };
    let raw: RawAiEnrichment = llm.call_json(ENRICHMENT_SYSTEM, input, format).await?;
    let validated = raw.validate()?;
    debug!(skills = validated.skills.len(), "enrichment.ai_validated");
    Ok(validated)
}
