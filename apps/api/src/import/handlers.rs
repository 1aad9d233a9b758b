//! Axum route handler for the import API.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::HeaderMap,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use crate::errors::AppError;
use crate::import::fetch::FetchError;
use crate::import::{merge_import_fields, parse_job_html, parse_job_text, ImportFields};
use crate::rate_limit::{rate_limit_key, IMPORT_LIMIT};
use crate::state::AppState;
use crate::validation::{check_job_text_len, json_rejection, require_http_url};

pub const NOTHING_EXTRACTED: &str =
    "Could not extract company/role from this URL. Paste job text and try again.";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportRequest {
    pub linkedin_url: String,
    #[serde(default)]
    pub job_text: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ImportResponse {
    pub fields: ImportFields,
}

/// POST /api/v1/applications/import
///
/// Fetches the posting page, parses it together with the optional pasted text,
/// and returns the merged fields. A failed fetch degrades to text-only parsing.
pub async fn handle_import(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<ImportRequest>, JsonRejection>,
) -> Result<Json<ImportResponse>, AppError> {
    if state
        .rate_limiter
        .check(&rate_limit_key("applications:import", &headers), IMPORT_LIMIT)
    {
        return Err(AppError::TooManyRequests);
    }

    let Json(request) = payload.map_err(json_rejection)?;
    require_http_url("linkedinUrl", &request.linkedin_url)?;
    let source_url = request.linkedin_url.trim();
    if let Some(job_text) = &request.job_text {
        check_job_text_len(job_text)?;
    }

    let html = match state.fetcher.fetch_html(source_url).await {
        Ok(html) => html,
        Err(FetchError::Status(status)) => {
            warn!(status, "applications.import.linkedin_fetch_not_ok");
            String::new()
        }
        Err(e) => {
            error!(error = %e, "applications.import.linkedin_fetch_failed");
            String::new()
        }
    };

    let from_html = parse_job_html(&html, source_url);
    let from_text = parse_job_text(request.job_text.as_deref());
    let fields = merge_import_fields(from_html, from_text, source_url);

    if fields.is_unusable() {
        return Err(AppError::UnprocessableEntity(NOTHING_EXTRACTED.to_string()));
    }

    info!(
        has_company = fields.company.is_some(),
        has_role = fields.role.is_some(),
        has_location = fields.location.is_some(),
        "applications.import.success"
    );

    Ok(Json(ImportResponse { fields }))
}
