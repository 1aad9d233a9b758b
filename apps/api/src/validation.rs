//! Request payload checks shared by the import routes.

use axum::extract::rejection::JsonRejection;
use reqwest::Url;

use crate::errors::AppError;

/// Upper bound on pasted job text accepted by the API.
pub const MAX_JOB_TEXT_CHARS: usize = 20_000;

/// Accepts absolute `http`/`https` URLs only.
pub fn require_http_url(field: &str, value: &str) -> Result<Url, AppError> {
    let invalid = || AppError::Validation(format!("{field} must be a valid http(s) URL."));
    let url = Url::parse(value.trim()).map_err(|_| invalid())?;
    match url.scheme() {
        "http" | "https" if url.has_host() => Ok(url),
        _ => Err(invalid()),
    }
}

/// Rejects job text above `MAX_JOB_TEXT_CHARS`.
pub fn check_job_text_len(value: &str) -> Result<(), AppError> {
    if value.chars().count() > MAX_JOB_TEXT_CHARS {
        return Err(AppError::Validation(format!(
            "jobText must be at most {MAX_JOB_TEXT_CHARS} characters."
        )));
    }
    Ok(())
}

/// Maps a JSON extractor rejection to a 400. Data errors keep their detail.
pub fn json_rejection(rejection: JsonRejection) -> AppError {
    match rejection {
        JsonRejection::JsonDataError(err) => AppError::Validation(err.body_text()),
        _ => AppError::Validation("Invalid JSON body.".to_string()),
    }
}
