//! Axum route handler for job enrichment.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::HeaderMap,
    Json,
};
use serde::Deserialize;
use tracing::info;

use crate::enrichment::{enrich_job_text, EnrichResult};
use crate::errors::AppError;
use crate::rate_limit::{rate_limit_key, ENRICH_LIMIT};
use crate::state::AppState;
use crate::validation::{check_job_text_len, json_rejection, require_http_url};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichRequest {
    pub job_text: String,
    #[serde(default)]
    pub linkedin_url: Option<String>,
}

/// POST /api/v1/applications/import/enrich
pub async fn handle_enrich(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<EnrichRequest>, JsonRejection>,
) -> Result<Json<EnrichResult>, AppError> {
    if state.rate_limiter.check(
        &rate_limit_key("applications:import:enrich", &headers),
        ENRICH_LIMIT,
    ) {
        return Err(AppError::TooManyRequests);
    }

    let Json(request) = payload.map_err(json_rejection)?;
    let job_text = request.job_text.trim();
    if job_text.is_empty() {
        return Err(AppError::Validation("jobText is required.".to_string()));
    }
    check_job_text_len(job_text)?;

    let linkedin_url = request
        .linkedin_url
        .as_deref()
        .map(str::trim)
        .filter(|url| !url.is_empty());
    if let Some(url) = linkedin_url {
        require_http_url("linkedinUrl", url)?;
    }

    let result = enrich_job_text(job_text, linkedin_url, state.llm.as_ref()).await;

    info!(
        source = ?result.source,
        has_company = result.fields.company.is_some(),
        has_role = result.fields.role.is_some(),
        skills = result.fields.skills.len(),
        "applications.import.enrich.success"
    );

    Ok(Json(result))
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        routing::post,
        Json, Router,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::enrichment::enricher::NOT_CONFIGURED;
    use crate::llm_client::{LlmClient, DEFAULT_MODEL};
    use crate::routes::build_router;
    use crate::test_support::{body_json, responses_payload, spawn_stub, test_state};

    fn enrich_request(body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/v1/applications/import/enrich")
            .header("content-type", "application/json")
            .header("x-real-ip", "203.0.113.9")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_enrich_without_ai() {
        let app = build_router(test_state(None, None));
        let response = app
            .oneshot(enrich_request(json!({
                "jobText": "Software Engineering Internship\nWork mode: Remote"
            })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["source"], "heuristic");
        assert_eq!(body["warnings"], json!([NOT_CONFIGURED]));
        assert_eq!(body["fields"]["seniority"], "INTERN");
        assert_eq!(body["fields"]["employmentType"], "INTERNSHIP");
        assert_eq!(body["fields"]["remoteType"], "REMOTE");
        assert!(body["fields"]["salaryMin"].is_null());
    }

    #[tokio::test]
    async fn test_enrich_with_ai() {
        let router = Router::new().route(
            "/v1/responses",
            post(|| async {
                Json(responses_payload(
                    r#"{"company":"Acme","role":"Data Engineer","location":"Berlin, Germany",
                       "employmentType":"FULL_TIME","seniority":"MID","remoteType":"HYBRID",
                       "salaryMin":70000,"salaryMax":85000,"currency":"EUR","skills":["Python","Spark"]}"#,
                ))
            }),
        );
        let base_url = spawn_stub(router).await;
        let llm = LlmClient::new("sk-test".into(), DEFAULT_MODEL.into(), &base_url).unwrap();
        let app = build_router(test_state(None, Some(llm)));

        let response = app
            .oneshot(enrich_request(json!({
                "jobText": "We are looking for a data engineer.",
                "linkedinUrl": "https://www.linkedin.com/jobs/view/5"
            })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["source"], "ai");
        assert_eq!(body["warnings"], json!([]));
        assert_eq!(body["fields"]["company"], "Acme");
        assert_eq!(body["fields"]["remoteType"], "HYBRID");
        assert_eq!(body["fields"]["salaryMin"], 70000);
        assert_eq!(body["fields"]["skills"], json!(["Python", "Spark"]));
    }

    #[tokio::test]
    async fn test_blank_job_text_is_400() {
        let app = build_router(test_state(None, None));
        let response = app
            .oneshot(enrich_request(json!({ "jobText": "   \n " })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_missing_job_text_is_400() {
        let app = build_router(test_state(None, None));
        let response = app
            .oneshot(enrich_request(json!({ "linkedinUrl": "https://example.com/j" })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_invalid_url_is_400() {
        let app = build_router(test_state(None, None));
        let response = app
            .oneshot(enrich_request(json!({
                "jobText": "Backend Engineer",
                "linkedinUrl": "ftp://example.com/job"
            })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_rate_limited_after_twelve_requests() {
        let app = build_router(test_state(None, None));
        let body = json!({ "jobText": "Backend Engineer" });

        for _ in 0..12 {
            let response = app.clone().oneshot(enrich_request(body.clone())).await.unwrap();
            assert_eq!(response.status(), StatusCode::OK);
        }
        let response = app.oneshot(enrich_request(body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
        let body = body_json(response).await;
        assert_eq!(body["error"]["message"], "Too many requests.");
    }
}
