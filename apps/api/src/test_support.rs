//! Helpers shared by unit tests: stub HTTP servers and canned payloads.

use std::sync::Arc;

use async_trait::async_trait;
use axum::{body::Body, http::Response, Router};
use serde_json::{json, Value};

use crate::import::fetch::{FetchError, PageFetcher};
use crate::llm_client::LlmClient;
use crate::rate_limit::RateLimiter;
use crate::state::AppState;

/// Serves `router` on an ephemeral local port and returns its base URL.
pub async fn spawn_stub(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

/// A Responses API payload carrying `text` as its only output part.
pub fn responses_payload(text: &str) -> Value {
    json!({
        "id": "resp_test",
        "output": [{
            "type": "message",
            "role": "assistant",
            "content": [{ "type": "output_text", "text": text }]
        }],
        "usage": { "input_tokens": 12, "output_tokens": 34 }
    })
}

/// Page fetcher that returns canned HTML, or fails when `html` is `None`.
pub struct StubFetcher {
    pub html: Option<String>,
}

#[async_trait]
impl PageFetcher for StubFetcher {
    async fn fetch_html(&self, _url: &str) -> Result<String, FetchError> {
        self.html.clone().ok_or(FetchError::Status(503))
    }
}

pub fn test_state(html: Option<&str>, llm: Option<LlmClient>) -> AppState {
    AppState {
        llm,
        fetcher: Arc::new(StubFetcher {
            html: html.map(String::from),
        }),
        rate_limiter: Arc::new(RateLimiter::new()),
    }
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
