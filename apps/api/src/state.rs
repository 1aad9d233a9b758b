use std::sync::Arc;

use crate::import::fetch::PageFetcher;
use crate::llm_client::LlmClient;
use crate::rate_limit::RateLimiter;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// `None` when no API key is configured; enrichment then stays heuristic.
    pub llm: Option<LlmClient>,
    /// Pluggable page fetcher. Default: HttpPageFetcher.
    pub fetcher: Arc<dyn PageFetcher>,
    pub rate_limiter: Arc<RateLimiter>,
}
