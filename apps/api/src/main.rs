mod config;
mod enrichment;
mod errors;
mod import;
mod llm_client;
mod rate_limit;
mod routes;
mod state;
#[cfg(test)]
mod test_support;
mod validation;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::import::fetch::HttpPageFetcher;
use crate::llm_client::LlmClient;
use crate::rate_limit::RateLimiter;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting JobTrack API v{}", env!("CARGO_PKG_VERSION"));

    // LLM client is optional: without a key enrichment stays heuristic
    let llm = config
        .openai_api_key
        .clone()
        .map(|key| LlmClient::new(key, config.openai_model.clone(), &config.openai_base_url))
        .transpose()
        .context("failed to build LLM client")?;
    match &llm {
        Some(client) => info!("LLM client initialized (model: {})", client.model()),
        None => info!("OPENAI_API_KEY not set, AI enrichment disabled"),
    }

    let fetcher = Arc::new(HttpPageFetcher::new().context("failed to build page fetcher")?);

    let state = AppState {
        llm,
        fetcher,
        rate_limiter: Arc::new(RateLimiter::new()),
    };

    // The browser extension calls the API cross-origin
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
