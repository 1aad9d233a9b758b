pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::enrichment::handlers::handle_enrich;
use crate::import::handlers::handle_import;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Import API
        .route("/api/v1/applications/import", post(handle_import))
        .route("/api/v1/applications/import/enrich", post(handle_enrich))
        .with_state(state)
}
