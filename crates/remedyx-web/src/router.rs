//! Axum router — maps all URL paths to handlers.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use tower_http::{
    cors::CorsLayer,
    trace::TraceLayer,
    compression::CompressionLayer,
};
use std::sync::Arc;
use crate::state::{AppState, SharedState};
use crate::handlers::{
    search::search_disease,
    investigate::investigate_disease,
    download::download_results,
    health::health_check,
};

/// Build and return the full Axum router.
pub fn build_router(state: AppState) -> Router {
    let shared: SharedState = Arc::new(state);

    Router::new()
        .route("/api/search",               post(search_disease))
        // Structure uploads are accepted at any size
        .route("/api/investigate",          post(investigate_disease).layer(DefaultBodyLimit::disable()))
        .route("/api/download/{result_id}", get(download_results))
        .route("/api/health",               get(health_check))

        // Middleware
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(shared)
}
