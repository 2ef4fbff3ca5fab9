//! Liveness check.

use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: String,
    pub version: &'static str,
}

/// GET /api/health — always 200 while the process is serving
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        timestamp: chrono::Local::now()
            .naive_local()
            .format(remedyx_common::entities::TIMESTAMP_FORMAT)
            .to_string(),
        version: env!("CARGO_PKG_VERSION"),
    })
}
