//! Disease catalog search.

use axum::{
    extract::{rejection::JsonRejection, State},
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::state::SharedState;
use remedyx_common::{ApiError, DiseaseRecord};

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub disease_name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
    pub results: Vec<DiseaseRecord>,
    pub count: usize,
}

/// POST /api/search — substring lookup in the built-in catalog
pub async fn search_disease(
    State(state): State<SharedState>,
    payload: Result<Json<SearchRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(req) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let query = req.disease_name.unwrap_or_default();

    let results: Vec<DiseaseRecord> = state.catalog.search(&query)?.into_iter().cloned().collect();
    let count = results.len();
    let message = (count == 0).then_some("No diseases found matching your search");

    Ok(Json(SearchResponse {
        success: true,
        message,
        results,
        count,
    }))
}
