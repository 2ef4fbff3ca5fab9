//! Mock investigation endpoint.
//! Accepts JSON, urlencoded forms, or multipart uploads carrying a `pdbFile`.

use axum::{
    extract::{FromRequest, Multipart, Request, State},
    http::header::CONTENT_TYPE,
    response::IntoResponse,
    Form, Json,
};
use remedyx_common::{ApiError, InvestigationResult};
use remedyx_research::InvestigationRequest;
use serde::Serialize;
use tracing::{debug, info};

use crate::state::SharedState;

/// Multipart part holding the optional structure file.
const STRUCTURE_FILE_FIELD: &str = "pdbFile";

#[derive(Debug, Serialize)]
pub struct InvestigateResponse {
    pub success: bool,
    pub results: Vec<InvestigationResult>,
    pub result_id: String,
    pub message: String,
}

/// POST /api/investigate — generate ranked mock compounds and store the result
pub async fn investigate_disease(
    State(state): State<SharedState>,
    request: Request,
) -> Result<impl IntoResponse, ApiError> {
    let req = read_request(&state, request).await?;

    let now = chrono::Local::now().naive_local();
    let result = state.investigator.investigate(&req, now)?;
    let message = format!("Successfully analyzed {}", result.disease_name);

    let result_id = state.store.insert(result.clone()).await;
    info!(%result_id, pdb_uploaded = result.source_flag, "investigation complete");

    Ok(Json(InvestigateResponse {
        success: true,
        results: vec![result],
        result_id,
        message,
    }))
}

async fn read_request(state: &SharedState, request: Request) -> Result<InvestigationRequest, ApiError> {
    let content_type = request
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_ascii_lowercase();

    if content_type.starts_with("application/json") {
        let Json(req) = Json::<InvestigationRequest>::from_request(request, state)
            .await
            .map_err(|e| ApiError::BadRequest(e.body_text()))?;
        Ok(req)
    } else if content_type.starts_with("multipart/form-data") {
        let multipart = Multipart::from_request(request, state)
            .await
            .map_err(|e| ApiError::BadRequest(e.body_text()))?;
        read_multipart(multipart).await
    } else if content_type.starts_with("application/x-www-form-urlencoded") {
        let Form(req) = Form::<InvestigationRequest>::from_request(request, state)
            .await
            .map_err(|e| ApiError::BadRequest(e.body_text()))?;
        Ok(req)
    } else {
        // No readable form: every field counts as missing.
        debug!(%content_type, "investigate body ignored");
        Ok(InvestigationRequest::default())
    }
}

async fn read_multipart(mut multipart: Multipart) -> Result<InvestigationRequest, ApiError> {
    let mut req = InvestigationRequest::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(e.body_text()))?
    {
        let name = field.name().unwrap_or_default().to_string();
        if name == STRUCTURE_FILE_FIELD {
            // Drained but never parsed.
            let bytes = field.bytes().await.map_err(|e| ApiError::BadRequest(e.body_text()))?;
            debug!(size = bytes.len(), "received structure file");
            req.has_structure_file = true;
            continue;
        }

        let value = field.text().await.map_err(|e| ApiError::BadRequest(e.body_text()))?;
        match name.as_str() {
            "diseaseName" => req.disease_name = Some(value),
            "targetProtein" => req.target_protein = Some(value),
            "sequence" => req.sequence = Some(value),
            _ => {}
        }
    }

    Ok(req)
}
