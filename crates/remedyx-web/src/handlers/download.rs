//! CSV download of stored investigation results.

use axum::{
    extract::{Path, State},
    http::header,
    response::IntoResponse,
};
use remedyx_common::ApiError;
use remedyx_research::export::export_csv;
use tracing::debug;

use crate::state::SharedState;

/// Header-safe file name: quotes, control and non-ASCII characters become `_`.
fn attachment_name(file_name: &str) -> String {
    file_name
        .chars()
        .map(|c| if c.is_ascii() && !c.is_ascii_control() && c != '"' && c != '\\' { c } else { '_' })
        .collect()
}

/// GET /api/download/{result_id} — stored result as a CSV attachment
pub async fn download_results(
    State(state): State<SharedState>,
    Path(result_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let result = state
        .store
        .get(&result_id)
        .await
        .ok_or_else(|| ApiError::NotFound("Result not found".to_string()))?;

    let csv = export_csv(&result).map_err(|e| ApiError::internal("Download", e))?;
    debug!(%result_id, bytes = csv.len(), "exporting result");

    let disposition = format!(
        "attachment; filename=\"{}\"",
        attachment_name(&result.export_file_name())
    );

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        csv,
    ))
}
