use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::scan::service::{scan_job, ScanReport, ScanRequest};
use crate::state::AppState;

/// POST /api/v1/scan
///
/// Compares job-posting text with the saved resume tokens and returns the
/// matched/missing split plus the highlight plan for the page.
pub async fn handle_scan(
    State(state): State<AppState>,
    Json(request): Json<ScanRequest>,
) -> Result<Json<ScanReport>, AppError> {
    let report = scan_job(
        state.store.as_ref(),
        &state.config.default_highlight_color,
        request,
    )
    .await?;
    Ok(Json(report))
}
