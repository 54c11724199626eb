//! Axum route handlers for resume settings.

use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::settings::Settings;
use crate::resume::service::{
    clear_resume, save_resume, set_highlight_color, SaveResumeRequest, SaveResumeResponse,
};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct HighlightColorRequest {
    pub color: String,
}

/// GET /api/v1/settings
pub async fn handle_get_settings(State(state): State<AppState>) -> Result<Json<Settings>, AppError> {
    let settings = Settings::load(state.store.as_ref(), &state.config.default_highlight_color).await?;
    Ok(Json(settings))
}

/// PUT /api/v1/resume
///
/// Stores the resume text and settings and returns the freshly derived tokens.
pub async fn handle_save_resume(
    State(state): State<AppState>,
    Json(request): Json<SaveResumeRequest>,
) -> Result<Json<SaveResumeResponse>, AppError> {
    let response = save_resume(state.store.as_ref(), request).await?;
    Ok(Json(response))
}

/// DELETE /api/v1/resume
pub async fn handle_clear_resume(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    clear_resume(state.store.as_ref()).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// PUT /api/v1/settings/highlight-color
pub async fn handle_set_highlight_color(
    State(state): State<AppState>,
    Json(request): Json<HighlightColorRequest>,
) -> Result<StatusCode, AppError> {
    set_highlight_color(state.store.as_ref(), &request.color).await?;
    Ok(StatusCode::NO_CONTENT)
}
