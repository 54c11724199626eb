pub mod health;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::keywords::handlers as keywords;
use crate::resume::handlers as resume;
use crate::scan::handlers as scan;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Settings / resume
        .route("/api/v1/settings", get(resume::handle_get_settings))
        .route(
            "/api/v1/settings/highlight-color",
            put(resume::handle_set_highlight_color),
        )
        .route(
            "/api/v1/resume",
            put(resume::handle_save_resume).delete(resume::handle_clear_resume),
        )
        // Keyword pipeline
        .route("/api/v1/tokenize", post(keywords::handle_tokenize))
        .route("/api/v1/match", post(keywords::handle_match))
        .route("/api/v1/scan", post(scan::handle_scan))
        .with_state(state)
}
