use std::sync::Arc;

use crate::config::Config;
use crate::store::SettingsStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable settings store. Redis when `REDIS_URL` is set, memory otherwise.
    pub store: Arc<dyn SettingsStore>,
    pub config: Config,
}
