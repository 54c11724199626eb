mod config;
mod errors;
mod keywords;
mod models;
mod resume;
mod routes;
mod scan;
mod state;
mod store;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::{MemorySettingsStore, RedisSettingsStore, SettingsStore};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resumax API v{}", env!("CARGO_PKG_VERSION"));

    let store = build_store(&config)?;

    let state = AppState {
        store,
        config: config.clone(),
    };

    // The extension calls in from arbitrary page origins
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Redis-backed store when `REDIS_URL` is set, in-memory otherwise.
fn build_store(config: &Config) -> Result<Arc<dyn SettingsStore>> {
    match &config.redis_url {
        Some(url) => {
            let client = redis::Client::open(url.as_str())
                .with_context(|| format!("Invalid REDIS_URL '{url}'"))?;
            info!("Settings stored in Redis hash '{}'", config.settings_key);
            Ok(Arc::new(RedisSettingsStore::new(
                client,
                config.settings_key.clone(),
            )))
        }
        None => {
            warn!("REDIS_URL not set; settings are kept in memory and lost on restart");
            Ok(Arc::new(MemorySettingsStore::new()))
        }
    }
}
