//! Settings Store — a generic key-value store for extension settings.
//!
//! Mirrors the browser's sync storage: values are JSON, reads return only the
//! keys that exist. `AppState` holds an `Arc<dyn SettingsStore>`; Redis in
//! production, memory when no `REDIS_URL` is configured and in tests.

pub mod memory;
pub mod redis;

use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::Value;

use crate::errors::AppError;

pub use self::memory::MemorySettingsStore;
pub use self::redis::RedisSettingsStore;

#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// Returns the stored values for `keys`; absent keys are simply left out.
    async fn get(&self, keys: &[&str]) -> Result<HashMap<String, Value>, AppError>;

    async fn set(&self, values: HashMap<String, Value>) -> Result<(), AppError>;

    async fn remove(&self, keys: &[&str]) -> Result<(), AppError>;
}
