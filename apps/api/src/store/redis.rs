use std::collections::HashMap;

use ::redis::{AsyncCommands, Client as RedisClient};
use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, warn};

use crate::errors::AppError;
use crate::store::SettingsStore;

/// Settings kept in a single Redis hash; every field holds a JSON document.
#[derive(Clone)]
pub struct RedisSettingsStore {
    client: RedisClient,
    hash_key: String,
}

impl RedisSettingsStore {
    pub fn new(client: RedisClient, hash_key: impl Into<String>) -> Self {
        Self {
            client,
            hash_key: hash_key.into(),
        }
    }

    async fn connection(&self) -> Result<::redis::aio::MultiplexedConnection, AppError> {
        self.client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| AppError::Store(format!("Redis connection failed: {e}")))
    }
}

#[async_trait]
impl SettingsStore for RedisSettingsStore {
    async fn get(&self, keys: &[&str]) -> Result<HashMap<String, Value>, AppError> {
        if keys.is_empty() {
            return Ok(HashMap::new());
        }

        let mut con = self.connection().await?;
        let raw: Vec<Option<String>> = ::redis::cmd("HMGET")
            .arg(&self.hash_key)
            .arg(keys)
            .query_async(&mut con)
            .await
            .map_err(|e| AppError::Store(format!("HMGET {} failed: {e}", self.hash_key)))?;

        let values = decode_fields(keys, raw);

        debug!(hash = %self.hash_key, requested = keys.len(), found = values.len(), "settings read");
        Ok(values)
    }

    async fn set(&self, values: HashMap<String, Value>) -> Result<(), AppError> {
        if values.is_empty() {
            return Ok(());
        }

        let fields: Vec<(String, String)> = values
            .into_iter()
            .map(|(key, value)| (key, value.to_string()))
            .collect();

        let mut con = self.connection().await?;
        con.hset_multiple::<_, _, _, ()>(&self.hash_key, &fields)
            .await
            .map_err(|e| AppError::Store(format!("HSET {} failed: {e}", self.hash_key)))?;

        debug!(hash = %self.hash_key, written = fields.len(), "settings written");
        Ok(())
    }

    async fn remove(&self, keys: &[&str]) -> Result<(), AppError> {
        if keys.is_empty() {
            return Ok(());
        }

        let mut con = self.connection().await?;
        con.hdel::<_, _, ()>(&self.hash_key, keys)
            .await
            .map_err(|e| AppError::Store(format!("HDEL {} failed: {e}", self.hash_key)))?;

        debug!(hash = %self.hash_key, removed = keys.len(), "settings removed");
        Ok(())
    }
}

/// Pairs HMGET replies with their keys. A field that is not JSON (written by
/// hand with `redis-cli`, say) is passed on as a plain string so the typed
/// settings layer can apply its own fallback.
fn decode_fields(keys: &[&str], raw: Vec<Option<String>>) -> HashMap<String, Value> {
    let mut values = HashMap::new();
    for (key, field) in keys.iter().zip(raw) {
        let Some(field) = field else { continue };
        let value = serde_json::from_str::<Value>(&field).unwrap_or_else(|e| {
            warn!("Settings field '{key}' does not hold valid JSON ({e}); using it as a string");
            Value::String(field)
        });
        values.insert(key.to_string(), value);
    }
    values
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::settings::Settings;
    use serde_json::json;

    #[test]
    fn test_decode_fields_parses_json_and_skips_absent() {
        let values = decode_fields(
            &["resumeTokens", "minTokenLength", "customStopwords"],
            vec![Some(r#"["rust","go"]"#.to_string()), Some("4".to_string()), None],
        );
        assert_eq!(values.len(), 2);
        assert_eq!(values["resumeTokens"], json!(["rust", "go"]));
        assert_eq!(values["minTokenLength"], json!(4));
    }

    #[test]
    fn test_decode_fields_keeps_plain_text_as_string() {
        let values = decode_fields(
            &["resumeText", "resumeTokens"],
            vec![
                Some("Rust engineer".to_string()),
                Some("[not json".to_string()),
            ],
        );
        assert_eq!(values["resumeText"], json!("Rust engineer"));
        assert_eq!(values["resumeTokens"], json!("[not json"));

        let settings = Settings::from_values(&values, "#fff59d");
        assert_eq!(settings.resume_text, "Rust engineer");
        assert!(settings.resume_tokens.is_empty());
    }
}
