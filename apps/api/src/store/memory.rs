use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

use crate::errors::AppError;
use crate::store::SettingsStore;

/// Process-local store. Contents are lost on restart.
#[derive(Debug, Default)]
pub struct MemorySettingsStore {
    values: RwLock<HashMap<String, Value>>,
}

impl MemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SettingsStore for MemorySettingsStore {
    async fn get(&self, keys: &[&str]) -> Result<HashMap<String, Value>, AppError> {
        let values = self.values.read().await;
        Ok(keys
            .iter()
            .filter_map(|key| values.get(*key).map(|v| (key.to_string(), v.clone())))
            .collect())
    }

    async fn set(&self, values: HashMap<String, Value>) -> Result<(), AppError> {
        self.values.write().await.extend(values);
        Ok(())
    }

    async fn remove(&self, keys: &[&str]) -> Result<(), AppError> {
        let mut values = self.values.write().await;
        for key in keys {
            values.remove(*key);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_get_returns_only_present_keys() {
        let store = MemorySettingsStore::new();
        store
            .set(HashMap::from([("resumeText".to_string(), json!("Rust"))]))
            .await
            .unwrap();

        let got = store.get(&["resumeText", "customStopwords"]).await.unwrap();
        assert_eq!(got.len(), 1);
        assert_eq!(got["resumeText"], json!("Rust"));
    }

    #[tokio::test]
    async fn test_set_overwrites_and_remove_deletes() {
        let store = MemorySettingsStore::new();
        store
            .set(HashMap::from([("minTokenLength".to_string(), json!(3))]))
            .await
            .unwrap();
        store
            .set(HashMap::from([("minTokenLength".to_string(), json!(5))]))
            .await
            .unwrap();
        assert_eq!(store.get(&["minTokenLength"]).await.unwrap()["minTokenLength"], json!(5));

        store.remove(&["minTokenLength", "neverSet"]).await.unwrap();
        assert!(store.get(&["minTokenLength"]).await.unwrap().is_empty());
    }
}
