//! Resume settings — save (and re-derive tokens), clear, highlight color.

use std::collections::HashMap;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::info;

use crate::errors::AppError;
use crate::keywords::tokenizer::{tokenize, MinTokenLength, Variant};
use crate::models::settings::{
    CUSTOM_STOPWORDS, HIGHLIGHT_COLOR, MIN_TOKEN_LENGTH, RESUME_TEXT, RESUME_TOKENS,
};
use crate::store::SettingsStore;

#[derive(Debug, Default, Deserialize)]
pub struct SaveResumeRequest {
    #[serde(default)]
    pub resume_text: Option<String>,
    #[serde(default)]
    pub custom_stopwords: Option<String>,
    /// Number or numeric string; anything else means the default.
    #[serde(default)]
    pub min_token_length: Option<Value>,
}

#[derive(Debug, Serialize)]
pub struct SaveResumeResponse {
    pub resume_tokens: Vec<String>,
    pub min_token_length: MinTokenLength,
}

/// Tokenizes the resume and persists text, settings and tokens together.
pub async fn save_resume(
    store: &dyn SettingsStore,
    request: SaveResumeRequest,
) -> Result<SaveResumeResponse, AppError> {
    let resume_text = request.resume_text.unwrap_or_default();
    let custom_stopwords = request.custom_stopwords.unwrap_or_default();
    let min_token_length = request
        .min_token_length
        .as_ref()
        .map(MinTokenLength::from_value)
        .unwrap_or_default();

    let resume_tokens = tokenize(
        &resume_text,
        &custom_stopwords,
        min_token_length,
        Variant::Resume,
    );

    let encoded_tokens =
        serde_json::to_value(&resume_tokens).context("Failed to encode resume tokens")?;

    store
        .set(HashMap::from([
            (RESUME_TEXT.to_string(), Value::String(resume_text)),
            (CUSTOM_STOPWORDS.to_string(), Value::String(custom_stopwords)),
            (MIN_TOKEN_LENGTH.to_string(), json!(min_token_length.get())),
            (RESUME_TOKENS.to_string(), encoded_tokens),
        ]))
        .await?;

    info!(
        tokens = resume_tokens.len(),
        min_token_length = min_token_length.get(),
        "Resume saved"
    );

    Ok(SaveResumeResponse {
        resume_tokens,
        min_token_length,
    })
}

/// Forgets the resume. Token length and highlight color are kept.
pub async fn clear_resume(store: &dyn SettingsStore) -> Result<(), AppError> {
    store
        .remove(&[RESUME_TEXT, CUSTOM_STOPWORDS, RESUME_TOKENS])
        .await?;
    info!("Resume cleared");
    Ok(())
}

pub async fn set_highlight_color(store: &dyn SettingsStore, color: &str) -> Result<(), AppError> {
    let color = color.trim();
    if !is_valid_color(color) {
        return Err(AppError::Validation(format!(
            "Highlight color must look like #rgb or #rrggbb, got '{color}'"
        )));
    }

    store
        .set(HashMap::from([(
            HIGHLIGHT_COLOR.to_string(),
            Value::String(color.to_lowercase()),
        )]))
        .await?;
    info!(%color, "Highlight color updated");
    Ok(())
}

/// `#rgb` or `#rrggbb`, hex digits in either case.
pub fn is_valid_color(color: &str) -> bool {
    match color.strip_prefix('#') {
        Some(hex) => (hex.len() == 3 || hex.len() == 6) && hex.chars().all(|c| c.is_ascii_hexdigit()),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::settings::Settings;
    use crate::store::MemorySettingsStore;

    fn request(text: &str, stopwords: &str, min_len: Option<Value>) -> SaveResumeRequest {
        SaveResumeRequest {
            resume_text: Some(text.to_string()),
            custom_stopwords: Some(stopwords.to_string()),
            min_token_length: min_len,
        }
    }

    #[tokio::test]
    async fn test_save_persists_text_settings_and_tokens() {
        let store = MemorySettingsStore::new();
        let response = save_resume(
            &store,
            request("Rust services, Rust tooling, Kafka", "kafka", Some(json!("4"))),
        )
        .await
        .unwrap();

        assert_eq!(response.resume_tokens, vec!["rust", "service", "tooling"]);
        assert_eq!(response.min_token_length.get(), 4);

        let settings = Settings::load(&store, "#fff59d").await.unwrap();
        assert_eq!(settings.resume_text, "Rust services, Rust tooling, Kafka");
        assert_eq!(settings.custom_stopwords, "kafka");
        assert_eq!(settings.min_token_length.get(), 4);
        assert_eq!(settings.resume_tokens, response.resume_tokens);
    }

    #[tokio::test]
    async fn test_save_with_bad_min_length_uses_default() {
        let store = MemorySettingsStore::new();
        let response = save_resume(&store, request("go rust", "", Some(json!(-1))))
            .await
            .unwrap();
        assert_eq!(response.min_token_length.get(), 3);
        assert_eq!(response.resume_tokens, vec!["rust"]);
    }

    #[tokio::test]
    async fn test_save_with_missing_text_stores_empty_tokens() {
        let store = MemorySettingsStore::new();
        let response = save_resume(&store, SaveResumeRequest::default()).await.unwrap();
        assert!(response.resume_tokens.is_empty());
    }

    #[tokio::test]
    async fn test_clear_keeps_min_length_and_color() {
        let store = MemorySettingsStore::new();
        save_resume(&store, request("Rust", "", Some(json!(5)))).await.unwrap();
        set_highlight_color(&store, "#ABC").await.unwrap();

        clear_resume(&store).await.unwrap();

        let settings = Settings::load(&store, "#fff59d").await.unwrap();
        assert_eq!(settings.resume_text, "");
        assert!(settings.resume_tokens.is_empty());
        assert_eq!(settings.min_token_length.get(), 5);
        assert_eq!(settings.highlight_color, "#abc");
    }

    #[tokio::test]
    async fn test_invalid_color_is_rejected() {
        let store = MemorySettingsStore::new();
        let err = set_highlight_color(&store, "yellow").await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_color_validation() {
        assert!(is_valid_color("#fff59d"));
        assert!(is_valid_color("#FFF"));
        assert!(!is_valid_color("fff59d"));
        assert!(!is_valid_color("#fff5"));
        assert!(!is_valid_color("#ggg"));
    }
}
