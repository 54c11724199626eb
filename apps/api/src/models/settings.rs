use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::errors::AppError;
use crate::keywords::tokenizer::MinTokenLength;
use crate::store::SettingsStore;

pub const RESUME_TEXT: &str = "resumeText";
pub const CUSTOM_STOPWORDS: &str = "customStopwords";
pub const MIN_TOKEN_LENGTH: &str = "minTokenLength";
pub const RESUME_TOKENS: &str = "resumeTokens";
pub const HIGHLIGHT_COLOR: &str = "highlightColor";

pub const ALL_KEYS: [&str; 5] = [
    RESUME_TEXT,
    CUSTOM_STOPWORDS,
    MIN_TOKEN_LENGTH,
    RESUME_TOKENS,
    HIGHLIGHT_COLOR,
];

/// Typed view over the settings store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub resume_text: String,
    pub custom_stopwords: String,
    pub min_token_length: MinTokenLength,
    pub resume_tokens: Vec<String>,
    pub highlight_color: String,
}

impl Settings {
    /// Reads every field; missing or malformed ones fall back to defaults.
    pub async fn load(store: &dyn SettingsStore, default_color: &str) -> Result<Self, AppError> {
        let values = store.get(&ALL_KEYS).await?;
        Ok(Self::from_values(&values, default_color))
    }

    pub fn from_values(values: &HashMap<String, Value>, default_color: &str) -> Self {
        Settings {
            resume_text: string_field(values, RESUME_TEXT).unwrap_or_default(),
            custom_stopwords: string_field(values, CUSTOM_STOPWORDS).unwrap_or_default(),
            min_token_length: values
                .get(MIN_TOKEN_LENGTH)
                .map(MinTokenLength::from_value)
                .unwrap_or_default(),
            resume_tokens: token_list_field(values),
            highlight_color: string_field(values, HIGHLIGHT_COLOR)
                .filter(|c| !c.is_empty())
                .unwrap_or_else(|| default_color.to_string()),
        }
    }
}

fn string_field(values: &HashMap<String, Value>, key: &str) -> Option<String> {
    match values.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Null => None,
        other => {
            warn!("Settings field '{key}' is not a string ({other}); ignoring");
            None
        }
    }
}

fn token_list_field(values: &HashMap<String, Value>) -> Vec<String> {
    match values.get(RESUME_TOKENS) {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| item.as_str().map(str::to_string))
            .collect(),
        Some(Value::Null) | None => Vec::new(),
        Some(other) => {
            warn!("Settings field '{RESUME_TOKENS}' is not a list ({other}); ignoring");
            Vec::new()
        }
    }
}
