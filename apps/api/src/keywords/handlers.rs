//! Axum route handlers exposing the raw keyword pipeline.

use std::collections::HashSet;

use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::keywords::matcher::{match_tokens, MatchResult};
use crate::keywords::tokenizer::{rank_tokens, MinTokenLength, TokenFrequency, Variant};

#[derive(Debug, Deserialize)]
pub struct TokenizeRequest {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub custom_stopwords: Option<String>,
    #[serde(default)]
    pub min_token_length: Option<Value>,
    #[serde(default)]
    pub variant: Variant,
}

#[derive(Debug, Serialize)]
pub struct TokenizeResponse {
    pub tokens: Vec<String>,
    pub frequencies: Vec<TokenFrequency>,
}

#[derive(Debug, Deserialize)]
pub struct MatchRequest {
    #[serde(default)]
    pub job_tokens: Vec<String>,
    #[serde(default)]
    pub resume_tokens: Vec<String>,
}

/// POST /api/v1/tokenize
///
/// Preview of what would be stored for a resume, or found on a posting.
pub async fn handle_tokenize(Json(request): Json<TokenizeRequest>) -> Json<TokenizeResponse> {
    let min_token_length = request
        .min_token_length
        .as_ref()
        .map(MinTokenLength::from_value)
        .unwrap_or_default();

    let frequencies = rank_tokens(
        request.text.as_deref().unwrap_or_default(),
        request.custom_stopwords.as_deref().unwrap_or_default(),
        min_token_length,
        request.variant,
    );
    let tokens = frequencies.iter().map(|f| f.token.clone()).collect();

    Json(TokenizeResponse {
        tokens,
        frequencies,
    })
}

/// POST /api/v1/match
pub async fn handle_match(Json(request): Json<MatchRequest>) -> Json<MatchResult> {
    let resume_tokens: HashSet<String> = request.resume_tokens.into_iter().collect();
    Json(match_tokens(&request.job_tokens, &resume_tokens))
}
