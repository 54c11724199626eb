//! Tokenizer — turns free-form resume or job-posting text into a ranked,
//! deduplicated list of canonical keywords.
//!
//! Pipeline: collapse whitespace → lowercase → blank out everything outside
//! `[a-z0-9+#.-]` → split → length filter → stopword filter → strip one
//! trailing "s" → count → sort by count (stable) → truncate.
//!
//! The plural rule is deliberately naive: "analysis" becomes "analysi" and
//! "css" becomes "cs". Changing it would change persisted resume tokens.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::keywords::stopwords::StopwordSet;

pub const DEFAULT_MIN_TOKEN_LENGTH: usize = 3;

/// Which kind of text is being tokenized. Selects the built-in stopword list
/// and the size cap of the ranked output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    #[default]
    Resume,
    JobPosting,
}

impl Variant {
    pub fn max_tokens(self) -> usize {
        match self {
            Variant::Resume => 300,
            Variant::JobPosting => 400,
        }
    }
}

/// Minimum token length, always ≥ 1.
///
/// Every constructor falls back to [`DEFAULT_MIN_TOKEN_LENGTH`] for
/// non-positive or non-numeric input instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "usize", from = "Value")]
pub struct MinTokenLength(usize);

impl From<Value> for MinTokenLength {
    fn from(value: Value) -> Self {
        Self::from_value(&value)
    }
}

impl From<MinTokenLength> for usize {
    fn from(length: MinTokenLength) -> Self {
        length.0
    }
}

impl Default for MinTokenLength {
    fn default() -> Self {
        Self(DEFAULT_MIN_TOKEN_LENGTH)
    }
}

impl MinTokenLength {
    pub fn get(self) -> usize {
        self.0
    }

    pub fn from_i64(value: i64) -> Self {
        match usize::try_from(value) {
            Ok(n) if n >= 1 => Self(n),
            _ => Self::default(),
        }
    }

    /// Fractional lengths round up: a token of length `n` passes a minimum of
    /// `2.5` only when `n >= 3`.
    pub fn from_f64(value: f64) -> Self {
        if value.is_finite() && value >= 1.0 {
            Self(value.ceil() as usize)
        } else {
            Self::default()
        }
    }

    /// Parses a settings string such as `"4"` or `" 5 "`.
    pub fn parse(raw: &str) -> Self {
        raw.trim()
            .parse::<f64>()
            .map(Self::from_f64)
            .unwrap_or_default()
    }

    /// Accepts a JSON number or numeric string, as stored by the settings layer.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Number(n) => match n.as_i64() {
                Some(i) => Self::from_i64(i),
                None => n.as_f64().map(Self::from_f64).unwrap_or_default(),
            },
            Value::String(s) => Self::parse(s),
            _ => Self::default(),
        }
    }
}

/// A canonical token with the number of raw occurrences that collapsed into it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenFrequency {
    pub token: String,
    pub frequency: u32,
}

/// Ranked canonical tokens of `raw_text`, most frequent first.
pub fn tokenize(
    raw_text: &str,
    custom_stopwords_csv: &str,
    min_token_length: MinTokenLength,
    variant: Variant,
) -> Vec<String> {
    rank_tokens(raw_text, custom_stopwords_csv, min_token_length, variant)
        .into_iter()
        .map(|entry| entry.token)
        .collect()
}

/// Same ranking as [`tokenize`], keeping the per-token counts.
pub fn rank_tokens(
    raw_text: &str,
    custom_stopwords_csv: &str,
    min_token_length: MinTokenLength,
    variant: Variant,
) -> Vec<TokenFrequency> {
    let stopwords = StopwordSet::for_variant(variant, custom_stopwords_csv);
    let min_len = min_token_length.get();

    let text = normalize_whitespace(raw_text).to_lowercase();
    let cleaned: String = text
        .chars()
        .map(|c| if is_token_char(c) || c.is_whitespace() { c } else { ' ' })
        .collect();

    let mut index: HashMap<String, usize> = HashMap::new();
    let mut table: Vec<TokenFrequency> = Vec::new();

    let survivors = cleaned
        .split_whitespace()
        .filter(|raw| raw.chars().count() >= min_len)
        .filter(|raw| !stopwords.contains(raw));

    for raw in survivors {
        let canonical = canonicalize(raw);
        if canonical.is_empty() {
            continue;
        }
        match index.get(canonical) {
            Some(&slot) => table[slot].frequency += 1,
            None => {
                index.insert(canonical.to_string(), table.len());
                table.push(TokenFrequency {
                    token: canonical.to_string(),
                    frequency: 1,
                });
            }
        }
    }

    // sort_by is stable, so equal counts keep first-encounter order
    table.sort_by(|a, b| b.frequency.cmp(&a.frequency));
    table.truncate(variant.max_tokens());

    tracing::debug!(
        ?variant,
        distinct = table.len(),
        stopwords = stopwords.len(),
        "tokenized text"
    );

    table
}

/// Collapses every whitespace run, line breaks included, into one space.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Characters that may appear inside a token once the text is lowercased.
pub fn is_token_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '+' | '#' | '.' | '-')
}

/// Strips one trailing "s" (either case).
pub fn canonicalize(token: &str) -> &str {
    token
        .strip_suffix('s')
        .or_else(|| token.strip_suffix('S'))
        .unwrap_or(token)
}
