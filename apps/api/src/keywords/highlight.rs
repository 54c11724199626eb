//! Highlight plan — what the page annotator needs to wrap missing keywords.
//!
//! Tokens are ordered longest first so that a short token never shadows a
//! longer one it is a prefix of ("java" vs "javascript"). Span search is
//! ASCII case-insensitive, word-bounded, and also accepts the token followed
//! by "s" to undo the tokenizer's plural stripping. When a longer candidate
//! is not word-bounded, a shorter one at the same position still counts.

use aho_corasick::{AhoCorasick, MatchKind};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// CSS class the content script applies to wrapped keywords.
pub const HIGHLIGHT_CLASS: &str = "resumax-missing";

pub const DEFAULT_HIGHLIGHT_COLOR: &str = "#fff59d";

/// One occurrence of a missing keyword in the scanned text. Offsets are byte
/// offsets into that text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightSpan {
    pub start: usize,
    pub end: usize,
    pub token: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightPlan {
    pub class_name: String,
    pub color: String,
    /// Missing tokens, longest first.
    pub tokens: Vec<String>,
    pub spans: Vec<HighlightSpan>,
}

impl HighlightPlan {
    pub fn build(missing: &[String], color: &str) -> Self {
        let mut tokens = missing.to_vec();
        tokens.sort_by(|a, b| b.len().cmp(&a.len()));

        Self {
            class_name: HIGHLIGHT_CLASS.to_string(),
            color: color.to_string(),
            tokens,
            spans: Vec::new(),
        }
    }

    /// Fills `spans` with the occurrences of this plan's tokens in `text`.
    pub fn with_spans(mut self, text: &str) -> Self {
        self.spans = find_spans(&self.tokens, text);
        self
    }
}

/// Non-overlapping, word-bounded occurrences of `tokens` in `text`, left to right.
pub fn find_spans(tokens: &[String], text: &str) -> Vec<HighlightSpan> {
    if tokens.is_empty() || text.is_empty() {
        return Vec::new();
    }

    // pattern 2i is token i, pattern 2i+1 is its plural
    let patterns: Vec<String> = tokens
        .iter()
        .flat_map(|token| [token.clone(), format!("{token}s")])
        .collect();

    // overlapping search requires the standard match kind
    let automaton = match AhoCorasick::builder()
        .ascii_case_insensitive(true)
        .match_kind(MatchKind::Standard)
        .build(&patterns)
    {
        Ok(automaton) => automaton,
        Err(e) => {
            warn!("Failed to build highlight matcher for {} tokens: {e}", tokens.len());
            return Vec::new();
        }
    };

    let mut candidates: Vec<(usize, usize, usize)> = automaton
        .find_overlapping_iter(text)
        .filter(|m| is_word_bounded(text, m.start(), m.end()))
        .map(|m| (m.start(), m.end(), m.pattern().as_usize() / 2))
        .collect();
    candidates.sort_by(|a, b| a.0.cmp(&b.0).then(b.1.cmp(&a.1)));

    let mut spans: Vec<HighlightSpan> = Vec::new();
    let mut covered_until = 0;
    for (start, end, token) in candidates {
        if start < covered_until {
            continue;
        }
        covered_until = end;
        spans.push(HighlightSpan {
            start,
            end,
            token: tokens[token].clone(),
        });
    }
    spans
}

fn is_word_bounded(text: &str, start: usize, end: usize) -> bool {
    let before = text[..start].chars().next_back();
    let after = text[end..].chars().next();
    !before.is_some_and(is_word_char) && !after.is_some_and(is_word_char)
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
