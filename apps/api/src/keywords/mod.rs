// Keyword pipeline: tokenizer, matcher and highlight plan.
// Everything here except the handlers is pure and synchronous.

pub mod handlers;
pub mod highlight;
pub mod matcher;
pub mod stopwords;
pub mod tokenizer;
