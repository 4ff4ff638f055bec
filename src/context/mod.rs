// File: src/context/mod.rs
//! Narrowing candidate words by semantic relevance.

pub mod ollama;

use crate::error::ContextError;

pub use ollama::{OllamaContextFilter, DEFAULT_MODEL};

/// Filters a word list down to the words related to a free-text context.
/// The output is whatever the backend answers; it is not checked against `words`.
#[cfg_attr(test, mockall::automock)]
pub trait ContextFilter {
    fn filter(&self, words: &[String], context: &str) -> Result<Vec<String>, ContextError>;
}

/// Splits a model reply into words on the literal `", "` separator.
/// An empty reply yields a single empty entry.
pub fn parse_word_list(reply: &str) -> Vec<String> {
    reply.trim().split(", ").map(str::to_string).collect()
}
