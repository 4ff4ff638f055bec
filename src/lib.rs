// src/lib.rs

pub mod cli;
pub mod config;
pub mod context;
pub mod core;
pub mod error;
pub mod logging;

pub use crate::context::{ContextFilter, OllamaContextFilter};
pub use crate::core::dictionary::Dictionary;
pub use crate::core::engine::WordEngine;
pub use crate::core::filter::generate_words;
pub use crate::core::letters::extract_letters;
pub use crate::core::types::{GenerationParams, LetterSet};
pub use crate::error::{Result, WordMakerError};
