// src/core/mod.rs

pub mod dictionary;
pub mod engine;
pub mod filter;
pub mod letters;
pub mod types;
