//! CLI Interface: prompts, rendering and the interactive session
//!
//! # Components
//! - `args.rs`: command-line flags shared by both binaries
//! - `prompt.rs`: line-based questions with defaults
//! - `display.rs`: plain and typewriter rendering
//! - `session.rs`: the fixed prompt → generate → filter pipeline

pub mod args;
pub mod display;
pub mod prompt;
pub mod session;
