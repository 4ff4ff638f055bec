//! Error types for the word maker.

use std::path::PathBuf;

/// Result type alias using [`WordMakerError`].
pub type Result<T> = std::result::Result<T, WordMakerError>;

/// Failures while loading the word or stopword corpus.
#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    #[error("cannot read corpus file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("corpus file {0} contains no words")]
    Empty(PathBuf),
}

/// Failures of the language-model context filter.
#[derive(Debug, thiserror::Error)]
pub enum ContextError {
    /// Transport failure, including timeouts.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Non-success status returned by the chat service.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The chat service answered with a body we could not decode.
    #[error("Malformed response: {0}")]
    MalformedResponse(#[from] serde_json::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Failures while talking to the user.
#[derive(Debug, thiserror::Error)]
pub enum PromptError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("input closed before the session finished")]
    InputClosed,
}

/// Umbrella error for the whole pipeline.
#[derive(Debug, thiserror::Error)]
pub enum WordMakerError {
    #[error("Corpus error: {0}")]
    Corpus(#[from] CorpusError),

    #[error("Context filter error: {0}")]
    Context(#[from] ContextError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Prompt error: {0}")]
    Prompt(#[from] PromptError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
