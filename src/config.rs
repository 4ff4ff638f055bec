// File: src/config.rs
use crate::context::ollama::{DEFAULT_BASE_URL, DEFAULT_MODEL};
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

const APP_DIR: &str = "word-maker";
const CONFIG_FILE: &str = "config.json";

/// Runtime settings, read from a JSON file. Every field has a default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub corpus: CorpusConfig,
    pub llm: LlmConfig,
    pub display: DisplayConfig,
    /// Words excluded from every generation.
    pub blacklist: Vec<String>,
    /// Log to this file instead of stderr.
    pub log_path: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorpusConfig {
    pub words_path: PathBuf,
    pub stopwords_path: PathBuf,
}

impl Default for CorpusConfig {
    fn default() -> Self {
        // The layout NLTK's downloader uses for the `words` and `stopwords` corpora.
        let root = dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("nltk_data")
            .join("corpora");
        Self {
            words_path: root.join("words").join("en"),
            stopwords_path: root.join("stopwords").join("english"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    pub base_url: String,
    pub model: String,
    pub timeout_secs: u64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout_secs: 120,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Print character by character with a random delay.
    pub typewriter: bool,
    /// Upper bound of the per-character delay for headings.
    pub slow_delay_ms: u64,
    /// Upper bound of the per-character delay for model output.
    pub normal_delay_ms: u64,
    /// Upper bound of the per-character delay for everything else.
    pub fast_delay_ms: u64,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            typewriter: true,
            slow_delay_ms: 100,
            normal_delay_ms: 20,
            fast_delay_ms: 10,
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Loads an explicitly requested file, or the per-user default file when it exists.
    /// Only an explicit path that cannot be read is an error.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        match default_config_path() {
            Some(path) if path.is_file() => Self::load(&path),
            _ => {
                debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    let mut path = dirs::config_dir()?;
    path.push(APP_DIR);
    path.push(CONFIG_FILE);
    Some(path)
}
