// File: src/context/ollama.rs
use crate::config::LlmConfig;
use crate::context::{parse_word_list, ContextFilter};
use crate::error::ContextError;
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

/// Model used when none is configured.
pub const DEFAULT_MODEL: &str = "mistral-nemo:latest";
pub const DEFAULT_BASE_URL: &str = "http://localhost:11434";

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    stream: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    message: ChatMessage,
}

/// Context filter backed by a single non-streaming Ollama `/api/chat` call.
pub struct OllamaContextFilter {
    client: Client,
    base_url: String,
    model: String,
}

impl OllamaContextFilter {
    /// Builds the client with the configured request timeout.
    pub fn new(config: &LlmConfig) -> Result<Self, ContextError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            model: config.model.clone(),
        })
    }

    fn chat_url(&self) -> String {
        format!("{}/api/chat", self.base_url.trim_end_matches('/'))
    }
}

impl ContextFilter for OllamaContextFilter {
    fn filter(&self, words: &[String], context: &str) -> Result<Vec<String>, ContextError> {
        let body = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: system_instruction(context),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: user_message(words),
                },
            ],
            stream: false,
        };

        debug!(model = %self.model, words = words.len(), "Querying context filter");
        let response = self.client.post(self.chat_url()).json(&body).send()?;
        let status = response.status();
        let text = response.text()?;

        if !status.is_success() {
            warn!(status = status.as_u16(), "Context filter request rejected");
            return Err(ContextError::Api {
                status: status.as_u16(),
                message: text,
            });
        }

        let reply: ChatResponse = serde_json::from_str(&text)?;
        Ok(parse_word_list(&reply.message.content))
    }
}

pub fn system_instruction(context: &str) -> String {
    format!(
        "The user will provide you with a list of words. Please filter and return the words that are most related to the following context: '{}'.",
        context
    )
}

pub fn user_message(words: &[String]) -> String {
    format!("Here is a list of words: {}.\n", words.join(", "))
}
