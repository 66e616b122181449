//! LLM client — the single point of entry for chat-completion calls.
//!
//! Talks to any OpenAI-compatible `/chat/completions` endpoint. The base URL
//! and API key come from configuration; a missing key is only an error at
//! call time, never at construction, so the service boots without one.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// The model used for all completion calls.
/// Intentionally hardcoded to prevent accidental drift.
pub const MODEL: &str = "gpt-4o";

const CHAT_COMPLETIONS_PATH: &str = "/chat/completions";

/// One call per chat request, no retries; the deadline bounds how long a
/// dashboard visitor waits on a hung upstream.
const REQUEST_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(30);

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("no API key configured")]
    MissingApiKey,

    #[error("completion contained no choices")]
    EmptyChoices,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletion {
    pub choices: Vec<Choice>,
    pub usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: AssistantMessage,
}

#[derive(Debug, Deserialize)]
pub struct AssistantMessage {
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
}

impl ChatCompletion {
    /// The text of the first choice, if the model produced any.
    pub fn text(&self) -> Option<&str> {
        self.choices.first().and_then(|c| c.message.content.as_deref())
    }
}

#[derive(Debug, Deserialize)]
struct UpstreamError {
    error: UpstreamErrorBody,
}

#[derive(Debug, Deserialize)]
struct UpstreamErrorBody {
    message: String,
}

/// The single LLM client shared by all handlers.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: Option<String>,
    base_url: String,
}

impl LlmClient {
    pub fn new(api_key: Option<String>, base_url: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
            base_url,
        }
    }

    /// Issues a single-turn completion call: one system message, one user
    /// message, no conversation history, no retries.
    pub async fn complete(&self, system: &str, user: &str) -> Result<ChatCompletion, LlmError> {
        let api_key = self.api_key.as_deref().ok_or(LlmError::MissingApiKey)?;

        let request_body = ChatCompletionRequest {
            model: MODEL,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
        };

        let url = format!(
            "{}{}",
            self.base_url.trim_end_matches('/'),
            CHAT_COMPLETIONS_PATH
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // Surface the provider's error message when the body parses as one
            let message = serde_json::from_str::<UpstreamError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let completion: ChatCompletion = response.json().await?;

        if completion.choices.is_empty() {
            return Err(LlmError::EmptyChoices);
        }

        if let Some(usage) = &completion.usage {
            debug!(
                "Completion call succeeded: prompt_tokens={}, completion_tokens={}",
                usage.prompt_tokens, usage.completion_tokens
            );
        }

        Ok(completion)
    }
}
