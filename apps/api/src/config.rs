use anyhow::{Context, Result};

/// Default base URL for the chat-completion provider.
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

/// Application configuration loaded from environment variables.
///
/// Only PORT has to parse; everything else is optional so the service boots
/// without a database (in-memory store) or an API key (surfaces as an
/// upstream failure when the chat endpoint is invoked, never at startup).
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: Option<String>,
    pub openai_api_key: Option<String>,
    pub openai_base_url: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: optional_env("DATABASE_URL"),
            openai_api_key: optional_env("OPENAI_API_KEY"),
            openai_base_url: std::env::var("OPENAI_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_OPENAI_BASE_URL.to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Treats unset and empty the same, so `FOO=` in a .env does not count as set.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.is_empty())
}
