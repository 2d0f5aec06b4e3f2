use std::time::Duration;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
///
/// The OpenAI credential is intentionally absent: it is read from
/// `OPENAI_API_KEY` on every completion call, so a missing key fails the
/// request instead of the startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub rust_log: String,
    /// Landing page served verbatim at `GET /`.
    pub index_html: String,
    pub max_upload_bytes: usize,
    pub openai_base_url: String,
    pub llm_timeout: Option<Duration>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            host: env_or("HOST", "0.0.0.0"),
            port: env_or("PORT", "3000")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
            index_html: env_or("INDEX_HTML", "static/index.html"),
            max_upload_bytes: env_or("MAX_UPLOAD_BYTES", "16777216")
                .parse::<usize>()
                .context("MAX_UPLOAD_BYTES must be a byte count")?,
            openai_base_url: env_or("OPENAI_BASE_URL", crate::llm_client::DEFAULT_BASE_URL),
            llm_timeout: std::env::var("LLM_TIMEOUT_SECS")
                .ok()
                .map(|v| v.parse::<u64>().map(Duration::from_secs))
                .transpose()
                .context("LLM_TIMEOUT_SECS must be a whole number of seconds")?,
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
