use anyhow::{anyhow, Result};
use std::env;
use std::time::Duration;

const DEFAULT_PRACTICUM_API_URL: &str =
    "https://practicum.yandex.ru/api/user_api/homework_statuses/";
const DEFAULT_TELEGRAM_API_BASE_URL: &str = "https://api.telegram.org";
const DEFAULT_POLL_INTERVAL_SECS: u64 = 600;

#[derive(Debug, Clone)]
pub struct Config {
    pub practicum_token: String,
    pub telegram_token: String,
    pub telegram_chat_id: String,

    pub practicum_api_url: String,
    pub telegram_api_base_url: String,
    pub poll_interval: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_values(
            env::var("PRACTICUM_TOKEN").ok(),
            env::var("TELEGRAM_TOKEN").ok(),
            env::var("TELEGRAM_CHAT_ID").ok(),
            env::var("PRACTICUM_API_URL").ok(),
            env::var("TELEGRAM_API_BASE_URL").ok(),
            env::var("POLL_INTERVAL_SECS").ok(),
        )
    }

    /// Validation lives here so tests can exercise it without touching the
    /// process environment.
    fn from_values(
        practicum_token: Option<String>,
        telegram_token: Option<String>,
        telegram_chat_id: Option<String>,
        practicum_api_url: Option<String>,
        telegram_api_base_url: Option<String>,
        poll_interval_secs: Option<String>,
    ) -> Result<Self> {
        let practicum_token = required(practicum_token, "PRACTICUM_TOKEN")?;
        let telegram_token = required(telegram_token, "TELEGRAM_TOKEN")?;
        let telegram_chat_id = required(telegram_chat_id, "TELEGRAM_CHAT_ID")?;

        let practicum_api_url =
            practicum_api_url.unwrap_or_else(|| DEFAULT_PRACTICUM_API_URL.to_string());
        let telegram_api_base_url =
            telegram_api_base_url.unwrap_or_else(|| DEFAULT_TELEGRAM_API_BASE_URL.to_string());

        let poll_interval_secs = match poll_interval_secs {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .map_err(|_| anyhow!("Invalid POLL_INTERVAL_SECS: {raw} (expected integer)"))?,
            None => DEFAULT_POLL_INTERVAL_SECS,
        };

        Ok(Self {
            practicum_token,
            telegram_token,
            telegram_chat_id,
            practicum_api_url,
            telegram_api_base_url,
            poll_interval: Duration::from_secs(poll_interval_secs),
        })
    }
}

fn required(value: Option<String>, key: &str) -> Result<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(anyhow!("{key} must be set and non-empty")),
    }
}
