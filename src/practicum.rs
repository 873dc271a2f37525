use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::time::Duration;

use crate::error::BotError;

const HTTP_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the homework-review API.
///
/// Fetches raw JSON only; shape validation is the `response` module's job.
#[derive(Debug, Clone)]
pub struct PracticumClient {
    http: Client,
    endpoint: String,
    token: String,
}

impl PracticumClient {
    pub fn new(endpoint: String, token: String) -> Self {
        Self {
            http: Client::builder()
                .timeout(HTTP_TIMEOUT)
                .build()
                .unwrap_or_else(|_| Client::new()),
            endpoint,
            token,
        }
    }

    /// GET homework statuses submitted after `from_date` (unix seconds).
    pub async fn homework_statuses(&self, from_date: i64) -> Result<Value, BotError> {
        let resp = self
            .http
            .get(&self.endpoint)
            .header("Authorization", format!("OAuth {}", self.token))
            .query(&[("from_date", from_date)])
            .send()
            .await
            .map_err(BotError::Transport)?;

        let status = resp.status();
        if status != StatusCode::OK {
            return Err(BotError::UnexpectedStatus { status });
        }

        resp.json::<Value>().await.map_err(BotError::InvalidJson)
    }
}
