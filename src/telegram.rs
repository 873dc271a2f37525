use reqwest::Client;
use serde::Serialize;
use std::time::Duration;

use crate::error::BotError;

const HTTP_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct TelegramClient {
    http: Client,
    base_url: String,
    token: String,
    chat_id: String,
}

#[derive(Debug, Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
}

impl TelegramClient {
    pub fn new(base_url: String, token: String, chat_id: String) -> Self {
        Self {
            http: Client::builder()
                .timeout(HTTP_TIMEOUT)
                .build()
                .unwrap_or_else(|_| Client::new()),
            base_url,
            token,
            chat_id,
        }
    }

    /// Send one text message to the fixed recipient chat.
    pub async fn send_message(&self, text: &str) -> Result<(), BotError> {
        let url = format!(
            "{}/bot{}/sendMessage",
            self.base_url.trim_end_matches('/'),
            self.token
        );
        let body = SendMessageRequest {
            chat_id: &self.chat_id,
            text,
        };

        let resp = self
            .http
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(BotError::SendTransport)?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(BotError::SendRejected { status, body });
        }
        Ok(())
    }
}
