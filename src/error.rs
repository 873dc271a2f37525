use reqwest::StatusCode;
use thiserror::Error;

/// Everything that can go wrong inside one poll cycle.
///
/// Transport, HTTP-status, schema and verdict failures are all non-fatal:
/// the driver loop logs them, reports each distinct error text once over
/// Telegram, and keeps polling.
#[derive(Debug, Error)]
pub enum BotError {
    #[error("homework API request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("homework API returned HTTP {status}")]
    UnexpectedStatus { status: StatusCode },

    #[error("homework API returned a body that is not valid JSON: {0}")]
    InvalidJson(#[source] reqwest::Error),

    #[error("expected a JSON object at the top level of the API response")]
    NotAnObject,

    #[error("API response is missing the `{0}` key")]
    MissingKey(&'static str),

    #[error("`homeworks` in the API response is not a list")]
    HomeworksNotAList,

    #[error("`{0}` in the homework record is not a string")]
    NotAString(&'static str),

    #[error("unknown homework status: {0}")]
    UnknownStatus(String),

    #[error("telegram request failed: {0}")]
    SendTransport(#[source] reqwest::Error),

    #[error("telegram API rejected the message: HTTP {status} body={body}")]
    SendRejected { status: StatusCode, body: String },
}
