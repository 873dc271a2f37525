use anyhow::Result;
use chrono::Utc;
use log::{debug, error, info};
use serde_json::Value;
use tokio::time::sleep;

use crate::config::Config;
use crate::error::BotError;
use crate::practicum::PracticumClient;
use crate::response;
use crate::state::PollState;
use crate::telegram::TelegramClient;
use crate::verdict;

const ERROR_REPORT_PREFIX: &str = "Сбой в работе программы: ";

/// Validate one API response and compute the notification to send, if any.
/// Returns `None` when there are no new submissions or the status has not
/// changed since the last sent message.
fn next_notification(response: &Value, state: &PollState) -> Result<Option<String>, BotError> {
    let homeworks = response::check_response(response)?;
    let Some(first) = homeworks.first() else {
        debug!("No new homework submissions");
        return Ok(None);
    };

    let message = verdict::parse_status(first)?;
    if state.should_notify(&message) {
        Ok(Some(message))
    } else {
        debug!("Status unchanged, notification suppressed");
        Ok(None)
    }
}

/// One fetch → validate → extract → notify pass. The cutoff only advances
/// after the whole cycle succeeded, so a failed send is retried next cycle.
async fn run_cycle(
    practicum: &PracticumClient,
    telegram: &TelegramClient,
    state: &mut PollState,
) -> Result<(), BotError> {
    let response = practicum.homework_statuses(state.cutoff()).await?;

    if let Some(message) = next_notification(&response, state)? {
        telegram.send_message(&message).await?;
        info!("Sent status notification: {message}");
        state.record_sent(message);
    }

    state.advance_cutoff(response::current_date(&response));
    Ok(())
}

/// The driver loop. Every cycle error lands here: it is logged each time,
/// reported over Telegram once per distinct error text, and the loop sleeps
/// and goes again. Only an external kill stops it.
pub async fn run(
    cfg: &Config,
    practicum: &PracticumClient,
    telegram: &TelegramClient,
) -> Result<()> {
    let mut state = PollState::new(Utc::now().timestamp());
    info!("Polling every {}s", cfg.poll_interval.as_secs());

    loop {
        if let Err(err) = run_cycle(practicum, telegram, &mut state).await {
            error!("Poll cycle failed: {err}");

            let text = format!("{ERROR_REPORT_PREFIX}{err}");
            if state.should_report_error(&text) {
                // No handler above this one: a failed error report is only
                // logged, never escalated.
                if let Err(send_err) = telegram.send_message(&text).await {
                    error!("Failed to report error over telegram: {send_err}");
                }
                state.record_error(text);
            }
        }

        sleep(cfg.poll_interval).await;
    }
}
