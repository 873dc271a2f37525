mod config;
mod error;
mod poller;
mod practicum;
mod response;
mod state;
mod telegram;
mod verdict;

use anyhow::Result;
use config::Config;
use dotenv::dotenv;
use log::{error, info};
use practicum::PracticumClient;
use telegram::TelegramClient;

// Single sequential loop: one thread is all there is to schedule.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenv().ok();
    env_logger::init();

    info!("Starting homework status bot...");
    let cfg = Config::from_env()?;
    info!(
        "Config: endpoint={} poll_interval={}s",
        cfg.practicum_api_url,
        cfg.poll_interval.as_secs()
    );

    let practicum = PracticumClient::new(
        cfg.practicum_api_url.clone(),
        cfg.practicum_token.clone(),
    );
    let telegram = TelegramClient::new(
        cfg.telegram_api_base_url.clone(),
        cfg.telegram_token.clone(),
        cfg.telegram_chat_id.clone(),
    );

    if let Err(e) = telegram
        .send_message("Бот запущен и следит за статусом домашней работы.")
        .await
    {
        error!("Startup notification failed: {e}");
    }

    poller::run(&cfg, &practicum, &telegram).await
}
