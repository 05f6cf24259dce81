//! Verdict Runner
//!
//! A single-process worker that watches the review status of the latest
//! submitted homework and relays every change to a Telegram chat.
//!
//! Architecture:
//! - Configuration: secrets and tunables from the environment (and `.env`)
//! - Repositories: HTTP communication with the review API
//! - Services: Telegram notifications that never fail the caller
//! - Scheduler: the poll loop and its in-memory state
//!
//! State is kept in memory only; a restart starts scanning from the current
//! time again.

mod config;
mod error;
mod logging;
mod repository;
mod scheduler;
mod service;

use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::info;
use verdict_client::{ReviewClient, TelegramClient};

use crate::config::Config;
use crate::repository::HttpHomeworkRepository;
use crate::scheduler::{PollState, StatusPoller};
use crate::service::TelegramNotifier;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging
    logging::init(&logging::log_file_path())?;

    info!("Starting Verdict Runner");

    // Load configuration
    let config = load_config()?;
    info!(
        "Loaded configuration: endpoint={}, chat_id={}, poll_interval={:?}, request_timeout={:?}",
        config.endpoint, config.telegram_chat_id, config.poll_interval, config.request_timeout
    );

    // Initialize clients
    let http = verdict_client::http_client(config.request_timeout)
        .context("Failed to build HTTP client")?;
    let review = ReviewClient::with_client(&config.endpoint, &config.practicum_token, http.clone());
    let telegram = TelegramClient::with_client(
        &config.telegram_api_url,
        &config.telegram_token,
        &config.telegram_chat_id,
        http,
    );

    let poller = StatusPoller::new(
        config.poll_interval,
        Arc::new(HttpHomeworkRepository::new(review)),
        Arc::new(TelegramNotifier::new(telegram)),
    );
    let mut state = PollState::new(chrono::Utc::now().timestamp());

    info!("Бот запущен и начал работу");

    poller.run(&mut state).await
}

/// Loads configuration, refusing to start without every required token
fn load_config() -> Result<Config> {
    let config = Config::from_env().context("Program stopped")?;
    config.validate()?;
    Ok(config)
}
