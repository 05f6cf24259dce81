//! Notification service
//!
//! Delivery failures never reach the caller: they are logged and reported
//! as `false`, which is the only signal the poller uses to decide whether
//! its tracked state may advance.

use async_trait::async_trait;
use tracing::{debug, error};
use verdict_client::TelegramClient;

/// Service trait for delivering plain-text notifications
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Sends a message, returning whether it was delivered
    async fn notify(&self, message: &str) -> bool;
}

/// Notifier that posts to a Telegram chat
pub struct TelegramNotifier {
    client: TelegramClient,
}

impl TelegramNotifier {
    /// Creates a new Telegram notifier
    pub fn new(client: TelegramClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn notify(&self, message: &str) -> bool {
        match self.client.send_message(message).await {
            Ok(()) => {
                debug!("Бот отправил сообщение \"{}\"", message);
                true
            }
            Err(e) => {
                error!("Сбой при отправке сообщения в Telegram: {}", e);
                false
            }
        }
    }
}
