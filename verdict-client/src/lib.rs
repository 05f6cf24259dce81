//! Verdict HTTP Clients
//!
//! Thin, typed clients for the two remote services the bot talks to:
//! - [`ReviewClient`]: the homework review API (status polling)
//! - [`TelegramClient`]: the Telegram Bot API (`sendMessage`)
//!
//! # Example
//!
//! ```no_run
//! use verdict_client::{ReviewClient, TelegramClient};
//!
//! # async fn example() -> verdict_client::Result<()> {
//! let review = ReviewClient::new(
//!     "https://practicum.yandex.ru/api/user_api/homework_statuses/",
//!     "practicum-token",
//! );
//! let telegram = TelegramClient::new("https://api.telegram.org", "bot-token", "12345");
//!
//! let response = review.fetch_statuses(0).await?;
//! telegram.send_message(&response.to_string()).await?;
//! # Ok(())
//! # }
//! ```

pub mod error;
mod review;
mod telegram;

// Re-export commonly used types
pub use error::{ClientError, Result};
pub use review::ReviewClient;
pub use telegram::TelegramClient;

use reqwest::Client;
use std::time::Duration;

/// Builds a shared HTTP client with an optional request timeout
///
/// `None` leaves requests unbounded.
pub fn http_client(timeout: Option<Duration>) -> std::result::Result<Client, reqwest::Error> {
    let mut builder = Client::builder();
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_client_builds_with_and_without_timeout() {
        assert!(http_client(None).is_ok());
        assert!(http_client(Some(Duration::from_secs(5))).is_ok());
    }
}
