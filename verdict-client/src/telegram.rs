//! Telegram Bot API

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ClientError, Result};

/// `sendMessage` request body
#[derive(Debug, Serialize)]
struct SendMessage<'a> {
    chat_id: &'a str,
    text: &'a str,
}

/// Common envelope of every Bot API reply
#[derive(Debug, Deserialize)]
struct ApiReply {
    ok: bool,
    #[serde(default)]
    description: Option<String>,
}

/// HTTP client for sending messages to a single Telegram chat
///
/// The bot token is part of the request path, so it is kept out of every
/// error and log line this client produces.
#[derive(Clone)]
pub struct TelegramClient {
    /// Bot API base URL (e.g., "https://api.telegram.org")
    api_url: String,
    token: String,
    chat_id: String,
    client: Client,
}

impl std::fmt::Debug for TelegramClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramClient")
            .field("api_url", &self.api_url)
            .field("chat_id", &self.chat_id)
            .finish_non_exhaustive()
    }
}

impl TelegramClient {
    /// Create a new Telegram client
    ///
    /// # Arguments
    /// * `api_url` - Bot API base URL
    /// * `token` - Bot token issued by BotFather
    /// * `chat_id` - Destination chat identifier
    pub fn new(
        api_url: impl Into<String>,
        token: impl Into<String>,
        chat_id: impl Into<String>,
    ) -> Self {
        Self::with_client(api_url, token, chat_id, Client::new())
    }

    /// Create a new Telegram client with a custom HTTP client
    pub fn with_client(
        api_url: impl Into<String>,
        token: impl Into<String>,
        chat_id: impl Into<String>,
        client: Client,
    ) -> Self {
        let api_url = api_url.into();
        Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            token: token.into(),
            chat_id: chat_id.into(),
            client,
        }
    }

    /// Get the Bot API base URL
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Send a plain-text message to the configured chat
    pub async fn send_message(&self, text: &str) -> Result<()> {
        let url = format!("{}/bot{}/sendMessage", self.api_url, self.token);

        debug!("Sending message to chat {}", self.chat_id);

        let response = self
            .client
            .post(&url)
            .json(&SendMessage {
                chat_id: &self.chat_id,
                text,
            })
            .send()
            .await
            .map_err(|e| ClientError::unreachable(&self.api_url, e.without_url()))?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        match serde_json::from_str::<ApiReply>(&body) {
            Ok(reply) if status.is_success() && reply.ok => Ok(()),
            Ok(reply) => Err(ClientError::Rejected {
                status: status.as_u16(),
                description: reply.description.unwrap_or_default(),
            }),
            Err(_) if !status.is_success() => {
                Err(ClientError::api_error(&self.api_url, status.as_u16(), body))
            }
            Err(e) => Err(ClientError::ParseError(e.to_string())),
        }
    }
}
