//! Error types for the Verdict clients

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when talking to the review API or Telegram
///
/// The `Display` text is user-facing: it ends up in Telegram notifications.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Request never produced a response (DNS, connect, timeout)
    #[error("Эндпоинт {endpoint} недоступен. Ошибка: {source}")]
    Unreachable {
        /// Endpoint the request was sent to
        endpoint: String,
        /// Underlying transport error
        source: reqwest::Error,
    },

    /// API answered with an unexpected status code
    #[error("Эндпоинт {endpoint} недоступен. Код ответа API: {status}")]
    ApiError {
        /// Endpoint the request was sent to
        endpoint: String,
        /// HTTP status code
        status: u16,
        /// Response body, if any
        message: String,
    },

    /// Telegram accepted the request but refused the message
    #[error("Telegram отклонил сообщение (код {status}): {description}")]
    Rejected {
        /// HTTP status code
        status: u16,
        /// `description` field of the Bot API reply
        description: String,
    },

    /// Failed to parse response
    #[error("Ошибка парсинга JSON ответа: {0}")]
    ParseError(String),
}

impl ClientError {
    /// Create a transport error for the given endpoint
    pub fn unreachable(endpoint: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Unreachable {
            endpoint: endpoint.into(),
            source,
        }
    }

    /// Create an API error from status code and message
    pub fn api_error(endpoint: impl Into<String>, status: u16, message: impl Into<String>) -> Self {
        Self::ApiError {
            endpoint: endpoint.into(),
            status,
            message: message.into(),
        }
    }
}
