//! Errors raised inside a single poll cycle

use thiserror::Error;
use verdict_client::ClientError;
use verdict_core::SchemaError;

/// Everything that can go wrong while processing one poll cycle
///
/// The `Display` text is what gets reported to the chat and what repeated
/// failures are deduplicated on.
#[derive(Debug, Error)]
pub enum PollError {
    /// Review API unreachable, non-200, or not JSON
    #[error(transparent)]
    Fetch(#[from] ClientError),

    /// Payload or homework record has an unexpected shape
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// Anything else, e.g. a panic inside the cycle
    #[error("{0}")]
    Unexpected(String),
}

impl PollError {
    /// Builds an `Unexpected` error from a caught panic payload
    pub fn from_panic(payload: Box<dyn std::any::Any + Send>) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<&str>() {
            (*s).to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "unknown panic".to_string()
        };
        Self::Unexpected(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_transparent() {
        let err = PollError::from(SchemaError::ResponseNotObject);
        assert_eq!(err.to_string(), "Ответ API должен быть словарем");

        let err = PollError::from(ClientError::api_error("http://review.local/", 404, ""));
        assert_eq!(
            err.to_string(),
            "Эндпоинт http://review.local/ недоступен. Код ответа API: 404"
        );
    }

    #[test]
    fn test_from_panic_payloads() {
        let err = PollError::from_panic(Box::new("boom"));
        assert_eq!(err.to_string(), "boom");

        let err = PollError::from_panic(Box::new(String::from("kaboom")));
        assert_eq!(err.to_string(), "kaboom");

        let err = PollError::from_panic(Box::new(42_u8));
        assert_eq!(err.to_string(), "unknown panic");
    }
}
