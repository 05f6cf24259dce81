//! Runner configuration
//!
//! Defines the secrets and tunables of the status bot. Everything is read
//! once at startup from environment variables.

use std::time::Duration;
use thiserror::Error;
use tracing::error;

/// Review API OAuth token
pub const PRACTICUM_TOKEN: &str = "PRACTICUM_TOKEN";
/// Telegram bot token
pub const TELEGRAM_TOKEN: &str = "TELEGRAM_TOKEN";
/// Destination chat identifier
pub const TELEGRAM_CHAT_ID: &str = "TELEGRAM_CHAT_ID";

/// Variables that must be set and non-empty before the bot starts
pub const REQUIRED_TOKENS: [&str; 3] = [PRACTICUM_TOKEN, TELEGRAM_TOKEN, TELEGRAM_CHAT_ID];

pub const DEFAULT_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";
pub const DEFAULT_TELEGRAM_API_URL: &str = "https://api.telegram.org";
pub const DEFAULT_RETRY_PERIOD: Duration = Duration::from_secs(600);
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration errors; all of them are fatal
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Отсутствуют обязательные токены: {}", .0.join(", "))]
    MissingTokens(Vec<&'static str>),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Runner configuration
#[derive(Clone)]
pub struct Config {
    /// OAuth token for the review API
    pub practicum_token: String,

    /// Telegram bot token
    pub telegram_token: String,

    /// Chat that receives notifications
    pub telegram_chat_id: String,

    /// Homework status endpoint
    pub endpoint: String,

    /// Telegram Bot API base URL
    pub telegram_api_url: String,

    /// Delay between two poll cycles
    pub poll_interval: Duration,

    /// Timeout applied to every outbound HTTP request, `None` for unbounded
    pub request_timeout: Option<Duration>,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("telegram_chat_id", &self.telegram_chat_id)
            .field("endpoint", &self.endpoint)
            .field("telegram_api_url", &self.telegram_api_url)
            .field("poll_interval", &self.poll_interval)
            .field("request_timeout", &self.request_timeout)
            .finish_non_exhaustive()
    }
}

impl Config {
    /// Creates a new configuration with defaults
    pub fn new(
        practicum_token: String,
        telegram_token: String,
        telegram_chat_id: String,
    ) -> Self {
        Self {
            practicum_token,
            telegram_token,
            telegram_chat_id,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            telegram_api_url: DEFAULT_TELEGRAM_API_URL.to_string(),
            poll_interval: DEFAULT_RETRY_PERIOD,
            request_timeout: Some(DEFAULT_REQUEST_TIMEOUT),
        }
    }

    /// Creates configuration from environment variables
    ///
    /// Expected environment variables:
    /// - PRACTICUM_TOKEN (required)
    /// - TELEGRAM_TOKEN (required)
    /// - TELEGRAM_CHAT_ID (required)
    /// - RETRY_PERIOD (optional, seconds, default: 600)
    /// - PRACTICUM_ENDPOINT (optional)
    /// - TELEGRAM_API_URL (optional, default: https://api.telegram.org)
    /// - REQUEST_TIMEOUT (optional, seconds, default: 30, 0 disables)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(env_var)
    }

    /// Creates configuration from an arbitrary variable lookup
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |name: &str| lookup(name).filter(|value| !value.is_empty());

        check_tokens(&lookup)?;

        let token = |name: &str| lookup(name).unwrap_or_default();
        let mut config = Self::new(
            token(PRACTICUM_TOKEN),
            token(TELEGRAM_TOKEN),
            token(TELEGRAM_CHAT_ID),
        );

        if let Some(endpoint) = lookup("PRACTICUM_ENDPOINT") {
            config.endpoint = endpoint;
        }

        if let Some(api_url) = lookup("TELEGRAM_API_URL") {
            config.telegram_api_url = api_url;
        }

        if let Some(period) = parse_secs(&lookup, "RETRY_PERIOD")? {
            config.poll_interval = Duration::from_secs(period);
        }

        if let Some(timeout) = parse_secs(&lookup, "REQUEST_TIMEOUT")? {
            config.request_timeout = (timeout > 0).then(|| Duration::from_secs(timeout));
        }

        Ok(config)
    }

    /// Validates the configuration
    ///
    /// Token presence is checked while loading, see [`check_tokens`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, url) in [
            ("endpoint", &self.endpoint),
            ("telegram_api_url", &self.telegram_api_url),
        ] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ConfigError::Invalid(format!(
                    "{name} must start with http:// or https://"
                )));
            }
        }

        if self.poll_interval.is_zero() {
            return Err(ConfigError::Invalid(
                "poll_interval must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

/// Reads a variable from the process environment
pub fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

/// Names of required tokens that are unset or empty
pub fn missing_tokens<F>(lookup: F) -> Vec<&'static str>
where
    F: Fn(&str) -> Option<String>,
{
    REQUIRED_TOKENS
        .into_iter()
        .filter(|name| lookup(*name).is_none_or(|value| value.is_empty()))
        .collect()
}

/// Checks that every required token is available
///
/// Logs the missing names and fails if any is absent.
pub fn check_tokens<F>(lookup: F) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let missing = missing_tokens(lookup);
    if missing.is_empty() {
        return Ok(());
    }

    let err = ConfigError::MissingTokens(missing);
    error!("CRITICAL: {}", err);
    Err(err)
}

/// Parses an optional whole number of seconds
fn parse_secs<F>(lookup: F, name: &str) -> Result<Option<u64>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .map(|value| {
            value.trim().parse::<u64>().map_err(|_| {
                ConfigError::Invalid(format!(
                    "{name} must be a whole number of seconds, got {value:?}"
                ))
            })
        })
        .transpose()
}
