//! Homework review API

use reqwest::{Client, StatusCode};
use serde_json::Value;
use tracing::{error, info};

use crate::error::{ClientError, Result};

/// HTTP client for the homework status endpoint
#[derive(Debug, Clone)]
pub struct ReviewClient {
    /// Full endpoint URL
    endpoint: String,
    /// OAuth token sent in the `Authorization` header
    token: String,
    /// HTTP client instance
    client: Client,
}

impl ReviewClient {
    /// Create a new review API client
    ///
    /// # Arguments
    /// * `endpoint` - The status endpoint URL
    /// * `token` - The OAuth token of the student account
    pub fn new(endpoint: impl Into<String>, token: impl Into<String>) -> Self {
        Self::with_client(endpoint, token, Client::new())
    }

    /// Create a new review API client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    pub fn with_client(endpoint: impl Into<String>, token: impl Into<String>, client: Client) -> Self {
        Self {
            endpoint: endpoint.into(),
            token: token.into(),
            client,
        }
    }

    /// Get the endpoint URL
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch homework statuses changed since `from_date`
    ///
    /// # Arguments
    /// * `from_date` - Unix timestamp (seconds) to scan from
    ///
    /// # Returns
    /// The raw JSON body. It is not validated here; callers must check its shape.
    pub async fn fetch_statuses(&self, from_date: i64) -> Result<Value> {
        let params = [("from_date", from_date)];

        info!(
            "Requesting homework statuses from {} with params {:?}",
            self.endpoint, params
        );

        let response = self
            .client
            .get(&self.endpoint)
            .header("Authorization", format!("OAuth {}", self.token))
            .query(&params)
            .send()
            .await
            .map_err(|e| {
                let err = ClientError::unreachable(&self.endpoint, e);
                error!("{}", err);
                err
            })?;

        self.handle_response(response).await
    }

    /// Checks for a 200 status and decodes the body as JSON
    async fn handle_response(&self, response: reqwest::Response) -> Result<Value> {
        let status = response.status();

        if status != StatusCode::OK {
            let error_text = response.text().await.unwrap_or_default();
            let err = ClientError::api_error(&self.endpoint, status.as_u16(), error_text);
            error!("{}", err);
            return Err(err);
        }

        response.json().await.map_err(|e| {
            let err = ClientError::ParseError(e.to_string());
            error!("{}", err);
            err
        })
    }
}
