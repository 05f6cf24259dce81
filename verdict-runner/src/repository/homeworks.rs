//! Homework status repository

use async_trait::async_trait;
use serde_json::Value;
use verdict_client::{ClientError, ReviewClient};

/// Source of raw homework status responses
#[async_trait]
pub trait HomeworkRepository: Send + Sync {
    /// Fetches the raw status response for changes since `from_date`
    ///
    /// The payload is returned unvalidated.
    async fn fetch_statuses(&self, from_date: i64) -> Result<Value, ClientError>;
}

/// HTTP implementation of HomeworkRepository backed by the review API
pub struct HttpHomeworkRepository {
    client: ReviewClient,
}

impl HttpHomeworkRepository {
    /// Creates a new HTTP homework repository
    pub fn new(client: ReviewClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HomeworkRepository for HttpHomeworkRepository {
    async fn fetch_statuses(&self, from_date: i64) -> Result<Value, ClientError> {
        self.client.fetch_statuses(from_date).await
    }
}
