//! Status poller
//!
//! Polls the review API, announces status changes of the most recent
//! homework, and reports failures to the same chat. Every step runs
//! sequentially on one task; nothing else happens while a cycle or the
//! sleep between cycles is in progress.

use futures::FutureExt;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use tokio::time::{self, Duration};
use tracing::{debug, error, info};
use verdict_core::validation::{check_response, parse_homework, status_unchanged};

use crate::error::PollError;
use crate::repository::HomeworkRepository;
use crate::scheduler::state::PollState;
use crate::service::Notifier;

/// Poller that announces homework status changes
pub struct StatusPoller {
    poll_interval: Duration,
    repository: Arc<dyn HomeworkRepository>,
    notifier: Arc<dyn Notifier>,
}

impl StatusPoller {
    /// Creates a new status poller
    pub fn new(
        poll_interval: Duration,
        repository: Arc<dyn HomeworkRepository>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            poll_interval,
            repository,
            notifier,
        }
    }

    /// Starts the polling loop; never returns
    pub async fn run(&self, state: &mut PollState) -> anyhow::Result<()> {
        info!(
            "Starting status poller (interval: {:?}, from_date: {})",
            self.poll_interval, state.last_timestamp
        );

        loop {
            self.tick(state).await;
            time::sleep(self.poll_interval).await;
        }
    }

    /// Performs a single poll cycle, including error and recovery reporting
    pub async fn tick(&self, state: &mut PollState) {
        debug!("Polling for homework statuses");

        let outcome = AssertUnwindSafe(self.process_homeworks(state))
            .catch_unwind()
            .await
            .unwrap_or_else(|panic| Err(PollError::from_panic(panic)));

        let previous = state.last_error.take();
        state.last_error = match outcome {
            Ok(()) => self.handle_recovery(previous).await,
            Err(e) => self.handle_error(&e, previous).await,
        };
    }

    /// Fetches statuses and announces a change of the most recent homework
    ///
    /// The tracked status only advances once the announcement was delivered,
    /// so a failed send is retried on the next cycle.
    async fn process_homeworks(&self, state: &mut PollState) -> Result<(), PollError> {
        let response = self.repository.fetch_statuses(state.last_timestamp).await?;
        let homeworks = check_response(&response)?;

        let Some(homework) = homeworks.first() else {
            debug!("No new statuses in response");
            return Ok(());
        };

        if status_unchanged(homework, state.last_status) {
            debug!("Homework status unchanged");
            return Ok(());
        }

        let homework = parse_homework(homework)?;
        if self.notifier.notify(&homework.message()).await {
            info!(
                "Status of \"{}\" changed to {}",
                homework.name, homework.status
            );
            state.last_status = Some(homework.status);
        }

        Ok(())
    }

    /// Announces that a previously reported error went away
    ///
    /// Returns the error to keep tracking: `None` once the notice was sent.
    async fn handle_recovery(&self, previous: Option<String>) -> Option<String> {
        let previous = previous?;

        let message = format!("Ошибка исправлена: {previous}");
        if self.notifier.notify(&message).await {
            info!("{}", message);
            None
        } else {
            Some(previous)
        }
    }

    /// Logs a failed cycle and reports it unless it was already reported
    ///
    /// Returns the error text to track: the new one only if it was delivered.
    async fn handle_error(&self, err: &PollError, previous: Option<String>) -> Option<String> {
        let error_text = err.to_string();
        let message = format!("Сбой в работе программы: {error_text}");
        error!("{}", message);

        if previous.as_deref() != Some(error_text.as_str()) && self.notifier.notify(&message).await
        {
            return Some(error_text);
        }

        previous
    }
}
