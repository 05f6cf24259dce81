//! In-memory poll state

use verdict_core::HomeworkStatus;

/// State carried from one poll cycle to the next
///
/// Lives for the lifetime of the process and is never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PollState {
    /// `from_date` sent with every request
    ///
    /// Set once at startup and never advanced; duplicate notifications are
    /// suppressed by comparing statuses instead.
    pub last_timestamp: i64,

    /// Last status that was successfully announced
    pub last_status: Option<HomeworkStatus>,

    /// Text of the last error that was successfully reported
    pub last_error: Option<String>,
}

impl PollState {
    /// Creates a fresh state that scans from `timestamp`
    pub fn new(timestamp: i64) -> Self {
        Self {
            last_timestamp: timestamp,
            ..Self::default()
        }
    }
}
