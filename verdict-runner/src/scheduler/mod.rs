//! Scheduler layer for the runner
//!
//! Drives the poll loop: fetch, compare against tracked state, notify, and
//! report failures and recoveries.

pub mod poller;
pub mod state;

pub use poller::StatusPoller;
pub use state::PollState;
