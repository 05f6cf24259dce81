//! Service layer
//!
//! Services wrap outbound side effects behind traits so the poller can be
//! exercised with in-memory doubles.

mod notifier;

pub use notifier::{Notifier, TelegramNotifier};
