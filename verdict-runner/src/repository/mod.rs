//! Repository layer
//!
//! Repositories are stateless HTTP clients that abstract communication
//! with the review API. They are trait-based so the poller can be tested
//! without a network.

mod homeworks;

pub use homeworks::{HomeworkRepository, HttpHomeworkRepository};
