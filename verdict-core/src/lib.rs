//! Verdict Core
//!
//! Core types and validation for the homework status bot.
//!
//! This crate contains:
//! - Domain types: homework records and their review statuses
//! - Validation: shape checks for untrusted review API payloads

pub mod domain;
pub mod error;
pub mod validation;

pub use domain::{Homework, HomeworkStatus};
pub use error::SchemaError;
