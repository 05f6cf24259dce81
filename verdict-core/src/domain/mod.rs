//! Core domain types
//!
//! Types shared between the HTTP clients and the polling runner.

pub mod homework;

pub use homework::{Homework, HomeworkStatus};
