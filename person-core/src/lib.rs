//! # person-core
//!
//! Core types shared by the repository and the CLI: the immutable [`Person`] record,
//! the [`CoreError`] type, and tracing initialization.

pub mod error;
pub mod logger;
pub mod types;

#[cfg(test)]
mod types_test;

pub use error::{CoreError, Result};
pub use logger::init_tracing;
pub use types::Person;
