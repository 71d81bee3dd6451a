//! # person-cli
//!
//! CLI foundation for the `people` binary: argument parsing, config loading, and the
//! subcommand handlers that drive the person repository.

pub mod cli;
pub mod commands;
pub mod config;

pub use cli::{Cli, Commands};
pub use config::{AppConfig, OutputFormat};
