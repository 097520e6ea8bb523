//! wordmark CLI library
//!
//! This library provides the command-line interface for highlighting search
//! terms in text with `wordmark-core`.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;
pub mod render;

pub use error::{CliError, CliResult};
