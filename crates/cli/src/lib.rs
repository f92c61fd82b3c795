//! Variant Eval CLI Library
//!
//! This library provides the core functionality for the variant evaluation
//! command-line interface: command handlers over the SDK, configuration
//! management, and output formatting.

pub mod commands;
pub mod config;
pub mod interactive;
pub mod output;

pub use config::Config;
pub use output::{JsonFormatter, OutputFormat, PlainFormatter, TableFormatter};

/// Re-export common types
pub use anyhow::{Context, Result};
