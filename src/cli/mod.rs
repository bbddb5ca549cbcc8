//! CLI module for restcoll
//!
//! Provides command-line interface for:
//! - serve: Load configuration and serve collections over HTTP
//! - config: Print the effective configuration

mod args;
mod commands;
mod config;
mod errors;

pub use args::{Cli, Command};
pub use commands::{run, run_command, serve, show_config};
pub use config::{load_config, validate_config};
pub use errors::{CliError, CliErrorCode, CliResult};
