//! CLI module for gradelens
//!
//! Provides command-line interface for:
//! - serve: HTTP data service
//! - dashboard: interactive terminal dashboard
//! - summary: one-shot JSON view battery

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command, DEFAULT_DATA_PATH};
pub use commands::{build_summary, dashboard, resolve_config, run, run_command, serve, summary, SummaryRequest};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{write_error, write_response};
