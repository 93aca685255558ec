//! `quantumautomate` - bootstrap shell library
//!
//! This crate provides the process entry logic for the `quantumautomate`
//! command: it turns command-line flags into a [`config::Config`], builds
//! the application from `quantumautomate-core` and runs it exactly once.
//!
//! # Architecture
//!
//! - [`cli`] - Command-line interface using clap
//! - [`config`] - Resolved, immutable configuration
//! - [`shell`] - Lifecycle driver and exit-status reporting
//! - [`error`] - Error types and handling
//! - [`logging`] - tracing subscriber setup

#![forbid(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod shell;

pub use error::{Result, ShellError};
pub use shell::{EXIT_FAILURE, report_outcome};

/// Run the CLI application.
///
/// This is the main entry point called from `main()`.
///
/// # Errors
///
/// Returns an error if the application run fails.
pub fn run() -> anyhow::Result<()> {
    cli::run()
}
