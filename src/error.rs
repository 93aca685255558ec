//! Error types for the `quantumautomate` command.

use quantumautomate_core::AutomateError;
use thiserror::Error;

/// Errors surfaced by the bootstrap shell.
#[derive(Error, Debug)]
pub enum ShellError {
    /// The global log subscriber could not be installed.
    #[error("Failed to initialize logging: {0}")]
    Logging(String),

    /// A lifecycle transition was attempted out of order.
    #[error("Invalid lifecycle transition: {from} -> {to}")]
    Lifecycle {
        from: &'static str,
        to: &'static str,
    },

    /// The application run failed. Its message is passed through unchanged.
    #[error(transparent)]
    Run(#[from] AutomateError),
}

/// Result type using `ShellError`.
pub type Result<T> = std::result::Result<T, ShellError>;
