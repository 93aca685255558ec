//! Error types for `quantumautomate-core`.

use std::path::PathBuf;
use thiserror::Error;

/// Primary error type for application runs.
#[derive(Error, Debug)]
pub enum AutomateError {
    /// A step returned an error; the run stopped there.
    #[error("Step '{step}' failed: {reason}")]
    StepFailed { step: String, reason: String },

    /// The working directory is not usable.
    #[error("Preflight check failed for {}: {reason}", path.display())]
    Preflight { path: PathBuf, reason: String },

    /// File system I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AutomateError {
    #[must_use]
    pub fn step_failed(step: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::StepFailed {
            step: step.into(),
            reason: reason.into(),
        }
    }

    /// Attach a step name to an error raised while that step ran.
    ///
    /// Errors that already identify their origin pass through unchanged.
    #[must_use]
    pub fn in_step(self, step: &str) -> Self {
        match self {
            Self::StepFailed { .. } | Self::Preflight { .. } => self,
            Self::Io(err) => Self::step_failed(step, err.to_string()),
        }
    }
}

/// Result type using `AutomateError`.
pub type Result<T> = std::result::Result<T, AutomateError>;
