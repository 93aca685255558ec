//! The bootstrap shell: configure, construct, run once, report.
//!
//! Library code only returns errors. Turning a failure into a process exit
//! is left to `main`, via [`report_outcome`].

use crate::config::Config;
use crate::error::{Result, ShellError};
use quantumautomate_core::{App, AutomateError};
use std::fmt::Display;
use std::io::Write;
use tracing::debug;

/// Exit status for a failed run.
pub const EXIT_FAILURE: i32 = 1;

/// Something the shell can run exactly once.
pub trait Application {
    /// Run to completion.
    ///
    /// # Errors
    ///
    /// Any error is fatal to the shell.
    fn run(self) -> std::result::Result<(), AutomateError>;
}

impl Application for App {
    fn run(self) -> std::result::Result<(), AutomateError> {
        Self::run(self)
    }
}

/// Lifecycle of one shell invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Created,
    Configured,
    Running,
    Succeeded,
    Failed,
}

impl Phase {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Configured => "configured",
            Self::Running => "running",
            Self::Succeeded => "succeeded",
            Self::Failed => "failed",
        }
    }

    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Succeeded | Self::Failed)
    }

    /// Move to `next`, if that transition is allowed.
    ///
    /// # Errors
    ///
    /// Returns `ShellError::Lifecycle` for any out-of-order transition.
    pub fn advance(self, next: Self) -> Result<Self> {
        match (self, next) {
            (Self::Created, Self::Configured)
            | (Self::Configured, Self::Running)
            | (Self::Running, Self::Succeeded | Self::Failed) => Ok(next),
            _ => Err(ShellError::Lifecycle {
                from: self.as_str(),
                to: next.as_str(),
            }),
        }
    }
}

/// Drives a single application through its lifecycle.
pub struct Shell<F> {
    factory: Option<F>,
    phase: Phase,
}

impl<F, A> Shell<F>
where
    F: FnOnce(bool) -> A,
    A: Application,
{
    /// Create a shell that builds its application with `factory`.
    #[must_use]
    pub fn new(factory: F) -> Self {
        Self {
            factory: Some(factory),
            phase: Phase::Created,
        }
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Construct the application from `config` and run it.
    ///
    /// # Errors
    ///
    /// Returns the application's error unchanged, or a lifecycle error if
    /// this shell has already executed.
    pub fn execute(&mut self, config: Config) -> Result<()> {
        self.transition(Phase::Configured)?;
        let factory = self.factory.take().ok_or(ShellError::Lifecycle {
            from: self.phase.as_str(),
            to: Phase::Running.as_str(),
        })?;

        let app = factory(config.verbose());
        self.transition(Phase::Running)?;

        match app.run() {
            Ok(()) => self.transition(Phase::Succeeded),
            Err(e) => {
                self.transition(Phase::Failed)?;
                Err(e.into())
            }
        }
    }

    fn transition(&mut self, next: Phase) -> Result<()> {
        self.phase = self.phase.advance(next)?;
        debug!("Shell {}", self.phase.as_str());
        Ok(())
    }
}

/// Write a failure to `err_out` and pick the process exit status.
///
/// Returns 0 on success and [`EXIT_FAILURE`] otherwise.
pub fn report_outcome<E: Display>(
    result: &std::result::Result<(), E>,
    err_out: &mut impl Write,
) -> i32 {
    match result {
        Ok(()) => 0,
        Err(e) => {
            // If stderr itself is unwritable the exit status is all that is left.
            let _ = writeln!(err_out, "Error: {e}");
            EXIT_FAILURE
        }
    }
}
