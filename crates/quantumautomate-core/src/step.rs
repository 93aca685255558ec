//! Units of work executed by an [`App`](crate::App) run.
//!
//! Steps run in registration order. The first failing step ends the run.

use crate::error::{AutomateError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Per-step view of the run, handed to [`Step::execute`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepContext {
    pub verbose: bool,
    /// Zero-based position of the step in the run.
    pub index: usize,
    pub total: usize,
}

/// A single unit of work in an application run.
pub trait Step {
    /// Name used in logs and error messages.
    fn name(&self) -> &str;

    /// Execute the step.
    ///
    /// # Errors
    ///
    /// Returns an error if the step cannot complete; the run stops.
    fn execute(&mut self, ctx: &StepContext) -> Result<()>;
}

/// Adapter turning a closure into a [`Step`].
pub struct FnStep<F> {
    name: String,
    func: F,
}

impl<F> FnStep<F>
where
    F: FnMut(&StepContext) -> Result<()>,
{
    #[must_use]
    pub fn new(name: impl Into<String>, func: F) -> Self {
        Self {
            name: name.into(),
            func,
        }
    }
}

impl<F> Step for FnStep<F>
where
    F: FnMut(&StepContext) -> Result<()>,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn execute(&mut self, ctx: &StepContext) -> Result<()> {
        (self.func)(ctx)
    }
}

/// Checks that the working directory exists and can be listed.
///
/// Without an explicit path the process's current directory is used,
/// resolved when the step executes rather than when it is built.
#[derive(Debug, Default)]
pub struct Preflight {
    path: Option<PathBuf>,
}

impl Preflight {
    #[must_use]
    pub fn current_dir() -> Self {
        Self { path: None }
    }

    #[must_use]
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    fn check(path: &Path) -> Result<()> {
        let metadata = fs::metadata(path).map_err(|e| AutomateError::Preflight {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        if !metadata.is_dir() {
            return Err(AutomateError::Preflight {
                path: path.to_path_buf(),
                reason: "not a directory".to_string(),
            });
        }

        fs::read_dir(path).map_err(|e| AutomateError::Preflight {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        Ok(())
    }
}

impl Step for Preflight {
    fn name(&self) -> &str {
        "preflight"
    }

    fn execute(&mut self, _ctx: &StepContext) -> Result<()> {
        let path = match &self.path {
            Some(path) => path.clone(),
            None => std::env::current_dir()?,
        };
        tracing::debug!("Checking working directory {}", path.display());
        Self::check(&path)
    }
}
