//! The application driven by the `quantumautomate` command.

use crate::error::Result;
use crate::step::{Preflight, Step, StepContext};
use tracing::{debug, info};

/// An application instance, built once and run once.
pub struct App {
    verbose: bool,
    steps: Vec<Box<dyn Step>>,
}

impl App {
    /// Build an application with the default steps.
    ///
    /// Construction performs no I/O; everything that can fail happens in
    /// [`App::run`].
    #[must_use]
    pub fn new(verbose: bool) -> Self {
        Self::empty(verbose).with_step(Preflight::current_dir())
    }

    /// Build an application with no steps registered.
    #[must_use]
    pub fn empty(verbose: bool) -> Self {
        Self {
            verbose,
            steps: Vec::new(),
        }
    }

    /// Append a step to the run.
    #[must_use]
    pub fn with_step(mut self, step: impl Step + 'static) -> Self {
        self.steps.push(Box::new(step));
        self
    }

    #[must_use]
    pub const fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Names of the registered steps, in run order.
    #[must_use]
    pub fn steps(&self) -> Vec<&str> {
        self.steps.iter().map(|step| step.name()).collect()
    }

    /// Run every step in order, stopping at the first failure.
    ///
    /// # Errors
    ///
    /// Returns the error of the first step that fails.
    pub fn run(self) -> Result<()> {
        let total = self.steps.len();
        debug!(total, verbose = self.verbose, "Starting run");

        for (index, mut step) in self.steps.into_iter().enumerate() {
            let ctx = StepContext {
                verbose: self.verbose,
                index,
                total,
            };
            if self.verbose {
                info!("[{}/{}] {}", index + 1, total, step.name());
            }
            step.execute(&ctx).map_err(|e| {
                debug!(step = step.name(), error = %e, "Step failed");
                e.in_step(step.name())
            })?;
        }

        debug!("Run finished");
        Ok(())
    }
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("verbose", &self.verbose)
            .field("steps", &self.steps())
            .finish()
    }
}
