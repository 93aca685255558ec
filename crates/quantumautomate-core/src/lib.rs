//! `quantumautomate-core` - the application behind the `quantumautomate` command.
//!
//! The command builds an [`App`] from its resolved configuration and runs it
//! once. A run executes its registered [`Step`]s in order and stops at the
//! first failure.
//!
//! # Quick Start
//!
//! ```
//! use quantumautomate_core::{App, FnStep, StepContext};
//!
//! let app = App::empty(false).with_step(FnStep::new("hello", |_ctx: &StepContext| Ok(())));
//! app.run().unwrap();
//! ```

pub mod app;
pub mod error;
pub mod step;

pub use app::App;
pub use error::{AutomateError, Result};
pub use step::{FnStep, Preflight, Step, StepContext};
