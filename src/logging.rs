//! Logging setup for the `quantumautomate` command.
//!
//! Log output goes to stderr so stdout stays free for program output.
//! `RUST_LOG` takes precedence over the level chosen from `--verbose`.

use crate::error::{Result, ShellError};
use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

const QUIET_FILTER: &str = "warn";
const VERBOSE_FILTER: &str = "warn,quantumautomate=debug,quantumautomate_core=debug";

/// Filter directives used when `RUST_LOG` is not set.
#[must_use]
pub const fn default_directives(verbose: bool) -> &'static str {
    if verbose { VERBOSE_FILTER } else { QUIET_FILTER }
}

/// Install the global subscriber.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_logging(verbose: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .try_init()
        .map_err(|e| ShellError::Logging(e.to_string()))
}

/// Install a subscriber for unit tests. Safe to call from every test.
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
