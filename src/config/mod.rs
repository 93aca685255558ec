//! Resolved configuration for a `quantumautomate` invocation.
//!
//! Built once from the command line (flag, then `QUANTUMAUTOMATE_VERBOSE`,
//! then the default) and never modified afterwards.

/// Environment variable consulted when `--verbose` is absent.
pub const VERBOSE_ENV: &str = "QUANTUMAUTOMATE_VERBOSE";

/// Configuration handed to the application constructor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Config {
    verbose: bool,
}

impl Config {
    #[must_use]
    pub const fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Whether the application should log verbosely.
    #[must_use]
    pub const fn verbose(self) -> bool {
        self.verbose
    }
}
