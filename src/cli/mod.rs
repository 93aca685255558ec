//! Command-line interface for `quantumautomate`.
//!
//! This module provides argument parsing using clap and hands the resolved
//! configuration to the bootstrap shell.

use anyhow::Result;
use clap::Parser;
use quantumautomate_core::App;

use crate::config::Config;
use crate::logging;
use crate::shell::{Application, Shell};

/// `quantumautomate` - run the automation once and exit.
#[derive(Parser, Debug)]
#[command(name = "quantumautomate")]
#[command(author, version, about = "Run the quantumautomate application", long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(
        long,
        env = "QUANTUMAUTOMATE_VERBOSE",
        value_parser = clap::builder::FalseyValueParser::new()
    )]
    pub verbose: bool,
}

impl Cli {
    /// Resolve the parsed arguments into the application configuration.
    #[must_use]
    pub const fn config(&self) -> Config {
        Config::new(self.verbose)
    }
}

/// Run the CLI.
///
/// Argument errors exit the process with a usage message before any
/// application is built.
///
/// # Errors
///
/// Returns an error if logging cannot be set up or the application fails.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.config();
    logging::init_logging(config.verbose())?;
    tracing::debug!(verbose = config.verbose(), "Resolved configuration");

    launch(config, App::new)
}

/// Build the application with `factory` and run it once.
///
/// # Errors
///
/// Returns the application's error unchanged.
pub fn launch<F, A>(config: Config, factory: F) -> Result<()>
where
    F: FnOnce(bool) -> A,
    A: Application,
{
    Shell::new(factory).execute(config)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::VERBOSE_ENV;
    use clap::{CommandFactory, FromArgMatches};
    use clap::error::ErrorKind;
    use quantumautomate_core::{AutomateError, FnStep, StepContext};

    fn parse(args: &[&str]) -> std::result::Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("quantumautomate").chain(args.iter().copied()))
    }

    /// Parse with the env fallback detached, so the outer environment
    /// cannot leak into the result.
    fn parse_without_env(args: &[&str]) -> Cli {
        let matches = Cli::command()
            .mut_arg("verbose", |a| a.env(None::<&str>))
            .try_get_matches_from(std::iter::once("quantumautomate").chain(args.iter().copied()))
            .unwrap();
        Cli::from_arg_matches(&matches).unwrap()
    }

    #[test]
    fn verbose_defaults_to_false() {
        assert!(!parse_without_env(&[]).config().verbose());
        assert!(parse_without_env(&["--verbose"]).config().verbose());
    }

    #[test]
    fn verbose_flag_sets_true() {
        assert!(parse(&["--verbose"]).unwrap().config().verbose());
    }

    #[test]
    fn unknown_flag_is_a_usage_error() {
        let err = parse(&["--bogus"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn verbose_takes_no_value() {
        assert!(parse(&["--verbose=yes"]).is_err());
    }

    #[test]
    fn verbose_env_name_matches_config() {
        let cmd = Cli::command();
        let arg = cmd
            .get_arguments()
            .find(|a| a.get_id() == "verbose")
            .unwrap();
        assert_eq!(arg.get_env().and_then(|e| e.to_str()), Some(VERBOSE_ENV));
    }

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn launch_passes_verbose_to_application() {
        crate::logging::init_test_logging();
        let mut observed = None;
        launch(Config::new(true), |verbose| {
            observed = Some(verbose);
            App::empty(verbose)
        })
        .unwrap();
        assert_eq!(observed, Some(true));
    }

    #[test]
    fn launch_reports_application_failure() {
        crate::logging::init_test_logging();
        let err = launch(Config::default(), |verbose| {
            App::empty(verbose).with_step(FnStep::new("storage", |_ctx: &StepContext| {
                Err(AutomateError::step_failed("storage", "disk unavailable"))
            }))
        })
        .unwrap_err();
        assert!(err.to_string().contains("disk unavailable"));
    }
}
