//! Helpers for running the `quantumautomate` binary in integration tests.

use assert_cmd::Command;
use std::process::ExitStatus;
use tempfile::TempDir;

/// Captured result of one binary invocation.
pub struct QaOutput {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

/// Scratch working directory for a test run.
pub struct QaWorkspace {
    pub temp_dir: TempDir,
}

impl QaWorkspace {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("create temp dir"),
        }
    }
}

/// Base command with a clean environment and the workspace as cwd.
pub fn qa_command(workspace: &QaWorkspace) -> Command {
    let mut cmd = Command::cargo_bin("quantumautomate").expect("binary built");
    cmd.current_dir(workspace.temp_dir.path())
        .env_remove("RUST_LOG")
        .env_remove("QUANTUMAUTOMATE_VERBOSE");
    cmd
}

pub fn run_qa<I, S>(workspace: &QaWorkspace, args: I, label: &str) -> QaOutput
where
    I: IntoIterator<Item = S>,
    S: AsRef<std::ffi::OsStr>,
{
    let output = qa_command(workspace)
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("{label}: failed to run binary: {e}"));

    QaOutput {
        status: output.status,
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    }
}
