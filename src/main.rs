//! `quantumautomate` - command-line front door.
//!
//! Parses flags, runs the application once and turns a failure into a
//! non-zero exit with the error on stderr.

use quantumautomate::{report_outcome, run};

fn main() {
    let outcome = run();
    let code = report_outcome(&outcome, &mut std::io::stderr());
    if code != 0 {
        std::process::exit(code);
    }
}
