//! gitsed binary entry point.
//!
//! All the work happens in [`gitsed::cli::run`]; this file only decides
//! exit behavior. Every failure path inside the crate propagates a Result
//! up to here rather than terminating the process itself, so each step
//! stays testable in isolation.

use std::process::ExitCode;

fn main() -> ExitCode {
    match gitsed::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            gitsed::ui::output::error(format!("{:#}", err));
            ExitCode::FAILURE
        }
    }
}
