//! cli
//!
//! Command-line interface layer for gitsed.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments
//! - Validate the run configuration before any side effect
//! - Construct the operator and hand it the run
//!
//! The CLI layer is thin. All mutations happen inside the
//! [`crate::operator`], and all errors propagate back to `main.rs`, which
//! owns the exit decision.

pub mod args;

pub use args::Cli;

use anyhow::Result;

use crate::git::GitCli;
use crate::operator::Operator;
use crate::ui::output;
use crate::ui::Verbosity;

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();
    let verbosity = Verbosity::from_flags(cli.quiet, cli.debug);
    let cfg = cli.into_config();

    cfg.validate()?;
    cfg.log(verbosity);

    let operator = Operator::new(GitCli, &cfg.username, &cfg.token)?;
    output::debug(
        format!("workspace at {}", operator.workspace_path().display()),
        verbosity,
    );

    operator.execute(&cfg, verbosity)?;
    output::print("done", verbosity);
    Ok(())
}
