//! git::interface
//!
//! Subprocess-backed implementation of the version-control doorway.
//!
//! # Error Handling
//!
//! Git failures are categorized into typed variants:
//! - [`GitError::Spawn`]: the `git` binary could not be started
//! - [`GitError::Failed`]: the subprocess exited non-zero
//!
//! A failed invocation reports the subcommand name and the captured
//! stderr. The full argument list is never included in an error: the
//! clone URL carries embedded credentials.

use std::path::Path;
use std::process::Command;

use thiserror::Error;

/// Errors from git invocations.
#[derive(Debug, Error)]
pub enum GitError {
    /// The git binary could not be spawned.
    #[error("failed to run git {subcommand}: {source}")]
    Spawn {
        /// The subcommand that was being started
        subcommand: String,
        /// The underlying spawn failure
        #[source]
        source: std::io::Error,
    },

    /// The git subprocess exited non-zero.
    #[error("git {subcommand} failed: {stderr}")]
    Failed {
        /// The subcommand that failed, e.g. `clone`
        subcommand: String,
        /// Captured standard error from the subprocess
        stderr: String,
    },
}

/// Capability to run one version-control command in a given directory.
///
/// The operator depends on this trait rather than on [`GitCli`] directly,
/// so its sequencing logic can be tested without a git binary.
pub trait Vcs {
    /// Run `git <args>` with `workdir` as the working directory.
    ///
    /// Returns captured stdout on success.
    fn run(&self, args: &[&str], workdir: &Path) -> Result<String, GitError>;
}

/// The real git command-line client.
#[derive(Debug, Default)]
pub struct GitCli;

impl Vcs for GitCli {
    fn run(&self, args: &[&str], workdir: &Path) -> Result<String, GitError> {
        let subcommand = args.first().copied().unwrap_or("<none>").to_string();

        let output = Command::new("git")
            .args(args)
            .current_dir(workdir)
            .output()
            .map_err(|source| GitError::Spawn {
                subcommand: subcommand.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(GitError::Failed {
                subcommand,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }
}
