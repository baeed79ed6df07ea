//! gitsed - clone, regex-edit one file, commit, push
//!
//! gitsed is a single-binary tool for a narrow automation workflow: clone a
//! remote repository over token-authenticated HTTPS, check out a branch,
//! apply one regular-expression substitution to one named file, commit the
//! result, push it, and delete the working copy. It is a one-shot command,
//! not a service: every step blocks, nothing is retried, and any failure
//! aborts the run.
//!
//! # Architecture
//!
//! The codebase follows a small layered architecture:
//!
//! - [`cli`] - Command-line interface layer (parses args, sequences the run)
//! - [`config`] - Run configuration and validation
//! - [`git`] - Single doorway to the version-control client
//! - [`operator`] - Owns the ephemeral workspace and performs the steps
//! - [`ui`] - Output utilities
//!
//! # Correctness Invariants
//!
//! 1. Validation fails before any side effect is performed
//! 2. All git invocations carry an explicit working directory; the process
//!    cwd is never changed
//! 3. At most one temporary workspace exists per run, and it is removed
//!    exactly once, whether the run succeeds or fails
//! 4. The access token never appears in logs or error messages

pub mod cli;
pub mod config;
pub mod git;
pub mod operator;
pub mod ui;
