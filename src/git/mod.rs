//! git
//!
//! Single doorway to the version-control client.
//!
//! # Architecture
//!
//! Every git operation in gitsed flows through the [`Vcs`] trait. No other
//! module spawns the `git` binary directly. This keeps error handling
//! uniform, lets the operator be exercised against a mock in tests, and
//! would allow the subprocess implementation to be swapped for a native
//! library binding without touching the operator.
//!
//! # Invariants
//!
//! - Every invocation carries an explicit working directory; the process
//!   cwd is never consulted or changed
//! - Failure messages name the failing subcommand only, never the full
//!   argument list (the clone URL embeds the access token)

mod interface;

pub use interface::{GitCli, GitError, Vcs};
