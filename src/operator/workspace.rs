//! operator::workspace
//!
//! Ownership of the ephemeral working directory.
//!
//! One workspace exists per run. It is created when the operator is
//! constructed and removed exactly once when the run ends, whether or not
//! the intervening steps succeeded.

use std::path::Path;

use tempfile::TempDir;

use super::OperatorError;

/// A uniquely named temporary directory holding one clone.
#[derive(Debug)]
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    /// Create a fresh workspace directory.
    pub fn acquire() -> Result<Self, OperatorError> {
        let dir = TempDir::with_prefix("gitsed-").map_err(|source| OperatorError::Workspace {
            operation: "create",
            source,
        })?;
        Ok(Self { dir })
    }

    /// Path of the workspace directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Remove the workspace directory.
    ///
    /// Consumes the workspace so removal can happen at most once. A
    /// removal failure is surfaced rather than swallowed.
    pub fn release(self) -> Result<(), OperatorError> {
        self.dir.close().map_err(|source| OperatorError::Workspace {
            operation: "remove",
            source,
        })
    }
}
