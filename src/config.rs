//! config
//!
//! Run configuration and validation.
//!
//! # Design
//!
//! A run is configured entirely from command-line flags. The resulting
//! [`RunConfig`] is immutable for the lifetime of the run and is never
//! persisted. Validation happens before the operator is constructed, so a
//! missing required field produces no side effects at all.
//!
//! The access token is part of the configuration but is deliberately
//! excluded from the resolved-configuration log.

use thiserror::Error;

use crate::ui::output;
use crate::ui::Verbosity;

/// Errors from configuration validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required flag was empty or missing.
    #[error("{flag} is required")]
    MissingRequired {
        /// The flag the user must supply, e.g. `--repo`
        flag: &'static str,
    },
}

/// Configuration for one run, collected from command-line flags.
///
/// Immutable once built. Empty `pattern` or `replacement` is legal (the
/// substitution step is skipped with a warning); empty `repo`, `branch`,
/// or `file` fails validation.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Repository URL or host/path, e.g. `github.com/acme/widgets.git`
    pub repo: String,
    /// Branch to check out after cloning
    pub branch: String,
    /// Path of the file to edit, relative to the repository root
    pub file: String,
    /// Regex pattern to find
    pub pattern: String,
    /// Replacement text for every match
    pub replacement: String,
    /// Access token embedded into the clone URL
    pub token: String,
    /// Username embedded into the clone URL alongside the token
    pub username: String,
    /// Commit message for the resulting commit
    pub message: String,
}

impl RunConfig {
    /// Validate required fields.
    ///
    /// Fails on an empty repository, branch, or file path. The token is
    /// required for authentication but is not checked here: an empty token
    /// is meaningful (the repository argument is used as-is, without
    /// embedded credentials).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.repo.is_empty() {
            return Err(ConfigError::MissingRequired { flag: "--repo" });
        }
        if self.branch.is_empty() {
            return Err(ConfigError::MissingRequired { flag: "--branch" });
        }
        if self.file.is_empty() {
            return Err(ConfigError::MissingRequired { flag: "--file" });
        }
        Ok(())
    }

    /// True when there is a substitution to perform.
    ///
    /// An empty pattern is not compiled and applied (it would match at
    /// every position); the replace step is skipped instead.
    pub fn has_substitution(&self) -> bool {
        !self.pattern.is_empty() && !self.replacement.is_empty()
    }

    /// Log the resolved configuration.
    ///
    /// The token is never logged.
    pub fn log(&self, verbosity: Verbosity) {
        if !self.has_substitution() {
            if self.pattern.is_empty() {
                output::warn(
                    "no regex pattern provided (--regEx); skipping substitution",
                    verbosity,
                );
            }
            if self.replacement.is_empty() {
                output::warn(
                    "no replacement value provided (--val); skipping substitution",
                    verbosity,
                );
            }
        }

        output::print("----------------------------------", verbosity);
        output::print(format!("{:<12}: {}", "repo", self.repo), verbosity);
        output::print(format!("{:<12}: {}", "branch", self.branch), verbosity);
        output::print(format!("{:<12}: {}", "file", self.file), verbosity);
        output::print(format!("{:<12}: {}", "pattern", self.pattern), verbosity);
        output::print(
            format!("{:<12}: {}", "replacement", self.replacement),
            verbosity,
        );
        output::print("----------------------------------", verbosity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_config() -> RunConfig {
        RunConfig {
            repo: "github.com/acme/widgets.git".to_string(),
            branch: "main".to_string(),
            file: "src/widget.rs".to_string(),
            pattern: r"// linter:\d+".to_string(),
            replacement: "// linter:9999".to_string(),
            token: "tok".to_string(),
            username: "git".to_string(),
            message: "update linter pragma".to_string(),
        }
    }

    #[test]
    fn full_config_is_valid() {
        assert!(full_config().validate().is_ok());
    }

    #[test]
    fn empty_repo_fails_validation() {
        let mut cfg = full_config();
        cfg.repo.clear();
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("--repo"));
    }

    #[test]
    fn empty_branch_fails_validation() {
        let mut cfg = full_config();
        cfg.branch.clear();
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("--branch"));
    }

    #[test]
    fn empty_file_fails_validation() {
        let mut cfg = full_config();
        cfg.file.clear();
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("--file"));
    }

    #[test]
    fn first_missing_field_wins() {
        let mut cfg = full_config();
        cfg.repo.clear();
        cfg.branch.clear();
        cfg.file.clear();
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("--repo"));
    }

    #[test]
    fn empty_pattern_is_valid_but_skips_substitution() {
        let mut cfg = full_config();
        cfg.pattern.clear();
        assert!(cfg.validate().is_ok());
        assert!(!cfg.has_substitution());
    }

    #[test]
    fn empty_replacement_skips_substitution() {
        let mut cfg = full_config();
        cfg.replacement.clear();
        assert!(cfg.validate().is_ok());
        assert!(!cfg.has_substitution());
    }

    #[test]
    fn empty_token_is_valid() {
        let mut cfg = full_config();
        cfg.token.clear();
        assert!(cfg.validate().is_ok());
    }
}
