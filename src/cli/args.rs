//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Flags
//!
//! The string flags all default to empty rather than being marked required
//! in clap: the configuration validator owns the required-field errors, so
//! validation failures and step failures share one reporting path.

use clap::Parser;

use crate::config::RunConfig;

/// gitsed - clone a repository, regex-edit one file, commit, and push
#[derive(Parser, Debug)]
#[command(name = "gitsed")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Repository to clone, e.g. github.com/acme/widgets.git
    #[arg(short = 'r', long = "repo", default_value = "")]
    pub repo: String,

    /// Branch to check out
    #[arg(short = 'b', long = "branch", default_value = "")]
    pub branch: String,

    /// File to modify, relative to the repository root
    #[arg(short = 'f', long = "file", default_value = "")]
    pub file: String,

    /// Regex pattern to find
    #[arg(short = 'e', long = "regEx", default_value = "")]
    pub regex: String,

    /// Replacement value for every match
    #[arg(short = 'v', long = "val", default_value = "")]
    pub val: String,

    /// Access token for HTTPS authentication
    #[arg(short = 't', long = "token", default_value = "")]
    pub token: String,

    /// Username paired with the token in the clone URL
    #[arg(short = 'u', long = "user", default_value = "git")]
    pub user: String,

    /// Commit message
    #[arg(short = 'm', long = "message", default_value = "Apply regex substitution")]
    pub message: String,

    /// Minimal output
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }

    /// Build the run configuration from the parsed flags.
    pub fn into_config(self) -> RunConfig {
        RunConfig {
            repo: self.repo,
            branch: self.branch,
            file: self.file,
            pattern: self.regex,
            replacement: self.val,
            token: self.token,
            username: self.user,
            message: self.message,
        }
    }
}
