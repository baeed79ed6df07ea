//! ui
//!
//! Output utilities.
//!
//! # Design
//!
//! All human-readable output goes through this module so that the quiet
//! and debug flags are honored consistently. Progress and configuration
//! messages go to stdout; warnings and errors go to stderr.

pub mod output;

pub use output::Verbosity;
