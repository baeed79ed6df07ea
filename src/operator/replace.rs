//! operator::replace
//!
//! The regex replace step: read one file, substitute every match of one
//! pattern, write the file back.
//!
//! The pattern is compiled before anything is written, so an invalid
//! pattern leaves the file untouched on disk. Likewise a read failure
//! (missing file, permission) aborts before any write.

use std::path::Path;

use regex::Regex;

use super::OperatorError;

/// Apply `pattern` -> `replacement` to every match in the file at `path`.
pub fn apply(path: &Path, pattern: &str, replacement: &str) -> Result<(), OperatorError> {
    let content = std::fs::read_to_string(path).map_err(|source| OperatorError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let re = Regex::new(pattern).map_err(|source| OperatorError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })?;

    let new_content = re.replace_all(&content, replacement);

    std::fs::write(path, new_content.as_bytes()).map_err(|source| OperatorError::FileWrite {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(())
}
