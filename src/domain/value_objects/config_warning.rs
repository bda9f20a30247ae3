//! Configuration warning value object.

use std::path::PathBuf;

/// Non-fatal configuration warning surfaced to CLI users.
///
/// Raised while loading a configuration document, e.g. for a top-level key
/// that neither document format recognizes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    /// The unknown or problematic key
    pub key: String,
    /// The file where the warning occurred
    pub file: PathBuf,
    /// The line number (1-indexed) if available
    pub line: Option<usize>,
    /// A suggested correction if available
    pub suggestion: Option<String>,
}

impl ConfigWarning {
    /// One-line human readable description
    pub fn message(&self) -> String {
        let location = match self.line {
            Some(line) => format!("{}:{}", self.file.display(), line),
            None => self.file.display().to_string(),
        };
        match &self.suggestion {
            Some(s) => format!("unknown key '{}' in {}. Did you mean '{}'?", self.key, location, s),
            None => format!("unknown key '{}' in {}", self.key, location),
        }
    }
}
