//! Error types for store-matrix
//!
//! Library errors use `thiserror`; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for store-matrix operations
pub type MatrixResult<T> = Result<T, MatrixError>;

/// Main error type for matrix preparation
#[derive(Error, Debug)]
pub enum MatrixError {
    /// A configuration document could not be read from disk
    #[error("failed to read {path}: {source}")]
    DocumentRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A configuration document is not valid YAML or misses a required field
    #[error("invalid document {path}: {message}")]
    DocumentParse { path: PathBuf, message: String },

    /// The requested group is not declared in the group table
    #[error("Group not found: {group}")]
    GroupNotFound { group: String },

    /// Every member of the group was dropped during filtering
    #[error("No valid target stores found for group: {group}")]
    NoTargetStores { group: String },

    /// The output sink could not be opened or appended to
    #[error("failed to write output file {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON encoding of the matrix failed
    #[error("failed to encode matrix: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl MatrixError {
    /// Path of the file involved in the failure, if any
    pub fn file(&self) -> Option<&std::path::Path> {
        match self {
            MatrixError::DocumentRead { path, .. }
            | MatrixError::DocumentParse { path, .. }
            | MatrixError::OutputWrite { path, .. } => Some(path.as_path()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_error_display_group_not_found() {
        let err = MatrixError::GroupNotFound {
            group: "missing-group".to_string(),
        };
        assert_eq!(err.to_string(), "Group not found: missing-group");
    }

    #[test]
    fn test_error_display_no_target_stores() {
        let err = MatrixError::NoTargetStores {
            group: "g1".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "No valid target stores found for group: g1"
        );
    }

    #[test]
    fn test_error_display_document_parse() {
        let err = MatrixError::DocumentParse {
            path: PathBuf::from("config/stores.yml"),
            message: "missing field `stores`".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid document config/stores.yml: missing field `stores`"
        );
        assert_eq!(err.file(), Some(std::path::Path::new("config/stores.yml")));
    }

    #[test]
    fn test_error_file_absent_for_lookup_failures() {
        let err = MatrixError::GroupNotFound {
            group: "g".to_string(),
        };
        assert!(err.file().is_none());
    }
}
