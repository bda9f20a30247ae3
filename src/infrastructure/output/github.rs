//! GitHub Actions output sink
//!
//! Appends `key=value` lines to the file named by `GITHUB_OUTPUT`.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use crate::domain::entities::DeploymentMatrix;
use crate::domain::ports::{Destination, MatrixSink};
use crate::error::{MatrixError, MatrixResult};

/// Output key holding the JSON matrix
pub const STORES_KEY: &str = "stores";
/// Output key holding the entry count
pub const TOTAL_KEY: &str = "total_stores";

#[derive(Debug, Clone)]
pub struct GithubOutputSink {
    path: PathBuf,
}

impl GithubOutputSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

/// The two output lines for `matrix`, newline terminated.
pub fn render_output_lines(matrix: &DeploymentMatrix) -> MatrixResult<String> {
    Ok(format!(
        "{}={}\n{}={}\n",
        STORES_KEY,
        matrix.to_json()?,
        TOTAL_KEY,
        matrix.total()
    ))
}

impl MatrixSink for GithubOutputSink {
    fn destination(&self) -> Destination {
        Destination::File(self.path.clone())
    }

    fn emit(&mut self, matrix: &DeploymentMatrix) -> MatrixResult<()> {
        let lines = render_output_lines(matrix)?;
        let write_err = |source: std::io::Error| MatrixError::OutputWrite {
            path: self.path.clone(),
            source,
        };

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(write_err)?;
        file.write_all(lines.as_bytes()).map_err(write_err)?;

        tracing::debug!(path = %self.path.display(), bytes = lines.len(), "appended matrix output");
        Ok(())
    }
}
