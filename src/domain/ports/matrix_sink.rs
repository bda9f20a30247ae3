//! MatrixSink port
//!
//! Destination of a built deployment matrix.

use std::path::PathBuf;

use crate::domain::entities::DeploymentMatrix;
use crate::error::MatrixResult;

/// Where a sink delivers the matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// CI output file, appended to
    File(PathBuf),
    /// Human readable console fallback
    Console,
}

pub trait MatrixSink {
    fn destination(&self) -> Destination;

    /// Write the matrix. Called exactly once per run.
    fn emit(&mut self, matrix: &DeploymentMatrix) -> MatrixResult<()>;
}
