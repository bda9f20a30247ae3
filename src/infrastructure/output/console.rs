//! Console fallback sink
//!
//! Used when no CI output file is configured: prints the matrix as indented
//! JSON followed by the entry count.

use std::io::{self, Write};
use std::path::PathBuf;

use crate::domain::entities::DeploymentMatrix;
use crate::domain::ports::{Destination, MatrixSink};
use crate::error::{MatrixError, MatrixResult};

pub struct ConsoleSink {
    writer: Box<dyn Write>,
}

impl ConsoleSink {
    pub fn stdout() -> Self {
        Self {
            writer: Box::new(io::stdout()),
        }
    }

    /// Console sink writing to a custom writer (for testing)
    pub fn with_writer<W: Write + 'static>(writer: W) -> Self {
        Self {
            writer: Box::new(writer),
        }
    }
}

/// Text printed in local mode.
pub fn render_console(matrix: &DeploymentMatrix) -> MatrixResult<String> {
    Ok(format!(
        "Stores: {}\nTotal stores: {}\n",
        matrix.to_json_pretty()?,
        matrix.total()
    ))
}

impl MatrixSink for ConsoleSink {
    fn destination(&self) -> Destination {
        Destination::Console
    }

    fn emit(&mut self, matrix: &DeploymentMatrix) -> MatrixResult<()> {
        let text = render_console(matrix)?;
        self.writer
            .write_all(text.as_bytes())
            .and_then(|_| self.writer.flush())
            .map_err(|source| MatrixError::OutputWrite {
                path: PathBuf::from("<stdout>"),
                source,
            })
    }
}
