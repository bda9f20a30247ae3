//! Deployment matrix entity
//!
//! The artifact handed to the CI system: resolved target stores paired with
//! their full descriptors.

use serde::Serialize;

use super::store::StoreDescriptor;
use crate::error::MatrixResult;

/// One row of the CI matrix.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatrixEntry {
    pub name: String,
    pub config: StoreDescriptor,
}

/// Resolved matrix for one group. Never empty once built.
#[derive(Debug, Clone, PartialEq)]
pub struct DeploymentMatrix {
    group: String,
    entries: Vec<MatrixEntry>,
}

impl DeploymentMatrix {
    pub(crate) fn new(group: impl Into<String>, entries: Vec<MatrixEntry>) -> Self {
        Self {
            group: group.into(),
            entries,
        }
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn entries(&self) -> &[MatrixEntry] {
        &self.entries
    }

    pub fn total(&self) -> usize {
        self.entries.len()
    }

    pub fn store_names(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.name.as_str()).collect()
    }

    /// Compact JSON array, as written to the CI output file.
    pub fn to_json(&self) -> MatrixResult<String> {
        Ok(serde_json::to_string(&self.entries)?)
    }

    /// Two-space indented JSON array for console display.
    pub fn to_json_pretty(&self) -> MatrixResult<String> {
        Ok(serde_json::to_string_pretty(&self.entries)?)
    }
}
