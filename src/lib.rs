//! store-matrix - deployment matrix builder
//!
//! Reads a store registry and a group table, resolves a group to the stores
//! whose `type` is `target`, and emits the result as a CI job matrix.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{sink_for, PrepareUseCase};
pub use config::Settings;
pub use domain::entities::{DeploymentMatrix, GroupTable, MatrixEntry, StoreDescriptor, StoreRegistry};
pub use domain::services::build_matrix;
pub use domain::value_objects::StoreKind;
pub use error::{MatrixError, MatrixResult};
pub use infrastructure::{ConsoleSink, GithubOutputSink, YamlConfigSource};
