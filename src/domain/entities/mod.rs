//! Domain Entities
//!
//! - `StoreRegistry` / `StoreDescriptor` - Known stores and their configuration
//! - `GroupTable` - Named batches of store identifiers
//! - `DeploymentMatrix` - The resolved CI matrix

mod group;
mod matrix;
mod store;

pub use group::GroupTable;
pub use matrix::{DeploymentMatrix, MatrixEntry};
pub use store::{StoreDescriptor, StoreRegistry};
