//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `PrepareUseCase` - Load configuration, build the matrix, emit it

pub mod prepare;

pub use prepare::{sink_for, PrepareUseCase};
