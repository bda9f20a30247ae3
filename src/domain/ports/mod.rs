//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod config_source;
pub mod matrix_sink;
pub mod prepare_events;

pub use config_source::{ConfigSource, Loaded};
pub use matrix_sink::{Destination, MatrixSink};
pub use prepare_events::{NoopEventSink, PrepareEvent, PrepareEventSink};
