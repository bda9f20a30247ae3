//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `config/` - YAML document loading
//! - `output/` - CI output file and console sinks

pub mod config;
pub mod output;

pub use config::YamlConfigSource;
pub use output::{ConsoleSink, GithubOutputSink};
