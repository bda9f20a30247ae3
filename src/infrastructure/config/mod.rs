//! Config source implementations

mod yaml;

pub use yaml::{load_document, parse_document, YamlConfigSource};
