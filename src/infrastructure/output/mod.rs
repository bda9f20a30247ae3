//! Matrix sink implementations

mod console;
mod github;

pub use console::{render_console, ConsoleSink};
pub use github::{render_output_lines, GithubOutputSink, STORES_KEY, TOTAL_KEY};
