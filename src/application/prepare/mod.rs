//! Prepare Module
//!
//! Resolves a group to a deployment matrix and emits it for CI.

mod use_case;


pub use use_case::PrepareUseCase;

use crate::config::Settings;
use crate::domain::ports::MatrixSink;
use crate::infrastructure::{ConsoleSink, GithubOutputSink};

/// The sink configured by `settings`: the CI output file if set, else stdout.
pub fn sink_for(settings: &Settings) -> Box<dyn MatrixSink> {
    match &settings.output {
        Some(path) => Box::new(GithubOutputSink::new(path)),
        None => Box::new(ConsoleSink::stdout()),
    }
}
