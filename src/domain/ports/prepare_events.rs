//! Prepare Event Port
//!
//! Observable progress of a matrix preparation run, used for the console
//! trace.

use std::path::PathBuf;

use crate::domain::services::DroppedStore;
use crate::domain::value_objects::ConfigWarning;

#[derive(Debug, Clone, PartialEq)]
pub enum PrepareEvent {
    /// A configuration document loaded with warnings
    ConfigWarning(ConfigWarning),

    /// Both documents loaded; resolution of `group` begins
    GroupSelected { group: String },

    /// A group member was filtered out
    StoreDropped(DroppedStore),

    /// Filtering finished. May be empty, in which case the run fails next.
    StoresResolved { stores: Vec<String> },

    /// No output file configured; the matrix goes to the console
    LocalMode,

    /// Matrix appended to the CI output file
    OutputWritten { path: PathBuf },
}

pub trait PrepareEventSink {
    fn on_event(&self, event: PrepareEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl PrepareEventSink for NoopEventSink {
    fn on_event(&self, _event: PrepareEvent) {}
}
