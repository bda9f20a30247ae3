//! Prepare Use Case
//!
//! Orchestrates one run of the matrix builder:
//! 1. Load the store registry and group table
//! 2. Resolve the requested group
//! 3. Filter members down to target stores
//! 4. Build the matrix (fails when empty)
//! 5. Hand the matrix to the sink

use std::sync::Arc;

use crate::domain::entities::DeploymentMatrix;
use crate::domain::ports::{
    ConfigSource, Destination, MatrixSink, NoopEventSink, PrepareEvent, PrepareEventSink,
};
use crate::domain::services::{into_matrix, resolve_group, select_targets};
use crate::error::MatrixResult;

pub struct PrepareUseCase<C: ConfigSource> {
    config_source: C,
    events: Arc<dyn PrepareEventSink>,
}

impl<C: ConfigSource> PrepareUseCase<C> {
    pub fn new(config_source: C) -> Self {
        Self {
            config_source,
            events: Arc::new(NoopEventSink),
        }
    }

    pub fn with_events(mut self, events: Arc<dyn PrepareEventSink>) -> Self {
        self.events = events;
        self
    }

    /// Build the matrix for `group` and emit it through `sink`.
    ///
    /// Nothing reaches the sink unless every step succeeds.
    pub fn execute(&self, group: &str, sink: &mut dyn MatrixSink) -> MatrixResult<DeploymentMatrix> {
        let registry = self.config_source.load_registry()?;
        let groups = self.config_source.load_groups()?;
        for warning in registry.warnings.into_iter().chain(groups.warnings) {
            self.events.on_event(PrepareEvent::ConfigWarning(warning));
        }
        let (registry, groups) = (registry.value, groups.value);

        self.events.on_event(PrepareEvent::GroupSelected {
            group: group.to_string(),
        });

        let members = resolve_group(&groups, group)?;
        let selection = select_targets(&registry, members);
        for dropped in &selection.dropped {
            self.events.on_event(PrepareEvent::StoreDropped(dropped.clone()));
        }
        self.events.on_event(PrepareEvent::StoresResolved {
            stores: selection.names().into_iter().map(String::from).collect(),
        });

        let matrix = into_matrix(group, selection)?;
        tracing::info!(group, total = matrix.total(), "matrix resolved");

        match sink.destination() {
            Destination::Console => {
                self.events.on_event(PrepareEvent::LocalMode);
                sink.emit(&matrix)?;
            }
            Destination::File(path) => {
                sink.emit(&matrix)?;
                self.events.on_event(PrepareEvent::OutputWritten { path });
            }
        }

        Ok(matrix)
    }
}
