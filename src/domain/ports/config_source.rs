//! ConfigSource port
//!
//! Supplies the store registry and the group table. Both are read fresh on
//! every call.

use crate::domain::entities::{GroupTable, StoreRegistry};
use crate::domain::value_objects::ConfigWarning;
use crate::error::MatrixResult;

/// A loaded document together with its non-fatal warnings.
#[derive(Debug, Clone, PartialEq)]
pub struct Loaded<T> {
    pub value: T,
    pub warnings: Vec<ConfigWarning>,
}

impl<T> Loaded<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            warnings: Vec::new(),
        }
    }
}

pub trait ConfigSource {
    fn load_registry(&self) -> MatrixResult<Loaded<StoreRegistry>>;
    fn load_groups(&self) -> MatrixResult<Loaded<GroupTable>>;
}
