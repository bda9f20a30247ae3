//! Group table entity

use std::collections::BTreeMap;

use serde::Deserialize;

/// Named, ordered batches of store identifiers.
///
/// Members are kept exactly as declared: duplicates and identifiers that are
/// not in the store registry are allowed. A group declared with a null value
/// counts as undeclared.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GroupTable {
    groups: BTreeMap<String, Option<Vec<String>>>,
}

impl GroupTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, members: Vec<String>) {
        self.groups.insert(name.into(), Some(members));
    }

    /// Members of `name`, in declaration order.
    pub fn members(&self, name: &str) -> Option<&[String]> {
        self.groups.get(name)?.as_deref()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, Vec<String>)> for GroupTable {
    fn from_iter<I: IntoIterator<Item = (K, Vec<String>)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (name, members) in iter {
            table.insert(name, members);
        }
        table
    }
}
