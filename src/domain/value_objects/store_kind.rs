//! Store kind value object

use std::fmt;

/// Literal `type` tag that marks a store as deployable.
pub const TARGET_KIND: &str = "target";

/// The `type` tag of a store descriptor.
///
/// Only `target` is meaningful to the matrix; every other tag (for example
/// `global`) is carried verbatim so it can be reported.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum StoreKind {
    Target,
    Other(String),
}

impl StoreKind {
    /// Exact, case-sensitive match against `target`.
    pub fn parse(tag: &str) -> Self {
        if tag == TARGET_KIND {
            StoreKind::Target
        } else {
            StoreKind::Other(tag.to_string())
        }
    }

    pub fn is_target(&self) -> bool {
        matches!(self, StoreKind::Target)
    }

    pub fn as_str(&self) -> &str {
        match self {
            StoreKind::Target => TARGET_KIND,
            StoreKind::Other(tag) => tag,
        }
    }
}

impl fmt::Display for StoreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
