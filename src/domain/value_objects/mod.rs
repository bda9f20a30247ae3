//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod config_warning;
mod store_kind;

pub use config_warning::ConfigWarning;
pub use store_kind::{StoreKind, TARGET_KIND};
