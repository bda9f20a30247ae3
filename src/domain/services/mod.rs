//! Domain Services
//!
//! Pure business logic services that operate on domain entities.

mod matrix_builder;

pub use matrix_builder::{
    build_matrix, into_matrix, resolve_group, select_targets, DropReason, DroppedStore,
    MemberSelection,
};
