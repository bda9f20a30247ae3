//! Domain Layer
//!
//! Pure business logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Store registry, group table, deployment matrix
//! - `value_objects/` - Store kind, config warnings
//! - `services/` - Matrix builder
//! - `ports/` - Interface definitions for infrastructure

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
