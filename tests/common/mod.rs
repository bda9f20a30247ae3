//! Common test utilities for store-matrix CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated project directory with config documents
//! - Fixtures: Reusable store registry and group table documents

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
