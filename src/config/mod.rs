//! Configuration module for store-matrix
//!
//! Settings hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (`GITHUB_OUTPUT`, `STORE_MATRIX_*`)
//! 3. Built-in defaults (lowest priority)

mod loader;
pub mod suggest;
mod types;

pub use loader::{apply_overrides, load, load_with_env, with_env_overrides};
pub use types::{
    Settings, SettingsOverrides, DEFAULT_GROUP, DEFAULT_GROUPS_PATH, DEFAULT_STORES_PATH,
    GROUPS_PATH_ENV, OUTPUT_ENV, STORES_PATH_ENV,
};
