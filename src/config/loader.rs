//! Settings resolution
//!
//! Precedence, highest first:
//! 1. CLI flags
//! 2. Environment variables (`GITHUB_OUTPUT`, `STORE_MATRIX_*`)
//! 3. Built-in defaults

use std::path::PathBuf;

use super::types::{
    Settings, SettingsOverrides, GROUPS_PATH_ENV, OUTPUT_ENV, STORES_PATH_ENV,
};

/// Resolve settings against the process environment.
pub fn load(overrides: SettingsOverrides) -> Settings {
    load_with_env(overrides, |key| std::env::var(key).ok())
}

/// Resolve settings with an injected environment lookup.
pub fn load_with_env(
    overrides: SettingsOverrides,
    get_env: impl Fn(&str) -> Option<String>,
) -> Settings {
    apply_overrides(with_env_overrides(Settings::default(), get_env), overrides)
}

/// Apply environment variable overrides. Empty values count as unset.
pub fn with_env_overrides(
    mut settings: Settings,
    get_env: impl Fn(&str) -> Option<String>,
) -> Settings {
    let non_empty = |key: &str| get_env(key).filter(|v| !v.is_empty());

    if let Some(path) = non_empty(OUTPUT_ENV) {
        settings.output = Some(PathBuf::from(path));
    }
    if let Some(path) = non_empty(STORES_PATH_ENV) {
        settings.stores_path = PathBuf::from(path);
    }
    if let Some(path) = non_empty(GROUPS_PATH_ENV) {
        settings.groups_path = PathBuf::from(path);
    }

    settings
}

/// Apply CLI values. An empty group name falls back to the default group.
pub fn apply_overrides(mut settings: Settings, overrides: SettingsOverrides) -> Settings {
    if let Some(group) = overrides.group.filter(|g| !g.is_empty()) {
        settings.group = group;
    }
    if let Some(path) = overrides.stores_path {
        settings.stores_path = path;
    }
    if let Some(path) = overrides.groups_path {
        settings.groups_path = path;
    }
    if let Some(path) = overrides.output {
        settings.output = Some(path);
    }
    settings
}
