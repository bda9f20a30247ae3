//! Configuration types

use std::path::PathBuf;

/// Group resolved when none is given on the command line.
pub const DEFAULT_GROUP: &str = "target-stores";
/// Conventional location of the store registry document.
pub const DEFAULT_STORES_PATH: &str = "config/stores.yml";
/// Conventional location of the group table document.
pub const DEFAULT_GROUPS_PATH: &str = "config/groups.yml";

/// Environment variable naming the CI output file.
pub const OUTPUT_ENV: &str = "GITHUB_OUTPUT";
/// Environment override for the store registry path.
pub const STORES_PATH_ENV: &str = "STORE_MATRIX_STORES";
/// Environment override for the group table path.
pub const GROUPS_PATH_ENV: &str = "STORE_MATRIX_GROUPS";

/// Settings of a single invocation.
///
/// Built once from defaults, environment and CLI flags, then passed to the
/// use case by value. Nothing reads the environment after this point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub stores_path: PathBuf,
    pub groups_path: PathBuf,
    pub group: String,
    /// CI output file; `None` selects the console fallback
    pub output: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            stores_path: PathBuf::from(DEFAULT_STORES_PATH),
            groups_path: PathBuf::from(DEFAULT_GROUPS_PATH),
            group: DEFAULT_GROUP.to_string(),
            output: None,
        }
    }
}

/// Values given explicitly on the command line. They win over everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsOverrides {
    pub group: Option<String>,
    pub stores_path: Option<PathBuf>,
    pub groups_path: Option<PathBuf>,
    pub output: Option<PathBuf>,
}
