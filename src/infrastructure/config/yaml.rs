//! YAML Config Source
//!
//! Reads the store registry and group table documents from disk.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::{self, DeserializeOwned};
use serde_yaml_ng::{Mapping, Value};

use crate::config::suggest::suggest_key;
use crate::config::Settings;
use crate::domain::entities::{GroupTable, StoreRegistry};
use crate::domain::ports::{ConfigSource, Loaded};
use crate::domain::value_objects::ConfigWarning;
use crate::error::{MatrixError, MatrixResult};

const DOCUMENT_KEYS: &[&str] = &["stores", "groups"];
const MERGE_KEY: &str = "<<";

/// Config source backed by two YAML files.
#[derive(Debug, Clone)]
pub struct YamlConfigSource {
    stores_path: PathBuf,
    groups_path: PathBuf,
}

impl YamlConfigSource {
    pub fn new(stores_path: impl Into<PathBuf>, groups_path: impl Into<PathBuf>) -> Self {
        Self {
            stores_path: stores_path.into(),
            groups_path: groups_path.into(),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(&settings.stores_path, &settings.groups_path)
    }

}

impl ConfigSource for YamlConfigSource {
    fn load_registry(&self) -> MatrixResult<Loaded<StoreRegistry>> {
        load_document(&self.stores_path)
    }

    fn load_groups(&self) -> MatrixResult<Loaded<GroupTable>> {
        load_document(&self.groups_path)
    }
}

/// Read and decode one document, collecting unknown keys as warnings.
pub fn load_document<T: DeserializeOwned>(path: &Path) -> MatrixResult<Loaded<T>> {
    let content = fs::read_to_string(path).map_err(|source| MatrixError::DocumentRead {
        path: path.to_path_buf(),
        source,
    })?;
    let (value, warnings) = parse_document(&content, path)?;
    tracing::debug!(path = %path.display(), warnings = warnings.len(), "loaded document");
    Ok(Loaded { value, warnings })
}

/// Decode document text. `path` is only used for error and warning context.
pub fn parse_document<T: DeserializeOwned>(
    content: &str,
    path: &Path,
) -> MatrixResult<(T, Vec<ConfigWarning>)> {
    let parse_error = |e: serde_yaml_ng::Error| MatrixError::DocumentParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    };

    let mut document: Value = serde_yaml_ng::from_str(content).map_err(parse_error)?;
    expand_merge_keys(&mut document).map_err(parse_error)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let value: T = serde_ignored::deserialize(document, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(parse_error)?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                line: find_key_line(content, &key),
                suggestion: suggest_key(&key, DOCUMENT_KEYS),
                file: path.to_path_buf(),
                key,
            }
        })
        .collect();

    Ok((value, warnings))
}

/// Expand `<<` merge keys in place.
///
/// Merged entries take the position of the `<<` key. Keys already present
/// win over merged ones, and earlier merge sources win over later ones.
fn expand_merge_keys(value: &mut Value) -> Result<(), serde_yaml_ng::Error> {
    match value {
        Value::Mapping(mapping) => {
            for (key, mut entry) in std::mem::take(mapping) {
                expand_merge_keys(&mut entry)?;
                if key.as_str() != Some(MERGE_KEY) {
                    mapping.insert(key, entry);
                    continue;
                }
                for source in merge_sources(entry)? {
                    for (merged_key, merged_value) in source {
                        if !mapping.contains_key(&merged_key) {
                            mapping.insert(merged_key, merged_value);
                        }
                    }
                }
            }
            Ok(())
        }
        Value::Sequence(items) => items.iter_mut().try_for_each(expand_merge_keys),
        Value::Tagged(tagged) => expand_merge_keys(&mut tagged.value),
        _ => Ok(()),
    }
}

fn merge_sources(value: Value) -> Result<Vec<Mapping>, serde_yaml_ng::Error> {
    match value {
        Value::Mapping(source) => Ok(vec![source]),
        Value::Sequence(items) => items
            .into_iter()
            .map(|item| match item {
                Value::Mapping(source) => Ok(source),
                _ => Err(merge_error("merge sequence entries must be mappings")),
            })
            .collect(),
        _ => Err(merge_error(
            "merge key value must be a mapping or a sequence of mappings",
        )),
    }
}

fn merge_error(message: &str) -> serde_yaml_ng::Error {
    de::Error::custom(message)
}

fn find_key_line(content: &str, key: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| {
            line.trim_start()
                .strip_prefix(key)
                .is_some_and(|rest| rest.trim_start().starts_with(':'))
        })
        .map(|i| i + 1)
}
