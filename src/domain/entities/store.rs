//! Store registry entity
//!
//! The registry maps a store identifier to its descriptor. Descriptors are
//! opaque configuration records; only the `type` tag is interpreted.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Number, Value};

use crate::domain::value_objects::StoreKind;

/// Configuration record of a single store.
///
/// Keeps every field of the source mapping, in source order, so the
/// descriptor can be forwarded to the CI matrix unchanged.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct StoreDescriptor {
    kind: StoreKind,
    fields: Map<String, Value>,
}

impl StoreDescriptor {
    /// Build a descriptor from its raw fields. Requires a string `type` field.
    ///
    /// Integral floats (`1.0`) are stored as integers so they encode as `1`.
    pub fn from_fields(mut fields: Map<String, Value>) -> Result<Self, String> {
        fields.values_mut().for_each(normalize_numbers);
        let kind = match fields.get("type") {
            Some(Value::String(tag)) => StoreKind::parse(tag),
            Some(other) => {
                return Err(format!(
                    "store field `type` must be a string, found {}",
                    json_type_name(other)
                ))
            }
            None => return Err("store is missing required field `type`".to_string()),
        };
        Ok(Self { kind, fields })
    }

    /// Descriptor with only a `type` field.
    pub fn with_kind(tag: &str) -> Self {
        let mut fields = Map::new();
        fields.insert("type".to_string(), Value::String(tag.to_string()));
        Self {
            kind: StoreKind::parse(tag),
            fields,
        }
    }

    pub fn kind(&self) -> &StoreKind {
        &self.kind
    }

    pub fn is_target(&self) -> bool {
        self.kind.is_target()
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }
}

impl TryFrom<Map<String, Value>> for StoreDescriptor {
    type Error = String;

    fn try_from(fields: Map<String, Value>) -> Result<Self, Self::Error> {
        Self::from_fields(fields)
    }
}

impl Serialize for StoreDescriptor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.fields.serialize(serializer)
    }
}

/// Largest magnitude below which every integer is exactly representable.
const MAX_SAFE_FLOAT_INT: f64 = 9_007_199_254_740_992.0;

fn normalize_numbers(value: &mut Value) {
    match value {
        Value::Number(n) => {
            if let Some(int) = integral_float(n) {
                *value = Value::from(int);
            }
        }
        Value::Array(items) => items.iter_mut().for_each(normalize_numbers),
        Value::Object(map) => map.values_mut().for_each(normalize_numbers),
        _ => {}
    }
}

fn integral_float(n: &Number) -> Option<i64> {
    if !n.is_f64() {
        return None;
    }
    n.as_f64()
        .filter(|f| f.fract() == 0.0 && f.abs() < MAX_SAFE_FLOAT_INT)
        .map(|f| f as i64)
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "a mapping",
    }
}

/// All known stores, keyed by identifier.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct StoreRegistry {
    stores: BTreeMap<String, StoreDescriptor>,
}

impl StoreRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a store (last write wins).
    pub fn insert(&mut self, id: impl Into<String>, descriptor: StoreDescriptor) {
        self.stores.insert(id.into(), descriptor);
    }

    pub fn get(&self, id: &str) -> Option<&StoreDescriptor> {
        self.stores.get(id)
    }

    pub fn len(&self) -> usize {
        self.stores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stores.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, StoreDescriptor)> for StoreRegistry {
    fn from_iter<I: IntoIterator<Item = (K, StoreDescriptor)>>(iter: I) -> Self {
        let mut registry = Self::new();
        for (id, descriptor) in iter {
            registry.insert(id, descriptor);
        }
        registry
    }
}
