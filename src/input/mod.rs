//! Raw input mapping, presence classification and coercion.

pub mod classifier;
pub mod coercion;

pub use classifier::classify;
pub use coercion::{coerce, CoerceFn, Coercion, CoercionRegistry, EmptyText};

use crate::core::error::{ParamshapeError, ParamshapeResult};
use crate::core::types::Value;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// How raw values arrive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum InputStyle {
    /// Parameter-style input: every scalar arrives as text.
    #[default]
    Params,
    /// Document-style input: values are already typed.
    Json,
}

/// A mapping from string keys to raw values.
///
/// Validation only reads from it; it is never mutated by a validation call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Input {
    values: IndexMap<String, Value>,
}

impl Input {
    /// Create an empty input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an input from key/value pairs.
    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        pairs.into_iter().collect()
    }

    /// Build an input from a parsed value; it must be a mapping.
    pub fn from_value(value: Value) -> ParamshapeResult<Self> {
        match value {
            Value::Map(values) => Ok(Self { values }),
            other => Err(ParamshapeError::InputNotAMapping(other.kind())),
        }
    }

    /// Parse an input from a JSON document, keeping document key order.
    pub fn from_json_str(json: &str) -> ParamshapeResult<Self> {
        let parsed: Value = serde_json::from_str(json)?;
        Self::from_value(parsed)
    }

    /// Read and parse a JSON input file.
    pub fn from_path(path: impl AsRef<Path>) -> ParamshapeResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Insert or replace a value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(key.into(), value.into());
    }

    /// Get the raw value under a key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Check if a key is present (even if null).
    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Number of keys in the input.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the input has no keys.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Input {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
