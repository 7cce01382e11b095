//! Core value types that flow through classification, coercion and predicates.
//!
//! Raw input is modelled as a closed enum rather than an opaque document:
//! - Closed set of shapes: parameter and document inputs share one representation
//! - Exhaustive matching keeps every predicate total over every shape
//! - Serialization: serde maps the enum onto plain JSON/TOML values

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A raw or coerced input value.
///
/// Parameter-style inputs carry `String` leaves only; document-style inputs may
/// already be typed and nested.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(untagged)]
pub enum Value {
    /// Explicit null marker
    #[default]
    Null,
    /// Boolean value
    Boolean(bool),
    /// 64-bit signed integer
    Integer(i64),
    /// 64-bit floating point number
    Float(f64),
    /// UTF-8 string
    String(String),
    /// Ordered sequence of values
    Array(Vec<Value>),
    /// Ordered key-value mapping
    Map(IndexMap<String, Value>),
}

/// Shape of a [`Value`], used in error messages and diagnostics.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    Null,
    Boolean,
    Integer,
    Float,
    String,
    Array,
    Map,
}

/// Presence state of one key in one input.
///
/// Exactly one state applies. `Null` and `Blank` are refinements of a key that
/// is present; `Absent` is its own case and is never conflated with `Null`.
#[derive(Debug, Clone, PartialEq)]
pub enum Presence {
    /// The key is not in the input mapping at all.
    Absent,
    /// The key is present with the explicit null marker.
    Null,
    /// The key is present with an empty-but-not-null value.
    Blank(Value),
    /// The key is present with a non-empty, non-null value.
    Present(Value),
}

/// Fieldless mirror of [`Presence`], used as a table index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PresenceKind {
    Absent,
    Null,
    Blank,
    Present,
}

/// Outcome of coercing a presence state into a declared type.
#[derive(Debug, Clone, PartialEq)]
pub enum TypedValue {
    /// Coercion succeeded.
    Coerced {
        /// The typed value
        value: Value,
        /// Declared type name the value was coerced into
        type_name: String,
    },
    /// Coercion failed; carries the untouched raw value (`None` when absent).
    CoercionFailed(Option<Value>),
}

static NULL: Value = Value::Null;

// ============================================================================
// Value Implementation
// ============================================================================

impl Value {
    /// Get the kind of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Null => ValueKind::Null,
            Value::Boolean(_) => ValueKind::Boolean,
            Value::Integer(_) => ValueKind::Integer,
            Value::Float(_) => ValueKind::Float,
            Value::String(_) => ValueKind::String,
            Value::Array(_) => ValueKind::Array,
            Value::Map(_) => ValueKind::Map,
        }
    }

    /// Check if this is the explicit null marker.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Check if this is an empty string or an empty collection.
    pub fn is_empty(&self) -> bool {
        match self {
            Value::String(s) => s.is_empty(),
            Value::Array(items) => items.is_empty(),
            Value::Map(map) => map.is_empty(),
            _ => false,
        }
    }

    /// Check if this is an integer or a float.
    pub fn is_number(&self) -> bool {
        matches!(self, Value::Integer(_) | Value::Float(_))
    }

    /// Try to get this value as an integer.
    pub fn as_integer(&self) -> Option<i64> {
        if let Value::Integer(i) = self {
            Some(*i)
        } else {
            None
        }
    }

    /// Try to get this value as a float.
    /// Integers are automatically converted to floats.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Try to get this value as a string reference.
    pub fn as_str(&self) -> Option<&str> {
        if let Value::String(s) = self {
            Some(s)
        } else {
            None
        }
    }

    /// Try to get this value as a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        if let Value::Boolean(b) = self {
            Some(*b)
        } else {
            None
        }
    }

    /// Try to get this value as an array reference.
    pub fn as_array(&self) -> Option<&Vec<Value>> {
        if let Value::Array(items) = self {
            Some(items)
        } else {
            None
        }
    }

    /// Try to get this value as a map reference.
    pub fn as_map(&self) -> Option<&IndexMap<String, Value>> {
        if let Value::Map(map) = self {
            Some(map)
        } else {
            None
        }
    }

    /// Size of a string (in characters), array or map.
    pub fn size(&self) -> Option<usize> {
        match self {
            Value::String(s) => Some(s.chars().count()),
            Value::Array(items) => Some(items.len()),
            Value::Map(map) => Some(map.len()),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "nil"),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Integer(i) => write!(f, "{}", i),
            Value::Float(v) => write!(f, "{}", v),
            Value::String(s) => write!(f, "{}", s),
            Value::Array(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                Ok(())
            }
            Value::Map(map) => {
                write!(f, "{{")?;
                for (i, (key, value)) in map.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", key, value)?;
                }
                write!(f, "}}")
            }
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Null => "null",
            ValueKind::Boolean => "boolean",
            ValueKind::Integer => "integer",
            ValueKind::Float => "float",
            ValueKind::String => "string",
            ValueKind::Array => "array",
            ValueKind::Map => "map",
        };
        write!(f, "{}", name)
    }
}

// ============================================================================
// Conversions
// ============================================================================

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Integer(i as i64)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}

impl From<usize> for Value {
    fn from(n: usize) -> Self {
        Value::Integer(n as i64)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Array(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map(Into::into).unwrap_or(Value::Null)
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Boolean(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Integer(i),
                None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => {
                Value::Map(map.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
        }
    }
}

// ============================================================================
// Presence Implementation
// ============================================================================

impl Presence {
    /// Get the fieldless kind of this state.
    pub fn kind(&self) -> PresenceKind {
        match self {
            Presence::Absent => PresenceKind::Absent,
            Presence::Null => PresenceKind::Null,
            Presence::Blank(_) => PresenceKind::Blank,
            Presence::Present(_) => PresenceKind::Present,
        }
    }

    /// The raw value, or `None` when the key is absent.
    pub fn value(&self) -> Option<&Value> {
        match self {
            Presence::Absent => None,
            Presence::Null => Some(&NULL),
            Presence::Blank(v) | Presence::Present(v) => Some(v),
        }
    }

    /// Check if the key is absent.
    pub fn is_absent(&self) -> bool {
        matches!(self, Presence::Absent)
    }
}

impl fmt::Display for PresenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PresenceKind::Absent => "absent",
            PresenceKind::Null => "null",
            PresenceKind::Blank => "blank",
            PresenceKind::Present => "present",
        };
        write!(f, "{}", name)
    }
}

impl TypedValue {
    /// Check if coercion succeeded.
    pub fn is_coerced(&self) -> bool {
        matches!(self, TypedValue::Coerced { .. })
    }

    /// The value forwarded to predicates: the coerced value, or the raw one.
    pub fn into_subject(self) -> Option<Value> {
        match self {
            TypedValue::Coerced { value, .. } => Some(value),
            TypedValue::CoercionFailed(raw) => raw,
        }
    }
}
