//! Coercion registry: declared type name to parse function.
//!
//! The registry is an explicit, injected table. There is no implicit
//! fallback: a type that is not registered is rejected when a schema compiles.

use crate::core::types::{Presence, TypedValue, Value};
use crate::input::InputStyle;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Parse function for one declared type. Returns `None` when the raw value
/// cannot be converted.
pub type CoerceFn = fn(&Value) -> Option<Value>;

/// How an empty string classifies under a declared type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmptyText {
    /// Empty string means "no value" (parameter-style scalar types).
    Null,
    /// Empty string is an empty-but-present value.
    Blank,
}

/// A registered declared type.
#[derive(Clone)]
pub struct Coercion {
    /// Declared type name (e.g. `integer`).
    pub name: String,
    /// Type predicate equivalent to this type (e.g. `int?`), folded into the
    /// type check when both are declared on one key.
    pub type_predicate: String,
    /// Classification of an empty string under this type.
    pub empty_text: EmptyText,
    /// Whether a blank value (empty string or collection) is a valid instance.
    pub accepts_blank: bool,
    /// Parse function.
    pub coerce: CoerceFn,
}

impl Coercion {
    /// Create a new coercion entry.
    pub fn new(
        name: impl Into<String>,
        type_predicate: impl Into<String>,
        empty_text: EmptyText,
        coerce: CoerceFn,
    ) -> Self {
        Self {
            name: name.into(),
            type_predicate: type_predicate.into(),
            empty_text,
            accepts_blank: false,
            coerce,
        }
    }

    /// Mark blank values as valid instances of this type.
    pub fn accepting_blank(mut self) -> Self {
        self.accepts_blank = true;
        self
    }
}

impl fmt::Debug for Coercion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Coercion")
            .field("name", &self.name)
            .field("type_predicate", &self.type_predicate)
            .field("empty_text", &self.empty_text)
            .field("accepts_blank", &self.accepts_blank)
            .field("coerce", &"<fn>")
            .finish()
    }
}

impl PartialEq for Coercion {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.type_predicate == other.type_predicate
            && self.empty_text == other.empty_text
            && self.accepts_blank == other.accepts_blank
    }
}

/// Attempt to coerce a classified value into a declared type.
///
/// Never attempted on `Absent`. `Null` always fails; `Blank` fails unless the
/// type accepts blank values. The raw value is never mutated.
pub fn coerce(presence: &Presence, coercion: &Coercion) -> TypedValue {
    let raw = match presence {
        Presence::Absent => return TypedValue::CoercionFailed(None),
        Presence::Null => return TypedValue::CoercionFailed(Some(Value::Null)),
        Presence::Blank(raw) if !coercion.accepts_blank => {
            return TypedValue::CoercionFailed(Some(raw.clone()))
        }
        Presence::Blank(raw) | Presence::Present(raw) => raw,
    };

    match (coercion.coerce)(raw) {
        Some(value) => TypedValue::Coerced {
            value,
            type_name: coercion.name.clone(),
        },
        None => TypedValue::CoercionFailed(Some(raw.clone())),
    }
}

/// Registry of declared types available to a schema.
#[derive(Debug, Clone)]
pub struct CoercionRegistry {
    types: IndexMap<String, Coercion>,
}

impl CoercionRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            types: IndexMap::new(),
        }
    }

    /// Registry for the given input style.
    pub fn for_style(style: InputStyle) -> Self {
        match style {
            InputStyle::Params => Self::params(),
            InputStyle::Json => Self::json(),
        }
    }

    /// Registry for parameter-style input, where scalars arrive as text.
    pub fn params() -> Self {
        let mut registry = Self::new();
        registry.register(Coercion::new("integer", "int?", EmptyText::Null, params::integer));
        registry.register(Coercion::new("float", "float?", EmptyText::Null, params::float));
        registry.register(Coercion::new("decimal", "decimal?", EmptyText::Null, params::float));
        registry.register(Coercion::new("bool", "bool?", EmptyText::Null, params::boolean));
        registry.register(
            Coercion::new("string", "str?", EmptyText::Blank, strict::string).accepting_blank(),
        );
        registry.register(
            Coercion::new("array", "array?", EmptyText::Blank, strict::array).accepting_blank(),
        );
        registry.register(
            Coercion::new("hash", "hash?", EmptyText::Blank, strict::hash).accepting_blank(),
        );
        registry
    }

    /// Registry for document-style input, where values are already typed.
    pub fn json() -> Self {
        let mut registry = Self::new();
        registry.register(Coercion::new("integer", "int?", EmptyText::Blank, strict::integer));
        registry.register(Coercion::new("float", "float?", EmptyText::Blank, strict::float));
        registry.register(Coercion::new("decimal", "decimal?", EmptyText::Blank, strict::float));
        registry.register(Coercion::new("bool", "bool?", EmptyText::Blank, strict::boolean));
        registry.register(
            Coercion::new("string", "str?", EmptyText::Blank, strict::string).accepting_blank(),
        );
        registry.register(
            Coercion::new("array", "array?", EmptyText::Blank, strict::array).accepting_blank(),
        );
        registry.register(
            Coercion::new("hash", "hash?", EmptyText::Blank, strict::hash).accepting_blank(),
        );
        registry
    }

    /// Register a declared type, replacing any entry with the same name.
    pub fn register(&mut self, coercion: Coercion) {
        self.types.insert(coercion.name.clone(), coercion);
    }

    /// Look up a declared type.
    pub fn get(&self, name: &str) -> Option<&Coercion> {
        self.types.get(name)
    }

    /// Check if a declared type is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    /// All registered type names, in registration order.
    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.types.keys().map(|s| s.as_str())
    }

    /// Number of registered types.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Check if registry is empty.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl Default for CoercionRegistry {
    fn default() -> Self {
        Self::params()
    }
}

/// Text-parsing coercions for parameter-style input.
mod params {
    use crate::core::types::Value;

    /// Base-10 text within the `i64` range. Out-of-range text is not an
    /// integer and fails the type check like any other unparsable text.
    pub fn integer(raw: &Value) -> Option<Value> {
        match raw {
            Value::Integer(i) => Some(Value::Integer(*i)),
            Value::String(s) => s.parse::<i64>().ok().map(Value::Integer),
            _ => None,
        }
    }

    pub fn float(raw: &Value) -> Option<Value> {
        match raw {
            Value::Float(f) => Some(Value::Float(*f)),
            Value::Integer(i) => Some(Value::Float(*i as f64)),
            Value::String(s) => s
                .parse::<f64>()
                .ok()
                .filter(|f| f.is_finite())
                .map(Value::Float),
            _ => None,
        }
    }

    pub fn boolean(raw: &Value) -> Option<Value> {
        match raw {
            Value::Boolean(b) => Some(Value::Boolean(*b)),
            Value::String(s) => match s.as_str() {
                "true" | "1" | "on" | "t" | "yes" | "y" => Some(Value::Boolean(true)),
                "false" | "0" | "off" | "f" | "no" | "n" => Some(Value::Boolean(false)),
                _ => None,
            },
            _ => None,
        }
    }
}

/// Kind-checking coercions for already-typed input.
mod strict {
    use crate::core::types::Value;

    pub fn integer(raw: &Value) -> Option<Value> {
        raw.as_integer().map(Value::Integer)
    }

    pub fn float(raw: &Value) -> Option<Value> {
        raw.as_float().map(Value::Float)
    }

    pub fn boolean(raw: &Value) -> Option<Value> {
        raw.as_bool().map(Value::Boolean)
    }

    pub fn string(raw: &Value) -> Option<Value> {
        raw.as_str().map(|s| Value::String(s.to_string()))
    }

    pub fn array(raw: &Value) -> Option<Value> {
        raw.as_array().map(|items| Value::Array(items.clone()))
    }

    pub fn hash(raw: &Value) -> Option<Value> {
        raw.as_map().map(|map| Value::Map(map.clone()))
    }
}
