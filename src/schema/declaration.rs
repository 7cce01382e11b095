//! Schema declarations: the compiler's input.
//!
//! Declarations are plain data. They deserialize from TOML or JSON, or are
//! built fluently:
//!
//! ```rust
//! use paramshape::schema::{KeyDeclaration, SchemaDeclaration};
//!
//! let declaration = SchemaDeclaration::new()
//!     .key(KeyDeclaration::required("foo").value("integer").check("lt?", 23))
//!     .key(KeyDeclaration::optional("bar").maybe("integer").predicate("int?").check("gt?", 0));
//! assert_eq!(declaration.keys.len(), 2);
//! ```

use crate::core::error::ParamshapeResult;
use crate::core::types::Value;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Whether a key must be present in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Requiredness {
    #[default]
    Required,
    Optional,
}

/// How a key's emptiness is guarded before type and predicate checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Quantifier {
    /// No guard.
    #[default]
    Value,
    /// Null and blank values fail with "must be filled".
    Filled,
    /// An explicit null short-circuits the key as successful.
    Maybe,
}

impl fmt::Display for Quantifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Quantifier::Value => "value",
            Quantifier::Filled => "filled",
            Quantifier::Maybe => "maybe",
        };
        write!(f, "{}", name)
    }
}

/// A predicate reference with its declaration-time arguments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredicateDeclaration {
    /// Predicate name (e.g. `lt?`).
    pub name: String,
    /// Positional arguments.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<Value>,
}

/// Declaration of one key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyDeclaration {
    /// Key name in the input mapping.
    pub key: String,
    #[serde(default)]
    pub requiredness: Requiredness,
    #[serde(default)]
    pub quantifier: Quantifier,
    /// Declared semantic type, resolved against the coercion registry.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub declared_type: Option<String>,
    /// Predicates, in declaration order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub predicates: Vec<PredicateDeclaration>,
}

impl KeyDeclaration {
    fn new(key: impl Into<String>, requiredness: Requiredness) -> Self {
        Self {
            key: key.into(),
            requiredness,
            quantifier: Quantifier::Value,
            declared_type: None,
            predicates: Vec::new(),
        }
    }

    /// Declare a required key.
    pub fn required(key: impl Into<String>) -> Self {
        Self::new(key, Requiredness::Required)
    }

    /// Declare an optional key.
    pub fn optional(key: impl Into<String>) -> Self {
        Self::new(key, Requiredness::Optional)
    }

    /// `value(type)`: no emptiness guard.
    pub fn value(self, type_name: impl Into<String>) -> Self {
        self.typed(Quantifier::Value, type_name)
    }

    /// `filled(type)`: reject null and blank values.
    pub fn filled(self, type_name: impl Into<String>) -> Self {
        self.typed(Quantifier::Filled, type_name)
    }

    /// `maybe(type)`: accept an explicit null.
    pub fn maybe(self, type_name: impl Into<String>) -> Self {
        self.typed(Quantifier::Maybe, type_name)
    }

    /// Set the quantifier without declaring a type.
    pub fn quantifier(mut self, quantifier: Quantifier) -> Self {
        self.quantifier = quantifier;
        self
    }

    fn typed(mut self, quantifier: Quantifier, type_name: impl Into<String>) -> Self {
        self.quantifier = quantifier;
        self.declared_type = Some(type_name.into());
        self
    }

    /// Append a predicate that takes no arguments.
    pub fn predicate(self, name: impl Into<String>) -> Self {
        self.check_args(name, Vec::new())
    }

    /// Append a single-argument predicate.
    pub fn check(self, name: impl Into<String>, arg: impl Into<Value>) -> Self {
        self.check_args(name, vec![arg.into()])
    }

    /// Append a predicate with any number of arguments.
    pub fn check_args(mut self, name: impl Into<String>, args: Vec<Value>) -> Self {
        self.predicates.push(PredicateDeclaration {
            name: name.into(),
            args,
        });
        self
    }
}

/// An ordered list of key declarations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SchemaDeclaration {
    #[serde(default)]
    pub keys: Vec<KeyDeclaration>,
}

impl SchemaDeclaration {
    /// Create an empty declaration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a key declaration.
    pub fn key(mut self, key: KeyDeclaration) -> Self {
        self.keys.push(key);
        self
    }

    /// Parse a declaration from TOML.
    pub fn from_toml_str(text: &str) -> ParamshapeResult<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Parse a declaration from JSON.
    pub fn from_json_str(text: &str) -> ParamshapeResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Read a declaration file; `.json` files parse as JSON, anything else as TOML.
    pub fn from_path(path: impl AsRef<Path>) -> ParamshapeResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json_str(&text),
            _ => Self::from_toml_str(&text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_preserves_predicate_order() {
        let key = KeyDeclaration::required("foo")
            .filled("integer")
            .check("gt?", 0)
            .check("lt?", 23);

        assert_eq!(key.requiredness, Requiredness::Required);
        assert_eq!(key.quantifier, Quantifier::Filled);
        assert_eq!(key.declared_type.as_deref(), Some("integer"));
        let names: Vec<&str> = key.predicates.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["gt?", "lt?"]);
    }

    #[test]
    fn test_untyped_quantifier() {
        let key = KeyDeclaration::optional("tags").quantifier(Quantifier::Filled);
        assert_eq!(key.declared_type, None);
        assert_eq!(key.quantifier, Quantifier::Filled);
    }

    #[test]
    fn test_from_toml() {
        let declaration = SchemaDeclaration::from_toml_str(
            r#"
            [[keys]]
            key = "foo"
            quantifier = "maybe"
            type = "integer"
            predicates = [{ name = "int?" }, { name = "lt?", args = [23] }]

            [[keys]]
            key = "bar"
            requiredness = "optional"
            "#,
        )
        .unwrap();

        let expected = SchemaDeclaration::new()
            .key(
                KeyDeclaration::required("foo")
                    .maybe("integer")
                    .predicate("int?")
                    .check("lt?", 23),
            )
            .key(KeyDeclaration::optional("bar"));
        assert_eq!(declaration, expected);
    }

    #[test]
    fn test_from_json() {
        let declaration = SchemaDeclaration::from_json_str(
            r#"{"keys": [{"key": "foo", "type": "string", "predicates": [{"name": "included_in?", "args": [["a", "b"]]}]}]}"#,
        )
        .unwrap();

        let key = &declaration.keys[0];
        assert_eq!(key.quantifier, Quantifier::Value);
        assert_eq!(key.predicates[0].args, vec![Value::from(vec!["a", "b"])]);
    }

    #[test]
    fn test_from_path_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let toml_path = dir.path().join("schema.toml");
        std::fs::write(&toml_path, "[[keys]]\nkey = \"foo\"\n").unwrap();
        let json_path = dir.path().join("schema.json");
        std::fs::write(&json_path, r#"{"keys": [{"key": "foo"}]}"#).unwrap();

        let from_toml = SchemaDeclaration::from_path(&toml_path).unwrap();
        let from_json = SchemaDeclaration::from_path(&json_path).unwrap();
        assert_eq!(from_toml, from_json);
    }
}
