//! # Paramshape - Rule Composition and Evaluation
//!
//! Paramshape validates loosely-typed key/value input (form parameters, decoded
//! JSON documents) against a declared schema and reports an ordered list of
//! human-readable messages per failing key.
//!
//! ## Features
//!
//! - **Presence-aware**: absent, explicit null and blank values are told apart
//! - **Quantifiers**: `value`, `filled` and `maybe` guard emptiness before type checks
//! - **Injected coercion**: parameter-style text parsing or strict document typing
//! - **Fail-fast compilation**: unknown types and predicates, bad arity and
//!   missing message templates are reported before any input is seen
//! - **Shareable**: a compiled [`Schema`](schema::Schema) is immutable and
//!   validates concurrently, including in parallel batches
//!
//! ## Quick Start
//!
//! ```rust
//! use paramshape::prelude::*;
//!
//! let declaration = SchemaDeclaration::new()
//!     .key(KeyDeclaration::required("age").filled("integer").check("lt?", 150))
//!     .key(KeyDeclaration::optional("nickname").maybe("string"));
//!
//! let schema = Schema::params(&declaration).unwrap();
//!
//! let ok = schema.validate(&Input::from_pairs([("age", "42")]));
//! assert!(ok.is_success());
//!
//! let bad = schema.validate(&Input::from_pairs([("age", "")]));
//! assert_eq!(bad.messages_for("age"), ["must be filled", "must be less than 150"]);
//! ```
//!
//! ## Architecture
//!
//! - [`core`]: Values, presence states and error types
//! - [`input`]: Raw input, presence classification and coercion
//! - [`predicates`]: Predicate registry and built-in predicates
//! - [`messages`]: Message templates
//! - [`schema`]: Declarations, the rule compiler and compiled schemas
//! - [`validation`]: Guard tables, the evaluation pipeline and result aggregation
//!
//! ## Custom Predicates
//!
//! Register a [`PredicateEntry`](predicates::PredicateEntry) on the
//! configuration and give it a message template:
//!
//! ```rust
//! use paramshape::prelude::*;
//!
//! fn https(subject: Option<&Value>, _args: &[Value]) -> bool {
//!     subject
//!         .and_then(Value::as_str)
//!         .map(|s| s.starts_with("https://"))
//!         .unwrap_or(false)
//! }
//!
//! let templates = MessageTemplates::from_toml_str(
//!     "[predicates]\n\"https?\" = \"must use https\"",
//! )
//! .unwrap();
//!
//! let config = SchemaConfig::params()
//!     .with_predicate(PredicateEntry::new("https?", Category::Logic, &[], "HTTPS URL", https))
//!     .with_templates(templates);
//!
//! let schema = Schema::compile(
//!     &SchemaDeclaration::new().key(KeyDeclaration::required("url").predicate("https?")),
//!     &config,
//! )
//! .unwrap();
//!
//! let result = schema.validate(&Input::from_pairs([("url", "http://example.com")]));
//! assert_eq!(result.messages_for("url"), ["must use https"]);
//! ```

#![warn(clippy::all)]

pub mod core;
pub mod input;
pub mod messages;
pub mod predicates;
pub mod schema;
pub mod validation;

/// Prelude module for convenient imports.
///
/// Import everything commonly needed with:
/// ```rust
/// use paramshape::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use crate::core::types::{Presence, PresenceKind, Value, ValueKind};

    // Errors and failures
    pub use crate::core::error::{
        CheckKind, Failure, ParamshapeError, ParamshapeResult, SchemaError, SchemaResult,
        TemplateError,
    };

    // Input
    pub use crate::input::{Coercion, CoercionRegistry, EmptyText, Input, InputStyle};

    // Predicates
    pub use crate::predicates::{ArgKind, ArgSpec, Category, PredicateEntry, PredicateRegistry};

    // Messages
    pub use crate::messages::MessageTemplates;

    // Schema
    pub use crate::schema::{
        KeyDeclaration, Quantifier, Requiredness, Schema, SchemaConfig, SchemaDeclaration,
    };

    // Validation
    pub use crate::validation::ValidationResult;
}

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_version() {
        assert!(!super::VERSION.is_empty());
        assert_eq!(super::NAME, "paramshape");
    }

    #[test]
    fn test_registry_with_builtins() {
        let registry = PredicateRegistry::with_builtins();

        assert!(registry.contains("lt?"));
        assert!(registry.contains("filled?"));
        assert!(registry.contains("included_in?"));
        assert!(registry.contains("int?"));
    }

    #[test]
    fn test_declaration_from_toml() {
        let declaration = SchemaDeclaration::from_toml_str(
            r#"
            [[keys]]
            key = "foo"
            quantifier = "filled"
            type = "integer"
            predicates = [{ name = "lt?", args = [23] }]
            "#,
        )
        .unwrap();
        let schema = Schema::params(&declaration).unwrap();

        assert_eq!(
            schema.validate(&Input::new()).messages_for("foo"),
            ["is missing", "must be an integer", "must be less than 23"]
        );
    }

    #[test]
    fn test_unknown_predicate_fails_compilation() {
        let declaration =
            SchemaDeclaration::new().key(KeyDeclaration::required("foo").predicate("nope?"));

        assert!(matches!(
            Schema::params(&declaration),
            Err(SchemaError::UnknownPredicate { .. })
        ));
    }
}
