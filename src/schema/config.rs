//! Schema configuration: the injected registries a schema compiles against.

use crate::input::coercion::{Coercion, CoercionRegistry};
use crate::input::InputStyle;
use crate::messages::MessageTemplates;
use crate::predicates::registry::{PredicateEntry, PredicateRegistry};

/// Registries and templates a schema is compiled against.
///
/// Configuration is read once at compile time; the compiled schema keeps only
/// what evaluation and message resolution need.
#[derive(Debug, Clone)]
pub struct SchemaConfig {
    /// How raw values arrive.
    pub style: InputStyle,
    /// Declared types and their coercions.
    pub coercions: CoercionRegistry,
    /// Available predicates.
    pub predicates: PredicateRegistry,
    /// Message templates.
    pub templates: MessageTemplates,
}

impl SchemaConfig {
    /// Default configuration for an input style.
    pub fn for_style(style: InputStyle) -> Self {
        Self {
            style,
            coercions: CoercionRegistry::for_style(style),
            predicates: PredicateRegistry::with_builtins(),
            templates: MessageTemplates::english(),
        }
    }

    /// Configuration for parameter-style input.
    pub fn params() -> Self {
        Self::for_style(InputStyle::Params)
    }

    /// Configuration for document-style input.
    pub fn json() -> Self {
        Self::for_style(InputStyle::Json)
    }

    /// Override message templates, keeping defaults for unlisted checks.
    pub fn with_templates(mut self, templates: MessageTemplates) -> Self {
        self.templates.merge(templates);
        self
    }

    /// Register an extra declared type.
    pub fn with_coercion(mut self, coercion: Coercion) -> Self {
        self.coercions.register(coercion);
        self
    }

    /// Register an extra predicate.
    pub fn with_predicate(mut self, entry: PredicateEntry) -> Self {
        self.predicates.register(entry);
        self
    }
}

impl Default for SchemaConfig {
    fn default() -> Self {
        Self::params()
    }
}
