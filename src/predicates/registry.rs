//! Predicate registry for managing available value checks.

use crate::core::types::Value;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A predicate over a (possibly coerced) subject and its declared arguments.
///
/// The subject is `None` when the key is absent. Predicates are total: a
/// subject of the wrong kind yields `false`, never a panic.
pub type PredicateFn = fn(Option<&Value>, &[Value]) -> bool;

/// Category for organizing predicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Type,
    Presence,
    Comparison,
    Equality,
    Size,
    Inclusion,
    Logic,
}

/// Kind of value a predicate argument must be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArgKind {
    /// Integer or float
    Number,
    /// Integer >= 0
    NonNegativeInteger,
    /// Array of values
    List,
    /// Any value
    Any,
}

impl ArgKind {
    /// Check whether a declared argument has this kind.
    pub fn accepts(&self, value: &Value) -> bool {
        match self {
            ArgKind::Number => value.is_number(),
            ArgKind::NonNegativeInteger => value.as_integer().is_some_and(|n| n >= 0),
            ArgKind::List => value.as_array().is_some(),
            ArgKind::Any => true,
        }
    }
}

impl fmt::Display for ArgKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            ArgKind::Number => "a number",
            ArgKind::NonNegativeInteger => "a non-negative integer",
            ArgKind::List => "a list",
            ArgKind::Any => "any value",
        };
        write!(f, "{}", text)
    }
}

/// One positional argument of a predicate. The name doubles as the message
/// placeholder (`%{num}`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArgSpec {
    pub name: &'static str,
    pub kind: ArgKind,
}

impl ArgSpec {
    pub const fn new(name: &'static str, kind: ArgKind) -> Self {
        Self { name, kind }
    }
}

/// Registry entry: check function plus its argument schema.
#[derive(Clone)]
pub struct PredicateEntry {
    /// Predicate name, including the trailing `?` (e.g. `lt?`).
    pub name: String,
    /// Category for organization.
    pub category: Category,
    /// Positional argument schema.
    pub args: &'static [ArgSpec],
    /// Short description.
    pub description: &'static str,
    /// The check itself.
    pub check: PredicateFn,
}

impl PredicateEntry {
    /// Create a new entry.
    pub fn new(
        name: impl Into<String>,
        category: Category,
        args: &'static [ArgSpec],
        description: &'static str,
        check: PredicateFn,
    ) -> Self {
        Self {
            name: name.into(),
            category,
            args,
            description,
            check,
        }
    }

    /// Number of declared arguments.
    pub fn arity(&self) -> usize {
        self.args.len()
    }
}

impl fmt::Debug for PredicateEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PredicateEntry")
            .field("name", &self.name)
            .field("category", &self.category)
            .field("args", &self.args)
            .field("check", &"<fn>")
            .finish()
    }
}

/// Registry for all available predicates.
///
/// Names are resolved once, when a schema compiles; unknown names are
/// rejected there rather than at validation time.
#[derive(Debug, Clone)]
pub struct PredicateRegistry {
    /// Predicates indexed by name.
    predicates: IndexMap<String, PredicateEntry>,
    /// Predicate names grouped by category.
    categories: IndexMap<Category, Vec<String>>,
}

impl PredicateRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            predicates: IndexMap::new(),
            categories: IndexMap::new(),
        }
    }

    /// Create a registry pre-populated with built-in predicates.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        crate::predicates::builtin::register_all(&mut registry);
        registry
    }

    /// Register a predicate, replacing any entry with the same name.
    pub fn register(&mut self, entry: PredicateEntry) {
        let name = entry.name.clone();
        let category = entry.category;

        if let Some(previous) = self.predicates.insert(name.clone(), entry) {
            if let Some(names) = self.categories.get_mut(&previous.category) {
                names.retain(|n| n != &name);
            }
        }

        self.categories.entry(category).or_default().push(name);
    }

    /// Look up a predicate by name.
    pub fn get(&self, name: &str) -> Option<&PredicateEntry> {
        self.predicates.get(name)
    }

    /// Check if a predicate is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.predicates.contains_key(name)
    }

    /// All registered predicate names, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.predicates.keys().map(|s| s.as_str())
    }

    /// Get predicate names by category.
    pub fn by_category(&self, category: Category) -> Vec<&str> {
        self.categories
            .get(&category)
            .map(|names| names.iter().map(|s| s.as_str()).collect())
            .unwrap_or_default()
    }

    /// Get entries grouped by category, each group sorted by name.
    pub fn grouped_by_category(&self) -> IndexMap<Category, Vec<&PredicateEntry>> {
        let mut grouped: IndexMap<Category, Vec<&PredicateEntry>> = IndexMap::new();

        for entry in self.predicates.values() {
            grouped.entry(entry.category).or_default().push(entry);
        }

        for entries in grouped.values_mut() {
            entries.sort_by(|a, b| a.name.cmp(&b.name));
        }

        grouped
    }

    /// Get the total number of registered predicates.
    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    /// Check if registry is empty.
    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }
}

impl Default for PredicateRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn always(_: Option<&Value>, _: &[Value]) -> bool {
        true
    }

    const NO_ARGS: &[ArgSpec] = &[];

    #[test]
    fn test_register_and_lookup() {
        let mut registry = PredicateRegistry::new();
        registry.register(PredicateEntry::new(
            "always?",
            Category::Logic,
            NO_ARGS,
            "Always passes",
            always,
        ));

        assert!(registry.contains("always?"));
        let entry = registry.get("always?").unwrap();
        assert_eq!(entry.arity(), 0);
        assert!((entry.check)(None, &[]));
    }

    #[test]
    fn test_reregister_moves_category() {
        let mut registry = PredicateRegistry::new();
        registry.register(PredicateEntry::new("p?", Category::Logic, NO_ARGS, "", always));
        registry.register(PredicateEntry::new("p?", Category::Size, NO_ARGS, "", always));

        assert_eq!(registry.len(), 1);
        assert!(registry.by_category(Category::Logic).is_empty());
        assert_eq!(registry.by_category(Category::Size), vec!["p?"]);
    }

    #[test]
    fn test_builtins_present() {
        let registry = PredicateRegistry::with_builtins();
        for name in ["int?", "filled?", "lt?", "gteq?", "eql?", "size?", "included_in?", "odd?"] {
            assert!(registry.contains(name), "missing builtin {}", name);
        }
        assert!(!registry.contains("lt"));
    }

    #[test]
    fn test_grouped_sorted() {
        let registry = PredicateRegistry::with_builtins();
        let grouped = registry.grouped_by_category();
        let comparison: Vec<&str> = grouped[&Category::Comparison]
            .iter()
            .map(|e| e.name.as_str())
            .collect();
        assert_eq!(comparison, vec!["gt?", "gteq?", "lt?", "lteq?"]);
    }

    #[test]
    fn test_arg_kinds() {
        assert!(ArgKind::Number.accepts(&Value::from(2.5)));
        assert!(!ArgKind::Number.accepts(&Value::from("2")));
        assert!(ArgKind::NonNegativeInteger.accepts(&Value::from(0)));
        assert!(!ArgKind::NonNegativeInteger.accepts(&Value::from(-1)));
        assert!(ArgKind::List.accepts(&Value::from(vec![1, 2])));
    }
}
