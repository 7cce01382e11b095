//! Compiled rule nodes.
//!
//! A [`RuleNode`] is produced once per key when a schema compiles and is
//! immutable afterwards. Every name in it is already resolved: the declared
//! type carries its parse function and each predicate its check function, so
//! evaluation never consults a registry.

use crate::core::error::NamedArg;
use crate::core::types::Value;
use crate::input::coercion::{Coercion, EmptyText};
use crate::predicates::registry::{ArgSpec, PredicateFn};
use crate::schema::declaration::{Quantifier, Requiredness};
use std::fmt;

/// A resolved predicate with its declaration-time arguments.
#[derive(Clone)]
pub struct PredicateRule {
    /// Predicate name.
    pub name: String,
    /// Declared arguments, already checked against `params`.
    pub args: Vec<Value>,
    /// Argument schema from the registry.
    pub params: &'static [ArgSpec],
    /// Check function.
    pub check: PredicateFn,
}

impl PredicateRule {
    /// Run the check against a subject (`None` when the key is absent).
    pub fn test(&self, subject: Option<&Value>) -> bool {
        (self.check)(subject, &self.args)
    }

    /// Arguments paired with their names, for message interpolation.
    pub fn named_args(&self) -> Vec<NamedArg> {
        self.params
            .iter()
            .zip(&self.args)
            .map(|(spec, value)| NamedArg {
                name: spec.name.to_string(),
                value: value.clone(),
            })
            .collect()
    }
}

impl fmt::Debug for PredicateRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PredicateRule")
            .field("name", &self.name)
            .field("args", &self.args)
            .field("check", &"<fn>")
            .finish()
    }
}

impl PartialEq for PredicateRule {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.args == other.args
    }
}

/// The compiled rules for one key.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleNode {
    /// Key name.
    pub key: String,
    pub requiredness: Requiredness,
    pub quantifier: Quantifier,
    /// Resolved declared type, if any.
    pub declared_type: Option<Coercion>,
    /// Resolved predicates, in declaration order.
    pub predicates: Vec<PredicateRule>,
}

impl RuleNode {
    /// Empty-string classification policy for this key.
    pub fn empty_text(&self) -> EmptyText {
        self.declared_type
            .as_ref()
            .map(|t| t.empty_text)
            .unwrap_or(EmptyText::Blank)
    }

    /// Declared type name, if any.
    pub fn type_name(&self) -> Option<&str> {
        self.declared_type.as_ref().map(|t| t.name.as_str())
    }

    /// Predicate names, in evaluation order.
    pub fn predicate_names(&self) -> impl Iterator<Item = &str> {
        self.predicates.iter().map(|p| p.name.as_str())
    }
}
