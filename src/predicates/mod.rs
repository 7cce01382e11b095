//! Predicate library: named, arity-tagged value checks.

pub mod builtin;
pub mod registry;

pub use registry::{ArgKind, ArgSpec, Category, PredicateEntry, PredicateFn, PredicateRegistry};
