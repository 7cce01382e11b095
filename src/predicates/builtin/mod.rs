//! Built-in predicate implementations.
//!
//! This module contains the standard predicates that ship with Paramshape.

mod comparison;
mod equality;
mod inclusion;
mod logic;
mod presence;
mod size;
mod types;

use crate::predicates::registry::PredicateRegistry;

/// Register all built-in predicates.
pub fn register_all(registry: &mut PredicateRegistry) {
    types::register(registry);
    presence::register(registry);
    comparison::register(registry);
    equality::register(registry);
    size::register(registry);
    inclusion::register(registry);
    logic::register(registry);
}
