//! Parity and boolean predicates.

use crate::core::types::Value;
use crate::predicates::registry::{ArgSpec, Category, PredicateEntry, PredicateRegistry};

const NO_ARGS: &[ArgSpec] = &[];

/// Register logic predicates.
pub fn register(registry: &mut PredicateRegistry) {
    registry.register(PredicateEntry::new("odd?", Category::Logic, NO_ARGS, "Integer is odd", odd));
    registry.register(PredicateEntry::new("even?", Category::Logic, NO_ARGS, "Integer is even", even));
    registry.register(PredicateEntry::new("true?", Category::Logic, NO_ARGS, "Value is true", is_true));
    registry.register(PredicateEntry::new("false?", Category::Logic, NO_ARGS, "Value is false", is_false));
}

fn odd(subject: Option<&Value>, _: &[Value]) -> bool {
    subject.and_then(Value::as_integer).is_some_and(|n| n % 2 != 0)
}

fn even(subject: Option<&Value>, _: &[Value]) -> bool {
    subject.and_then(Value::as_integer).is_some_and(|n| n % 2 == 0)
}

fn is_true(subject: Option<&Value>, _: &[Value]) -> bool {
    subject.and_then(Value::as_bool) == Some(true)
}

fn is_false(subject: Option<&Value>, _: &[Value]) -> bool {
    subject.and_then(Value::as_bool) == Some(false)
}
