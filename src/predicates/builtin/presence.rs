//! Presence predicates.

use crate::core::types::Value;
use crate::predicates::registry::{ArgSpec, Category, PredicateEntry, PredicateRegistry};

const NO_ARGS: &[ArgSpec] = &[];

/// Register presence predicates.
pub fn register(registry: &mut PredicateRegistry) {
    registry.register(PredicateEntry::new(
        "filled?",
        Category::Presence,
        NO_ARGS,
        "Value is present, not null and not empty",
        filled,
    ));
    registry.register(PredicateEntry::new(
        "empty?",
        Category::Presence,
        NO_ARGS,
        "Value is an empty string or collection",
        empty,
    ));
}

fn filled(subject: Option<&Value>, _: &[Value]) -> bool {
    subject.is_some_and(|v| !v.is_null() && !v.is_empty())
}

fn empty(subject: Option<&Value>, _: &[Value]) -> bool {
    subject.is_some_and(Value::is_empty)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filled() {
        assert!(filled(Some(&Value::from("x")), &[]));
        assert!(filled(Some(&Value::from(0)), &[]));
        assert!(!filled(Some(&Value::from("")), &[]));
        assert!(!filled(Some(&Value::Null), &[]));
        assert!(!filled(None, &[]));
    }

    #[test]
    fn test_empty() {
        assert!(empty(Some(&Value::Array(vec![])), &[]));
        assert!(!empty(Some(&Value::Null), &[]));
        assert!(!empty(None, &[]));
    }
}
