//! Equality predicates.

use crate::core::types::Value;
use crate::predicates::registry::{ArgKind, ArgSpec, Category, PredicateEntry, PredicateRegistry};

const LEFT: &[ArgSpec] = &[ArgSpec::new("left", ArgKind::Any)];

/// Register equality predicates.
pub fn register(registry: &mut PredicateRegistry) {
    registry.register(PredicateEntry::new(
        "eql?",
        Category::Equality,
        LEFT,
        "Value equals the argument",
        equal,
    ));
    registry.register(PredicateEntry::new(
        "not_eql?",
        Category::Equality,
        LEFT,
        "Value does not equal the argument",
        not_equal,
    ));
}

fn equal(subject: Option<&Value>, args: &[Value]) -> bool {
    match (subject, args.first()) {
        (Some(subject), Some(expected)) => subject == expected,
        _ => false,
    }
}

// An absent subject is not "not equal"; it is simply not comparable.
fn not_equal(subject: Option<&Value>, args: &[Value]) -> bool {
    match (subject, args.first()) {
        (Some(subject), Some(expected)) => subject != expected,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal() {
        assert!(equal(Some(&Value::from("a")), &[Value::from("a")]));
        assert!(!equal(Some(&Value::from(1)), &[Value::from("1")]));
        assert!(!equal(None, &[Value::Null]));
    }

    #[test]
    fn test_not_equal() {
        assert!(not_equal(Some(&Value::from(2)), &[Value::from(1)]));
        assert!(!not_equal(Some(&Value::from(1)), &[Value::from(1)]));
        assert!(!not_equal(None, &[Value::from(1)]));
    }
}
