//! List membership predicates.

use crate::core::types::Value;
use crate::predicates::registry::{ArgKind, ArgSpec, Category, PredicateEntry, PredicateRegistry};

const LIST: &[ArgSpec] = &[ArgSpec::new("list", ArgKind::List)];

/// Register inclusion predicates.
pub fn register(registry: &mut PredicateRegistry) {
    registry.register(PredicateEntry::new(
        "included_in?",
        Category::Inclusion,
        LIST,
        "Value is one of the listed values",
        included_in,
    ));
    registry.register(PredicateEntry::new(
        "excluded_from?",
        Category::Inclusion,
        LIST,
        "Value is none of the listed values",
        excluded_from,
    ));
}

fn included_in(subject: Option<&Value>, args: &[Value]) -> bool {
    match (subject, args.first().and_then(Value::as_array)) {
        (Some(subject), Some(list)) => list.contains(subject),
        _ => false,
    }
}

fn excluded_from(subject: Option<&Value>, args: &[Value]) -> bool {
    match (subject, args.first().and_then(Value::as_array)) {
        (Some(subject), Some(list)) => !list.contains(subject),
        _ => false,
    }
}
