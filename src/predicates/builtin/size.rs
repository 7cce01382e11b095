//! Size predicates over strings, arrays and mappings.

use crate::core::types::Value;
use crate::predicates::registry::{ArgKind, ArgSpec, Category, PredicateEntry, PredicateRegistry};

const SIZE: &[ArgSpec] = &[ArgSpec::new("size", ArgKind::NonNegativeInteger)];
const NUM: &[ArgSpec] = &[ArgSpec::new("num", ArgKind::NonNegativeInteger)];

/// Register size predicates.
pub fn register(registry: &mut PredicateRegistry) {
    registry.register(PredicateEntry::new(
        "size?",
        Category::Size,
        SIZE,
        "Size is exactly the argument",
        size_eq,
    ));
    registry.register(PredicateEntry::new(
        "min_size?",
        Category::Size,
        NUM,
        "Size is at least the argument",
        min_size,
    ));
    registry.register(PredicateEntry::new(
        "max_size?",
        Category::Size,
        NUM,
        "Size is at most the argument",
        max_size,
    ));
}

fn sizes(subject: Option<&Value>, args: &[Value]) -> Option<(i64, i64)> {
    let actual = subject?.size()?;
    let expected = args.first()?.as_integer()?;
    Some((actual as i64, expected))
}

fn size_eq(subject: Option<&Value>, args: &[Value]) -> bool {
    sizes(subject, args).is_some_and(|(actual, expected)| actual == expected)
}

fn min_size(subject: Option<&Value>, args: &[Value]) -> bool {
    sizes(subject, args).is_some_and(|(actual, expected)| actual >= expected)
}

fn max_size(subject: Option<&Value>, args: &[Value]) -> bool {
    sizes(subject, args).is_some_and(|(actual, expected)| actual <= expected)
}
