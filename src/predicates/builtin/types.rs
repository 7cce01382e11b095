//! Type predicates.

use crate::core::types::Value;
use crate::predicates::registry::{ArgSpec, Category, PredicateEntry, PredicateRegistry};

const NO_ARGS: &[ArgSpec] = &[];

/// Register type predicates.
pub fn register(registry: &mut PredicateRegistry) {
    let entries: [(&str, &'static str, fn(Option<&Value>, &[Value]) -> bool); 9] = [
        ("int?", "Value is an integer", is_int),
        ("float?", "Value is a float", is_float),
        ("decimal?", "Value is a decimal (carried as a float)", is_float),
        ("number?", "Value is an integer or a float", is_number),
        ("str?", "Value is a string", is_str),
        ("bool?", "Value is a boolean", is_bool),
        ("array?", "Value is an array", is_array),
        ("hash?", "Value is a mapping", is_hash),
        ("nil?", "Value is the null marker", is_nil),
    ];

    for (name, description, check) in entries {
        registry.register(PredicateEntry::new(
            name,
            Category::Type,
            NO_ARGS,
            description,
            check,
        ));
    }
}

fn is_int(subject: Option<&Value>, _: &[Value]) -> bool {
    matches!(subject, Some(Value::Integer(_)))
}

fn is_float(subject: Option<&Value>, _: &[Value]) -> bool {
    matches!(subject, Some(Value::Float(_)))
}

fn is_number(subject: Option<&Value>, _: &[Value]) -> bool {
    subject.is_some_and(Value::is_number)
}

fn is_str(subject: Option<&Value>, _: &[Value]) -> bool {
    matches!(subject, Some(Value::String(_)))
}

fn is_bool(subject: Option<&Value>, _: &[Value]) -> bool {
    matches!(subject, Some(Value::Boolean(_)))
}

fn is_array(subject: Option<&Value>, _: &[Value]) -> bool {
    matches!(subject, Some(Value::Array(_)))
}

fn is_hash(subject: Option<&Value>, _: &[Value]) -> bool {
    matches!(subject, Some(Value::Map(_)))
}

fn is_nil(subject: Option<&Value>, _: &[Value]) -> bool {
    matches!(subject, Some(Value::Null))
}
