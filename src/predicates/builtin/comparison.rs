//! Numeric comparison predicates.

use crate::core::types::Value;
use crate::predicates::registry::{ArgKind, ArgSpec, Category, PredicateEntry, PredicateRegistry};
use std::cmp::Ordering;

const NUM: &[ArgSpec] = &[ArgSpec::new("num", ArgKind::Number)];

/// Register comparison predicates.
pub fn register(registry: &mut PredicateRegistry) {
    registry.register(PredicateEntry::new(
        "lt?",
        Category::Comparison,
        NUM,
        "Value is strictly less than num",
        less_than,
    ));
    registry.register(PredicateEntry::new(
        "lteq?",
        Category::Comparison,
        NUM,
        "Value is less than or equal to num",
        less_than_or_equal,
    ));
    registry.register(PredicateEntry::new(
        "gt?",
        Category::Comparison,
        NUM,
        "Value is strictly greater than num",
        greater_than,
    ));
    registry.register(PredicateEntry::new(
        "gteq?",
        Category::Comparison,
        NUM,
        "Value is greater than or equal to num",
        greater_than_or_equal,
    ));
}

/// Compare a numeric subject against the first argument.
///
/// Integers compare exactly; any float on either side compares as `f64`.
/// Returns `None` for absent or non-numeric subjects and for NaN.
fn compare(subject: Option<&Value>, args: &[Value]) -> Option<Ordering> {
    let subject = subject?;
    let bound = args.first()?;

    match (subject, bound) {
        (Value::Integer(a), Value::Integer(b)) => Some(a.cmp(b)),
        _ => subject.as_float()?.partial_cmp(&bound.as_float()?),
    }
}

fn less_than(subject: Option<&Value>, args: &[Value]) -> bool {
    compare(subject, args) == Some(Ordering::Less)
}

fn less_than_or_equal(subject: Option<&Value>, args: &[Value]) -> bool {
    matches!(compare(subject, args), Some(Ordering::Less | Ordering::Equal))
}

fn greater_than(subject: Option<&Value>, args: &[Value]) -> bool {
    compare(subject, args) == Some(Ordering::Greater)
}

fn greater_than_or_equal(subject: Option<&Value>, args: &[Value]) -> bool {
    matches!(compare(subject, args), Some(Ordering::Greater | Ordering::Equal))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_lt_boundary() {
        let bound = [Value::from(23)];
        assert!(less_than(Some(&Value::from(22)), &bound));
        assert!(!less_than(Some(&Value::from(23)), &bound));
        assert!(!less_than(Some(&Value::from(99)), &bound));
    }

    #[test]
    fn test_ill_kinded_subjects_fail() {
        let bound = [Value::from(23)];
        for subject in [
            Value::from("1"),
            Value::Null,
            Value::Array(vec![]),
            Value::from(true),
        ] {
            assert!(!less_than(Some(&subject), &bound));
            assert!(!greater_than(Some(&subject), &bound));
        }
        assert!(!less_than(None, &bound));
        assert!(!greater_than_or_equal(None, &bound));
    }

    #[test]
    fn test_mixed_numeric_kinds() {
        assert!(less_than(Some(&Value::from(22.5)), &[Value::from(23)]));
        assert!(greater_than_or_equal(Some(&Value::from(23)), &[Value::from(23.0)]));
        assert!(!less_than(Some(&Value::Float(f64::NAN)), &[Value::from(23)]));
    }

    #[test]
    fn test_inclusive_variants() {
        let bound = [Value::from(10)];
        assert!(less_than_or_equal(Some(&Value::from(10)), &bound));
        assert!(!less_than_or_equal(Some(&Value::from(11)), &bound));
        assert!(greater_than(Some(&Value::from(11)), &bound));
        assert!(!greater_than(Some(&Value::from(10)), &bound));
    }

    proptest! {
        #[test]
        fn prop_lt_is_strict(a in any::<i64>(), b in any::<i64>()) {
            let result = less_than(Some(&Value::from(a)), &[Value::from(b)]);
            prop_assert_eq!(result, a < b);
        }

        #[test]
        fn prop_lt_and_gteq_partition(a in any::<i64>(), b in any::<i64>()) {
            let subject = Value::from(a);
            let bound = [Value::from(b)];
            prop_assert_ne!(
                less_than(Some(&subject), &bound),
                greater_than_or_equal(Some(&subject), &bound)
            );
        }
    }
}
