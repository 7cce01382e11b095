//! Presence classification of a key in a raw input.

use crate::core::types::{Presence, Value};
use crate::input::coercion::EmptyText;
use crate::input::Input;

/// Classify the value under `key` into exactly one presence state.
///
/// Blankness is type-aware through `empty_text`: under parameter-style scalar
/// types an empty string is the only way to say "no value" and classifies as
/// `Null`; elsewhere it is `Blank`. Empty collections are always `Blank`.
pub fn classify(input: &Input, key: &str, empty_text: EmptyText) -> Presence {
    let raw = match input.get(key) {
        None => return Presence::Absent,
        Some(raw) => raw,
    };

    match raw {
        Value::Null => Presence::Null,
        Value::String(s) if s.is_empty() => match empty_text {
            EmptyText::Null => Presence::Null,
            EmptyText::Blank => Presence::Blank(raw.clone()),
        },
        Value::Array(items) if items.is_empty() => Presence::Blank(raw.clone()),
        Value::Map(map) if map.is_empty() => Presence::Blank(raw.clone()),
        _ => Presence::Present(raw.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::PresenceKind;
    use indexmap::IndexMap;

    fn input() -> Input {
        let mut input = Input::new();
        input.insert("null", Value::Null);
        input.insert("empty_text", "");
        input.insert("empty_array", Value::Array(vec![]));
        input.insert("empty_map", Value::Map(IndexMap::new()));
        input.insert("text", "99");
        input.insert("zero", 0);
        input
    }

    #[test]
    fn test_absent_is_distinct_from_null() {
        let input = input();
        assert_eq!(classify(&input, "missing", EmptyText::Blank), Presence::Absent);
        assert_eq!(classify(&input, "null", EmptyText::Blank), Presence::Null);
    }

    #[test]
    fn test_empty_text_follows_policy() {
        let input = input();
        assert_eq!(classify(&input, "empty_text", EmptyText::Null), Presence::Null);
        assert_eq!(
            classify(&input, "empty_text", EmptyText::Blank),
            Presence::Blank(Value::from(""))
        );
    }

    #[test]
    fn test_empty_collections_are_blank_under_any_policy() {
        let input = input();
        for policy in [EmptyText::Null, EmptyText::Blank] {
            assert_eq!(classify(&input, "empty_array", policy).kind(), PresenceKind::Blank);
            assert_eq!(classify(&input, "empty_map", policy).kind(), PresenceKind::Blank);
        }
    }

    #[test]
    fn test_non_empty_values_are_present() {
        let input = input();
        assert_eq!(
            classify(&input, "text", EmptyText::Null),
            Presence::Present(Value::from("99"))
        );
        assert_eq!(
            classify(&input, "zero", EmptyText::Null),
            Presence::Present(Value::from(0))
        );
    }
}
