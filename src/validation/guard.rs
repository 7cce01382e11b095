//! Short-circuit tables consulted by the evaluator.
//!
//! Both decisions are pure lookups over small closed enums, so the
//! non-uniform suppression rules can be read and tested in isolation from
//! coercion and predicate logic.

use crate::core::types::PresenceKind;
use crate::schema::declaration::{Quantifier, Requiredness};

/// Outcome of the key-presence check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCheck {
    /// Required key is absent: report "is missing" and keep evaluating.
    Missing,
    /// Optional key is absent: the key is successful, nothing else runs.
    Skip,
    /// Key is present: keep evaluating.
    Continue,
}

/// Outcome of the quantifier guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Guard {
    /// Report "must be filled".
    pub not_filled: bool,
    /// Suppress the type check (predicates still run).
    pub skip_type: bool,
    /// Stop evaluating the key; no further failures of any kind.
    pub skip_all: bool,
}

impl Guard {
    /// No guard effect.
    pub const PASS: Guard = Guard {
        not_filled: false,
        skip_type: false,
        skip_all: false,
    };

    /// `filled` rejecting a null or blank value.
    pub const NOT_FILLED: Guard = Guard {
        not_filled: true,
        skip_type: true,
        skip_all: false,
    };

    /// `maybe` accepting an explicit null.
    pub const NULL_ACCEPTED: Guard = Guard {
        not_filled: false,
        skip_type: false,
        skip_all: true,
    };
}

/// Key-presence decision for `(requiredness, presence)`.
pub fn key_check(requiredness: Requiredness, presence: PresenceKind) -> KeyCheck {
    match (requiredness, presence) {
        (Requiredness::Required, PresenceKind::Absent) => KeyCheck::Missing,
        (Requiredness::Optional, PresenceKind::Absent) => KeyCheck::Skip,
        (_, PresenceKind::Null | PresenceKind::Blank | PresenceKind::Present) => KeyCheck::Continue,
    }
}

/// Quantifier guard for `(quantifier, presence)`.
///
/// An absent key passes every guard: key presence already reported it, and
/// the type check that follows fails on absence.
pub fn quantifier_guard(quantifier: Quantifier, presence: PresenceKind) -> Guard {
    use PresenceKind::*;

    match (quantifier, presence) {
        (Quantifier::Value, _) => Guard::PASS,
        (Quantifier::Filled, Null | Blank) => Guard::NOT_FILLED,
        (Quantifier::Filled, Absent | Present) => Guard::PASS,
        (Quantifier::Maybe, Null) => Guard::NULL_ACCEPTED,
        (Quantifier::Maybe, Absent | Blank | Present) => Guard::PASS,
    }
}
