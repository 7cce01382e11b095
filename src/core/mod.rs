//! Core types for the Paramshape validation engine.
//!
//! This module contains the foundational types shared by every stage:
//! - Raw and coerced values
//! - Presence states
//! - Checks, failures and error types

pub mod types;
pub mod error;

// Re-export commonly used types
pub use types::{Presence, PresenceKind, TypedValue, Value, ValueKind};
pub use error::{
    CheckKind, FailedCheck, Failure, NamedArg, ParamshapeError, SchemaError, TemplateError,
};
