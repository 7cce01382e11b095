//! Error types for Paramshape.
//!
//! Uses thiserror for structured errors with context. Only schema
//! configuration problems are errors; validation outcomes are data
//! ([`FailedCheck`] and [`Failure`]), never errors.

use crate::core::types::{Value, ValueKind};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Top-level error type for Paramshape.
#[derive(Error, Debug)]
pub enum ParamshapeError {
    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),

    #[error("Template error: {0}")]
    Template(#[from] TemplateError),

    #[error("Input must be a mapping, got {0}")]
    InputNotAMapping(ValueKind),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Configuration errors raised while compiling a schema declaration.
///
/// These are fail-fast: a schema that cannot compile never validates anything.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SchemaError {
    #[error("Key '{key}' is declared more than once")]
    DuplicateKey { key: String },

    #[error("Unknown type '{type_name}' declared for key '{key}'")]
    UnknownType { key: String, type_name: String },

    #[error("Unknown predicate '{predicate}' declared for key '{key}'")]
    UnknownPredicate { key: String, predicate: String },

    #[error("Predicate '{predicate}' on key '{key}' takes {expected} argument(s), got {got}")]
    ArityMismatch {
        key: String,
        predicate: String,
        expected: usize,
        got: usize,
    },

    #[error("Argument '{argument}' of '{predicate}' on key '{key}' must be {expected}, got {got}")]
    InvalidArgument {
        key: String,
        predicate: String,
        argument: String,
        expected: String,
        got: String,
    },

    #[error("No message template for {check} (key '{key}')")]
    MissingTemplate { key: String, check: String },
}

/// Errors while loading message templates.
#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("Malformed template file: {0}")]
    Malformed(#[from] toml::de::Error),

    #[error("Failed to read template file {path}: {error}")]
    Read { path: String, error: std::io::Error },
}

impl SchemaError {
    /// Key whose declaration caused this error, if any.
    pub fn key(&self) -> &str {
        match self {
            SchemaError::DuplicateKey { key }
            | SchemaError::UnknownType { key, .. }
            | SchemaError::UnknownPredicate { key, .. }
            | SchemaError::ArityMismatch { key, .. }
            | SchemaError::InvalidArgument { key, .. }
            | SchemaError::MissingTemplate { key, .. } => key,
        }
    }
}

/// Result type alias for Paramshape operations.
pub type ParamshapeResult<T> = Result<T, ParamshapeError>;

/// Result type alias for schema compilation.
pub type SchemaResult<T> = Result<T, SchemaError>;

// ============================================================================
// Checks and Failures
// ============================================================================

/// Which check produced a failure.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "name", rename_all = "snake_case")]
pub enum CheckKind {
    /// Required key is absent.
    KeyPresence,
    /// Quantifier guard (`filled`) rejected a null or blank value.
    Quantifier,
    /// Coercion into the named declared type failed.
    Type(String),
    /// The named predicate returned false.
    Predicate(String),
}

impl fmt::Display for CheckKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckKind::KeyPresence => write!(f, "key presence"),
            CheckKind::Quantifier => write!(f, "quantifier"),
            CheckKind::Type(name) => write!(f, "type '{}'", name),
            CheckKind::Predicate(name) => write!(f, "predicate '{}'", name),
        }
    }
}

/// Named predicate argument, carried into message interpolation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedArg {
    pub name: String,
    pub value: Value,
}

/// One failing check for one key, before message resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct FailedCheck {
    /// Check that failed.
    pub kind: CheckKind,
    /// Arguments the check was declared with.
    pub args: Vec<NamedArg>,
}

impl FailedCheck {
    /// Failure of a check that takes no arguments.
    pub fn bare(kind: CheckKind) -> Self {
        Self {
            kind,
            args: Vec::new(),
        }
    }
}

/// A resolved failure: key, check and message text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Failure {
    /// Key the failure belongs to.
    pub key: String,
    /// Check that failed.
    pub check: CheckKind,
    /// Resolved message text.
    pub message: String,
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.key, self.message)
    }
}
