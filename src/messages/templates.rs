//! Template store mapping checks to message text.
//!
//! The engine only fixes which lookups happen and in what order. Template
//! content is data: English ships embedded, other sets load from TOML.

use crate::core::error::{CheckKind, NamedArg, TemplateError};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;

const ENGLISH: &str = include_str!("en.toml");

/// Message templates, grouped by check kind.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageTemplates {
    /// Key-presence and quantifier messages.
    #[serde(default)]
    pub checks: IndexMap<String, String>,
    /// Type-check messages, keyed by declared type name.
    #[serde(default)]
    pub types: IndexMap<String, String>,
    /// Predicate messages, keyed by predicate name.
    #[serde(default)]
    pub predicates: IndexMap<String, String>,
}

impl MessageTemplates {
    /// The embedded English template set.
    pub fn english() -> Self {
        match Self::from_toml_str(ENGLISH) {
            Ok(templates) => templates,
            Err(error) => {
                // Compilation reports every check as MissingTemplate from here.
                log::error!("embedded English templates failed to parse: {}", error);
                Self::default()
            }
        }
    }

    /// Parse a template set from TOML.
    pub fn from_toml_str(text: &str) -> Result<Self, TemplateError> {
        Ok(toml::from_str(text)?)
    }

    /// Read and parse a TOML template file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, TemplateError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|error| TemplateError::Read {
            path: path.display().to_string(),
            error,
        })?;
        Self::from_toml_str(&text)
    }

    /// Override entries with those from `other`.
    pub fn merge(&mut self, other: MessageTemplates) {
        self.checks.extend(other.checks);
        self.types.extend(other.types);
        self.predicates.extend(other.predicates);
    }

    /// Raw template for a check, if one exists.
    pub fn template(&self, check: &CheckKind) -> Option<&str> {
        match check {
            CheckKind::KeyPresence => self.checks.get("key_presence"),
            CheckKind::Quantifier => self.checks.get("filled"),
            CheckKind::Type(name) => self.types.get(name),
            CheckKind::Predicate(name) => self.predicates.get(name),
        }
        .map(|s| s.as_str())
    }

    /// Check if a template exists for a check.
    pub fn has_template(&self, check: &CheckKind) -> bool {
        self.template(check).is_some()
    }

    /// Resolve the message for a failed check.
    ///
    /// Compiled schemas guarantee a template exists; if one is missing anyway
    /// the check itself is described.
    pub fn resolve(&self, check: &CheckKind, args: &[NamedArg]) -> String {
        match self.template(check) {
            Some(template) => interpolate(template, args),
            None => format!("failed {}", check),
        }
    }
}

/// Replace `%{name}` placeholders with argument values in one pass.
///
/// Substituted text is never rescanned; unknown placeholders are kept as is.
fn interpolate(template: &str, args: &[NamedArg]) -> String {
    let mut message = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("%{") {
        message.push_str(&rest[..start]);
        let tail = &rest[start + 2..];

        let Some(end) = tail.find('}') else {
            message.push_str(&rest[start..]);
            return message;
        };

        let name = &tail[..end];
        match args.iter().find(|arg| arg.name == name) {
            Some(arg) => message.push_str(&arg.value.to_string()),
            None => message.push_str(&rest[start..start + 2 + end + 1]),
        }
        rest = &tail[end + 1..];
    }

    message.push_str(rest);
    message
}
