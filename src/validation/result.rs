//! Result aggregation.

use crate::core::error::{FailedCheck, Failure};
use crate::messages::MessageTemplates;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Outcome of one validation call.
///
/// Created fresh per call and immutable once returned. `messages` lists only
/// keys that failed, in schema declaration order; each key's messages are in
/// check order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ValidationResult {
    successful: bool,
    messages: IndexMap<String, Vec<String>>,
    failures: Vec<Failure>,
}

impl ValidationResult {
    /// Whether every key passed.
    pub fn is_success(&self) -> bool {
        self.successful
    }

    /// Whether any key failed.
    pub fn is_failure(&self) -> bool {
        !self.successful
    }

    /// Failing keys mapped to their messages.
    pub fn messages(&self) -> &IndexMap<String, Vec<String>> {
        &self.messages
    }

    /// Messages for one key; empty when the key passed.
    pub fn messages_for(&self, key: &str) -> &[String] {
        self.messages.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Every failure, flattened in key then check order.
    pub fn failures(&self) -> &[Failure] {
        &self.failures
    }

    /// Human-readable summary.
    pub fn summary(&self) -> String {
        if self.successful {
            "✓ Input is valid".to_string()
        } else {
            format!(
                "✗ {} failure(s) across {} key(s)",
                self.failures.len(),
                self.messages.len()
            )
        }
    }
}

/// Merges per-key failure lists into a [`ValidationResult`], resolving
/// message text against a template store.
pub struct ResultAggregator<'t> {
    templates: &'t MessageTemplates,
    result: ValidationResult,
}

impl<'t> ResultAggregator<'t> {
    /// Start an empty (successful) result.
    pub fn new(templates: &'t MessageTemplates) -> Self {
        Self {
            templates,
            result: ValidationResult {
                successful: true,
                messages: IndexMap::new(),
                failures: Vec::new(),
            },
        }
    }

    /// Record one key's failing checks. Keys must be recorded in schema order.
    pub fn record(&mut self, key: &str, checks: Vec<FailedCheck>) {
        if checks.is_empty() {
            return;
        }
        self.result.successful = false;

        let messages = self.result.messages.entry(key.to_string()).or_default();
        for check in checks {
            let message = self.templates.resolve(&check.kind, &check.args);
            messages.push(message.clone());
            self.result.failures.push(Failure {
                key: key.to_string(),
                check: check.kind,
                message,
            });
        }
    }

    /// Finish aggregation.
    pub fn finish(self) -> ValidationResult {
        self.result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::{CheckKind, NamedArg};
    use crate::core::types::Value;

    fn lt(num: i64) -> FailedCheck {
        FailedCheck {
            kind: CheckKind::Predicate("lt?".into()),
            args: vec![NamedArg {
                name: "num".into(),
                value: Value::from(num),
            }],
        }
    }

    #[test]
    fn test_empty_is_success() {
        let templates = MessageTemplates::english();
        let mut aggregator = ResultAggregator::new(&templates);
        aggregator.record("foo", Vec::new());
        let result = aggregator.finish();

        assert!(result.is_success());
        assert!(result.messages().is_empty());
        assert!(result.messages_for("foo").is_empty());
    }

    #[test]
    fn test_messages_resolved_in_order() {
        let templates = MessageTemplates::english();
        let mut aggregator = ResultAggregator::new(&templates);
        aggregator.record(
            "foo",
            vec![
                FailedCheck::bare(CheckKind::KeyPresence),
                FailedCheck::bare(CheckKind::Type("integer".into())),
                lt(23),
            ],
        );
        let result = aggregator.finish();

        assert!(result.is_failure());
        assert_eq!(
            result.messages_for("foo"),
            ["is missing", "must be an integer", "must be less than 23"]
        );
        assert_eq!(result.failures().len(), 3);
        assert_eq!(result.failures()[2].check, CheckKind::Predicate("lt?".into()));
    }

    #[test]
    fn test_key_order_follows_recording() {
        let templates = MessageTemplates::english();
        let mut aggregator = ResultAggregator::new(&templates);
        aggregator.record("zeta", vec![lt(1)]);
        aggregator.record("alpha", vec![lt(2)]);
        let result = aggregator.finish();

        assert_eq!(
            result.messages().keys().collect::<Vec<_>>(),
            vec!["zeta", "alpha"]
        );
        assert_eq!(result.summary(), "✗ 2 failure(s) across 2 key(s)");
    }

    #[test]
    fn test_serializes_to_json() {
        let templates = MessageTemplates::english();
        let mut aggregator = ResultAggregator::new(&templates);
        aggregator.record("foo", vec![lt(23)]);
        let json = serde_json::to_value(aggregator.finish()).unwrap();

        assert_eq!(json["successful"], serde_json::json!(false));
        assert_eq!(json["messages"]["foo"][0], "must be less than 23");
    }
}
