//! Individual evaluation stages.
//!
//! Each stage checks one category of failure for one key and decides whether
//! evaluation of that key continues.

use crate::core::error::{CheckKind, FailedCheck};
use crate::core::types::{Presence, Value};
use crate::input::coercion::coerce;
use crate::input::{classify, Input};
use crate::schema::rule::RuleNode;
use crate::validation::guard::{key_check, quantifier_guard, KeyCheck};

/// Working state for evaluating one key against one input.
///
/// Allocated per key per validation call and discarded afterwards.
#[derive(Debug)]
pub struct KeyEvaluation<'r> {
    /// Rule being evaluated.
    pub rule: &'r RuleNode,
    /// Presence state of the key.
    pub presence: Presence,
    /// Value forwarded to predicates (`None` when absent).
    pub subject: Option<Value>,
    /// Set by the quantifier guard to suppress the type check.
    pub skip_type: bool,
    /// Failures so far, in check order.
    pub failures: Vec<FailedCheck>,
}

impl<'r> KeyEvaluation<'r> {
    /// Classify the key and prepare evaluation state.
    pub fn new(rule: &'r RuleNode, input: &Input) -> Self {
        let presence = classify(input, &rule.key, rule.empty_text());
        let subject = presence.value().cloned();

        Self {
            rule,
            presence,
            subject,
            skip_type: false,
            failures: Vec::new(),
        }
    }

    /// Record a failure.
    pub fn fail(&mut self, check: FailedCheck) {
        self.failures.push(check);
    }
}

/// Whether evaluation of the key continues after a stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageOutcome {
    Continue,
    Halt,
}

/// Trait for evaluation stages.
pub trait EvaluationStage: Send + Sync {
    /// Name of this stage.
    fn name(&self) -> &str;

    /// Evaluate one key, appending failures to `eval`.
    fn evaluate(&self, eval: &mut KeyEvaluation<'_>) -> StageOutcome;
}

/// Key-presence check.
///
/// A missing required key is reported but never halts evaluation; the absent
/// value is fed forward to the remaining stages. A missing optional key
/// halts with no failures.
pub struct KeyPresenceStage;

impl EvaluationStage for KeyPresenceStage {
    fn name(&self) -> &str {
        "Key Presence"
    }

    fn evaluate(&self, eval: &mut KeyEvaluation<'_>) -> StageOutcome {
        match key_check(eval.rule.requiredness, eval.presence.kind()) {
            KeyCheck::Missing => {
                eval.fail(FailedCheck::bare(CheckKind::KeyPresence));
                StageOutcome::Continue
            }
            KeyCheck::Skip => StageOutcome::Halt,
            KeyCheck::Continue => StageOutcome::Continue,
        }
    }
}

/// Quantifier guard (`value` / `filled` / `maybe`).
pub struct QuantifierStage;

impl EvaluationStage for QuantifierStage {
    fn name(&self) -> &str {
        "Quantifier"
    }

    fn evaluate(&self, eval: &mut KeyEvaluation<'_>) -> StageOutcome {
        let guard = quantifier_guard(eval.rule.quantifier, eval.presence.kind());

        if guard.not_filled {
            eval.fail(FailedCheck::bare(CheckKind::Quantifier));
        }
        if guard.skip_all {
            return StageOutcome::Halt;
        }
        eval.skip_type = guard.skip_type;
        StageOutcome::Continue
    }
}

/// Type check: coerce into the declared type.
///
/// On success the coerced value replaces the subject; on failure the raw
/// value is forwarded unchanged. Never halts.
pub struct TypeStage;

impl EvaluationStage for TypeStage {
    fn name(&self) -> &str {
        "Type"
    }

    fn evaluate(&self, eval: &mut KeyEvaluation<'_>) -> StageOutcome {
        let rule = eval.rule;
        let declared = match &rule.declared_type {
            Some(declared) if !eval.skip_type => declared,
            _ => return StageOutcome::Continue,
        };

        let typed = coerce(&eval.presence, declared);
        if typed.is_coerced() {
            eval.subject = typed.into_subject();
        } else {
            eval.fail(FailedCheck::bare(CheckKind::Type(declared.name.clone())));
        }
        StageOutcome::Continue
    }
}

/// Predicate checks, in declaration order.
///
/// Every predicate runs regardless of earlier failures.
pub struct PredicateStage;

impl EvaluationStage for PredicateStage {
    fn name(&self) -> &str {
        "Predicates"
    }

    fn evaluate(&self, eval: &mut KeyEvaluation<'_>) -> StageOutcome {
        let rule = eval.rule;
        for predicate in &rule.predicates {
            if !predicate.test(eval.subject.as_ref()) {
                eval.fail(FailedCheck {
                    kind: CheckKind::Predicate(predicate.name.clone()),
                    args: predicate.named_args(),
                });
            }
        }
        StageOutcome::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::config::SchemaConfig;
    use crate::schema::compiler::RuleCompiler;
    use crate::schema::declaration::KeyDeclaration;

    fn node(key: KeyDeclaration) -> RuleNode {
        let config = SchemaConfig::params();
        RuleCompiler::new(&config).compile_key(&key).unwrap()
    }

    fn kinds(eval: &KeyEvaluation<'_>) -> Vec<CheckKind> {
        eval.failures.iter().map(|f| f.kind.clone()).collect()
    }

    #[test]
    fn test_key_presence_continues_after_missing() {
        let rule = node(KeyDeclaration::required("foo"));
        let mut eval = KeyEvaluation::new(&rule, &Input::new());

        assert_eq!(KeyPresenceStage.evaluate(&mut eval), StageOutcome::Continue);
        assert_eq!(kinds(&eval), vec![CheckKind::KeyPresence]);
        assert_eq!(eval.subject, None);
    }

    #[test]
    fn test_key_presence_halts_optional_absent() {
        let rule = node(KeyDeclaration::optional("foo"));
        let mut eval = KeyEvaluation::new(&rule, &Input::new());

        assert_eq!(KeyPresenceStage.evaluate(&mut eval), StageOutcome::Halt);
        assert!(eval.failures.is_empty());
    }

    #[test]
    fn test_quantifier_filled_sets_skip_type() {
        let rule = node(KeyDeclaration::required("foo").filled("integer"));
        let input = Input::from_pairs([("foo", Value::Null)]);
        let mut eval = KeyEvaluation::new(&rule, &input);

        assert_eq!(QuantifierStage.evaluate(&mut eval), StageOutcome::Continue);
        assert!(eval.skip_type);
        assert_eq!(kinds(&eval), vec![CheckKind::Quantifier]);

        assert_eq!(TypeStage.evaluate(&mut eval), StageOutcome::Continue);
        assert_eq!(kinds(&eval), vec![CheckKind::Quantifier]);
    }

    #[test]
    fn test_quantifier_maybe_halts_on_null() {
        let rule = node(KeyDeclaration::required("foo").maybe("integer"));
        let input = Input::from_pairs([("foo", Value::Null)]);
        let mut eval = KeyEvaluation::new(&rule, &input);

        assert_eq!(QuantifierStage.evaluate(&mut eval), StageOutcome::Halt);
        assert!(eval.failures.is_empty());
    }

    #[test]
    fn test_type_stage_replaces_subject_on_success() {
        let rule = node(KeyDeclaration::required("foo").value("integer"));
        let input = Input::from_pairs([("foo", "42")]);
        let mut eval = KeyEvaluation::new(&rule, &input);

        TypeStage.evaluate(&mut eval);
        assert!(eval.failures.is_empty());
        assert_eq!(eval.subject, Some(Value::from(42)));
    }

    #[test]
    fn test_type_stage_forwards_raw_on_failure() {
        let rule = node(KeyDeclaration::required("foo").value("integer"));
        let input = Input::from_pairs([("foo", "forty-two")]);
        let mut eval = KeyEvaluation::new(&rule, &input);

        TypeStage.evaluate(&mut eval);
        assert_eq!(kinds(&eval), vec![CheckKind::Type("integer".into())]);
        assert_eq!(eval.subject, Some(Value::from("forty-two")));
    }

    #[test]
    fn test_predicate_stage_runs_every_predicate() {
        let rule = node(
            KeyDeclaration::required("foo")
                .check("gt?", 100)
                .check("lt?", 0)
                .predicate("odd?"),
        );
        let input = Input::from_pairs([("foo", 50)]);
        let mut eval = KeyEvaluation::new(&rule, &input);

        PredicateStage.evaluate(&mut eval);
        assert_eq!(
            kinds(&eval),
            vec![
                CheckKind::Predicate("gt?".into()),
                CheckKind::Predicate("lt?".into()),
                CheckKind::Predicate("odd?".into()),
            ]
        );
        assert_eq!(eval.failures[0].args[0].value, Value::from(100));
    }
}
