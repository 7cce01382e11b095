//! Rule evaluator: runs the stage pipeline for one key.

use crate::core::error::FailedCheck;
use crate::input::Input;
use crate::schema::rule::RuleNode;
use crate::validation::stages::{
    EvaluationStage, KeyEvaluation, KeyPresenceStage, PredicateStage, QuantifierStage,
    StageOutcome, TypeStage,
};
use std::fmt;

/// Ordered pipeline of evaluation stages.
///
/// The default pipeline is key presence, quantifier guard, type, predicates.
/// Stages are stateless, so one evaluator is shared by every validation call.
pub struct RuleEvaluator {
    stages: Vec<Box<dyn EvaluationStage>>,
}

impl RuleEvaluator {
    /// Create an evaluator with the given stages.
    pub fn new(stages: Vec<Box<dyn EvaluationStage>>) -> Self {
        Self { stages }
    }

    /// Create the default evaluation pipeline.
    pub fn default_pipeline() -> Self {
        Self {
            stages: vec![
                Box::new(KeyPresenceStage),
                Box::new(QuantifierStage),
                Box::new(TypeStage),
                Box::new(PredicateStage),
            ],
        }
    }

    /// Append a stage.
    pub fn add_stage(&mut self, stage: Box<dyn EvaluationStage>) {
        self.stages.push(stage);
    }

    /// Stage names, in order.
    pub fn stage_names(&self) -> Vec<&str> {
        self.stages.iter().map(|s| s.name()).collect()
    }

    /// Evaluate one key against an input.
    ///
    /// Returns the failing checks in the order they were produced.
    pub fn evaluate(&self, rule: &RuleNode, input: &Input) -> Vec<FailedCheck> {
        let mut eval = KeyEvaluation::new(rule, input);

        for stage in &self.stages {
            if stage.evaluate(&mut eval) == StageOutcome::Halt {
                log::trace!("key '{}': halted at {}", rule.key, stage.name());
                break;
            }
        }

        log::trace!(
            "key '{}' ({}): {} failure(s)",
            rule.key,
            eval.presence.kind(),
            eval.failures.len()
        );
        eval.failures
    }
}

impl Default for RuleEvaluator {
    fn default() -> Self {
        Self::default_pipeline()
    }
}

impl fmt::Debug for RuleEvaluator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleEvaluator")
            .field("stages", &self.stage_names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::CheckKind;
    use crate::core::types::Value;
    use crate::schema::compiler::RuleCompiler;
    use crate::schema::config::SchemaConfig;
    use crate::schema::declaration::KeyDeclaration;

    fn node(key: KeyDeclaration) -> RuleNode {
        let config = SchemaConfig::params();
        RuleCompiler::new(&config).compile_key(&key).unwrap()
    }

    fn kinds(checks: Vec<FailedCheck>) -> Vec<CheckKind> {
        checks.into_iter().map(|c| c.kind).collect()
    }

    #[test]
    fn test_default_stage_order() {
        let evaluator = RuleEvaluator::default();
        assert_eq!(
            evaluator.stage_names(),
            vec!["Key Presence", "Quantifier", "Type", "Predicates"]
        );
    }

    #[test]
    fn test_type_then_predicates_order() {
        let rule = node(
            KeyDeclaration::required("foo")
                .value("integer")
                .check("gt?", 100)
                .check("lt?", 0),
        );
        let input = Input::from_pairs([("foo", "abc")]);

        assert_eq!(
            kinds(RuleEvaluator::default().evaluate(&rule, &input)),
            vec![
                CheckKind::Type("integer".into()),
                CheckKind::Predicate("gt?".into()),
                CheckKind::Predicate("lt?".into()),
            ]
        );
    }

    #[test]
    fn test_absent_required_runs_every_stage() {
        let rule = node(KeyDeclaration::required("foo").filled("integer").check("lt?", 23));

        assert_eq!(
            kinds(RuleEvaluator::default().evaluate(&rule, &Input::new())),
            vec![
                CheckKind::KeyPresence,
                CheckKind::Type("integer".into()),
                CheckKind::Predicate("lt?".into()),
            ]
        );
    }

    #[test]
    fn test_untyped_key_skips_type_stage() {
        let rule = node(KeyDeclaration::required("foo").check("lt?", 23));
        let input = Input::from_pairs([("foo", Value::from(30))]);

        assert_eq!(
            kinds(RuleEvaluator::default().evaluate(&rule, &input)),
            vec![CheckKind::Predicate("lt?".into())]
        );
    }

    #[test]
    fn test_custom_stage_appended() {
        struct Reject;
        impl EvaluationStage for Reject {
            fn name(&self) -> &str {
                "Reject"
            }
            fn evaluate(&self, eval: &mut KeyEvaluation<'_>) -> StageOutcome {
                eval.fail(FailedCheck::bare(CheckKind::Predicate("rejected".into())));
                StageOutcome::Halt
            }
        }

        let mut evaluator = RuleEvaluator::default_pipeline();
        evaluator.add_stage(Box::new(Reject));
        let rule = node(KeyDeclaration::optional("foo"));

        // Optional absence halts before the custom stage is reached.
        assert!(evaluator.evaluate(&rule, &Input::new()).is_empty());

        let input = Input::from_pairs([("foo", "x")]);
        assert_eq!(
            kinds(evaluator.evaluate(&rule, &input)),
            vec![CheckKind::Predicate("rejected".into())]
        );
    }
}
