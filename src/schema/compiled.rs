//! Compiled schemas.

use crate::core::error::SchemaResult;
use crate::input::{Input, InputStyle};
use crate::messages::MessageTemplates;
use crate::schema::compiler::RuleCompiler;
use crate::schema::config::SchemaConfig;
use crate::schema::declaration::SchemaDeclaration;
use crate::schema::rule::RuleNode;
use crate::validation::{ResultAggregator, RuleEvaluator, ValidationResult};
use rayon::prelude::*;
use std::sync::Arc;

/// An immutable, compiled schema.
///
/// Compiling resolves every name once; validating never fails and never
/// mutates the schema, so one `Schema` can be shared across threads and
/// validated against concurrently. Cloning is cheap.
///
/// # Example
///
/// ```
/// use paramshape::input::Input;
/// use paramshape::schema::{KeyDeclaration, Schema, SchemaDeclaration};
///
/// let schema = Schema::params(
///     &SchemaDeclaration::new().key(KeyDeclaration::required("foo").value("integer").check("lt?", 23)),
/// )
/// .unwrap();
///
/// let result = schema.validate(&Input::from_pairs([("foo", "99")]));
/// assert_eq!(result.messages_for("foo"), ["must be less than 23"]);
/// ```
#[derive(Debug, Clone)]
pub struct Schema {
    rules: Arc<[RuleNode]>,
    style: InputStyle,
    templates: Arc<MessageTemplates>,
    evaluator: Arc<RuleEvaluator>,
}

impl Schema {
    /// Compile a declaration against a configuration.
    pub fn compile(declaration: &SchemaDeclaration, config: &SchemaConfig) -> SchemaResult<Self> {
        let rules = RuleCompiler::new(config).compile(declaration)?;

        Ok(Self {
            rules: rules.into(),
            style: config.style,
            templates: Arc::new(config.templates.clone()),
            evaluator: Arc::new(RuleEvaluator::default_pipeline()),
        })
    }

    /// Compile with the default parameter-style configuration.
    pub fn params(declaration: &SchemaDeclaration) -> SchemaResult<Self> {
        Self::compile(declaration, &SchemaConfig::params())
    }

    /// Compile with the default document-style configuration.
    pub fn json(declaration: &SchemaDeclaration) -> SchemaResult<Self> {
        Self::compile(declaration, &SchemaConfig::json())
    }

    /// Compiled rules, in declaration order.
    pub fn rules(&self) -> &[RuleNode] {
        &self.rules
    }

    /// Compiled rule for one key.
    pub fn rule(&self, key: &str) -> Option<&RuleNode> {
        self.rules.iter().find(|rule| rule.key == key)
    }

    /// Input style this schema was compiled for.
    pub fn style(&self) -> InputStyle {
        self.style
    }

    /// Validate one input.
    ///
    /// Keys not named by the schema are ignored.
    pub fn validate(&self, input: &Input) -> ValidationResult {
        let mut aggregator = ResultAggregator::new(&self.templates);

        for rule in self.rules.iter() {
            aggregator.record(&rule.key, self.evaluator.evaluate(rule, input));
        }

        let result = aggregator.finish();
        log::debug!(
            "validated {} key(s): {}",
            self.rules.len(),
            result.summary()
        );
        result
    }

    /// Validate many inputs in parallel. Results keep input order.
    pub fn validate_many(&self, inputs: &[Input]) -> Vec<ValidationResult> {
        inputs.par_iter().map(|input| self.validate(input)).collect()
    }
}
