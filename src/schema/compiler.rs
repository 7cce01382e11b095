//! Rule compiler: declarations to rule nodes.
//!
//! Compilation is pure and deterministic. It resolves every type and
//! predicate name, checks predicate arguments against their schema, and
//! confirms a message template exists for every check the key can produce.
//! Any problem is a [`SchemaError`] raised here, never at validation time.

use crate::core::error::{CheckKind, SchemaError, SchemaResult};
use crate::input::coercion::Coercion;
use crate::schema::config::SchemaConfig;
use crate::schema::declaration::{
    KeyDeclaration, PredicateDeclaration, Quantifier, Requiredness, SchemaDeclaration,
};
use crate::schema::rule::{PredicateRule, RuleNode};
use std::collections::HashSet;

/// Compiles declarations against one configuration.
pub struct RuleCompiler<'a> {
    config: &'a SchemaConfig,
}

impl<'a> RuleCompiler<'a> {
    /// Create a compiler for a configuration.
    pub fn new(config: &'a SchemaConfig) -> Self {
        Self { config }
    }

    /// Compile a whole schema declaration, preserving key order.
    pub fn compile(&self, declaration: &SchemaDeclaration) -> SchemaResult<Vec<RuleNode>> {
        let mut seen = HashSet::new();
        let mut rules = Vec::with_capacity(declaration.keys.len());

        for key in &declaration.keys {
            if !seen.insert(key.key.as_str()) {
                return Err(SchemaError::DuplicateKey {
                    key: key.key.clone(),
                });
            }
            rules.push(self.compile_key(key)?);
        }

        log::debug!(
            "compiled {} rule(s) for {:?} input",
            rules.len(),
            self.config.style
        );
        Ok(rules)
    }

    /// Compile one key declaration.
    pub fn compile_key(&self, declaration: &KeyDeclaration) -> SchemaResult<RuleNode> {
        let key = &declaration.key;

        let declared_type = match &declaration.declared_type {
            Some(name) => Some(self.resolve_type(key, name)?),
            None => None,
        };

        let mut predicates = Vec::with_capacity(declaration.predicates.len());
        for predicate in &declaration.predicates {
            let rule = self.resolve_predicate(key, predicate)?;

            // `maybe(:integer).maybe(:int?, ...)` declares the type twice;
            // the type stage already reports it.
            if let Some(ty) = &declared_type {
                if rule.name == ty.type_predicate {
                    log::debug!("key '{}': folded '{}' into type '{}'", key, rule.name, ty.name);
                    continue;
                }
            }
            predicates.push(rule);
        }

        let node = RuleNode {
            key: key.clone(),
            requiredness: declaration.requiredness,
            quantifier: declaration.quantifier,
            declared_type,
            predicates,
        };
        self.check_templates(&node)?;

        log::debug!(
            "key '{}': {:?} {} type={:?} predicates={:?}",
            node.key,
            node.requiredness,
            node.quantifier,
            node.type_name(),
            node.predicate_names().collect::<Vec<_>>()
        );
        Ok(node)
    }

    fn resolve_type(&self, key: &str, name: &str) -> SchemaResult<Coercion> {
        self.config
            .coercions
            .get(name)
            .cloned()
            .ok_or_else(|| SchemaError::UnknownType {
                key: key.to_string(),
                type_name: name.to_string(),
            })
    }

    fn resolve_predicate(
        &self,
        key: &str,
        declaration: &PredicateDeclaration,
    ) -> SchemaResult<PredicateRule> {
        let entry = self
            .config
            .predicates
            .get(&declaration.name)
            .ok_or_else(|| SchemaError::UnknownPredicate {
                key: key.to_string(),
                predicate: declaration.name.clone(),
            })?;

        if declaration.args.len() != entry.arity() {
            return Err(SchemaError::ArityMismatch {
                key: key.to_string(),
                predicate: entry.name.clone(),
                expected: entry.arity(),
                got: declaration.args.len(),
            });
        }

        for (spec, value) in entry.args.iter().zip(&declaration.args) {
            if !spec.kind.accepts(value) {
                return Err(SchemaError::InvalidArgument {
                    key: key.to_string(),
                    predicate: entry.name.clone(),
                    argument: spec.name.to_string(),
                    expected: spec.kind.to_string(),
                    got: value.kind().to_string(),
                });
            }
        }

        Ok(PredicateRule {
            name: entry.name.clone(),
            args: declaration.args.clone(),
            params: entry.args,
            check: entry.check,
        })
    }

    fn check_templates(&self, node: &RuleNode) -> SchemaResult<()> {
        let mut checks = Vec::new();
        if node.requiredness == Requiredness::Required {
            checks.push(CheckKind::KeyPresence);
        }
        if node.quantifier == Quantifier::Filled {
            checks.push(CheckKind::Quantifier);
        }
        if let Some(name) = node.type_name() {
            checks.push(CheckKind::Type(name.to_string()));
        }
        checks.extend(
            node.predicate_names()
                .map(|name| CheckKind::Predicate(name.to_string())),
        );

        match checks
            .into_iter()
            .find(|check| !self.config.templates.has_template(check))
        {
            Some(check) => Err(SchemaError::MissingTemplate {
                key: node.key.clone(),
                check: check.to_string(),
            }),
            None => Ok(()),
        }
    }
}
