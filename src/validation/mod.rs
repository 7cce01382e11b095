//! Rule evaluation and result aggregation.
//!
//! Each key runs through an ordered pipeline: key presence, quantifier guard,
//! type check, predicates. Per-key failures are merged into one result.

pub mod guard;
pub mod pipeline;
pub mod result;
pub mod stages;

pub use guard::{key_check, quantifier_guard, Guard, KeyCheck};
pub use pipeline::RuleEvaluator;
pub use result::{ResultAggregator, ValidationResult};
pub use stages::{
    EvaluationStage, KeyEvaluation, KeyPresenceStage, PredicateStage, QuantifierStage,
    StageOutcome, TypeStage,
};
