//! Schema declarations, compilation and compiled schemas.

pub mod compiled;
pub mod compiler;
pub mod config;
pub mod declaration;
pub mod rule;

pub use compiled::Schema;
pub use compiler::RuleCompiler;
pub use config::SchemaConfig;
pub use declaration::{
    KeyDeclaration, PredicateDeclaration, Quantifier, Requiredness, SchemaDeclaration,
};
pub use rule::{PredicateRule, RuleNode};
