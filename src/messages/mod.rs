//! Message templates resolved by the result aggregator.

pub mod templates;

pub use templates::MessageTemplates;
