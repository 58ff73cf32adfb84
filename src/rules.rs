#![forbid(unsafe_code)]

//! Policy rules: the validated rule set and the rule validator

mod rule_set;
mod validate;

// Re-export core types
pub use rule_set::{PolicyRule, RuleSet};
pub use validate::{is_boolean_literal, is_integer_literal, validate_rule};
