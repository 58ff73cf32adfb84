#![forbid(unsafe_code)]

//! Accumulator for validated policy rules

use crate::types::Operator;
use serde::Serialize;

/// A validated (tag, operator, value, severity) tuple registered for later
/// policy evaluation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PolicyRule {
    /// Field tag the rule applies to
    pub tag: String,

    /// Canonical comparison operator
    pub operator: Operator,

    /// Literal value the field is compared against
    pub value: String,

    /// Whether violations are reported as warnings instead of errors
    pub is_warning: bool,
}

/// Destination collection for validated rules
///
/// Append-only: rules are registered as they are accepted and handed to the
/// downstream policy engine as a whole. There is no query or removal
/// capability.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct RuleSet {
    rules: Vec<PolicyRule>,
}

impl RuleSet {
    pub fn new() -> Self {
        RuleSet { rules: Vec::new() }
    }

    /// Registers a validated rule
    pub fn add_rule(
        &mut self,
        tag: impl Into<String>,
        operator: Operator,
        value: impl Into<String>,
        is_warning: bool,
    ) {
        self.rules.push(PolicyRule {
            tag: tag.into(),
            operator,
            value: value.into(),
            is_warning,
        });
    }

    /// Registered rules, in registration order
    pub fn rules(&self) -> &[PolicyRule] {
        &self.rules
    }

    /// Iterates rules in registration order
    pub fn iter(&self) -> impl Iterator<Item = &PolicyRule> {
        self.rules.iter()
    }

    /// The number of registered rules
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether no rule has been registered
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
