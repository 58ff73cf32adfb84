#![forbid(unsafe_code)]

//! Rule admissibility checks
//!
//! A candidate rule is validated against the registry descriptor for its
//! tag. Checks run in order and stop at the first failure: severity, tag,
//! operator membership, then value (closed set if the field declares one,
//! otherwise by kind).

use crate::error::RuleSpecError;
use crate::fields::FieldRegistry;
use crate::rules::PolicyRule;
use crate::types::{FieldKind, Operator, Severity};

/// Validates a candidate rule specification
///
/// Returns the validated rule ready for registration, or the specific
/// reason it was rejected.
pub fn validate_rule(
    registry: &FieldRegistry,
    severity: &str,
    tag: &str,
    operator: &str,
    value: &str,
) -> Result<PolicyRule, RuleSpecError> {
    let severity = Severity::parse(severity)
        .ok_or_else(|| RuleSpecError::InvalidSeverity(severity.to_string()))?;

    let field = registry
        .get(tag)
        .ok_or_else(|| RuleSpecError::UnknownTag(tag.to_string()))?;

    // An unmatched mnemonic canonicalizes to no operator at all, which is
    // never a member of the field's set.
    let op = Operator::from_mnemonic(operator)
        .filter(|op| field.allows_operator(*op))
        .ok_or_else(|| RuleSpecError::OperatorNotAllowed {
            tag: tag.to_string(),
            operator: operator.to_string(),
        })?;

    if let Some(permitted) = field.permitted_values() {
        // Closed value set: exact membership, declared kind not consulted
        if !permitted.iter().any(|v| v == value) {
            return Err(RuleSpecError::ValueNotPermitted {
                tag: tag.to_string(),
                value: value.to_string(),
            });
        }
    } else {
        let ok = match field.kind {
            FieldKind::Integer => is_integer_literal(value),
            FieldKind::Boolean => is_boolean_literal(value),
            FieldKind::Text => true,
        };
        if !ok {
            return Err(RuleSpecError::ValueTypeMismatch {
                tag: tag.to_string(),
                kind: field.kind,
                value: value.to_string(),
            });
        }
    }

    Ok(PolicyRule {
        tag: tag.to_string(),
        operator: op,
        value: value.to_string(),
        is_warning: severity.is_warning(),
    })
}

/// Whether `s` is a base-10 integer literal (sign allowed)
pub fn is_integer_literal(s: &str) -> bool {
    s.parse::<i64>().is_ok()
}

/// Whether `s` is a boolean literal
///
/// Accepts exactly `true` and `false`, case-insensitively.
pub fn is_boolean_literal(s: &str) -> bool {
    s.eq_ignore_ascii_case("true") || s.eq_ignore_ascii_case("false")
}
