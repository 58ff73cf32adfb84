#![forbid(unsafe_code)]

//! Core domain types for polcheck
//!
//! This module defines the fundamental types used throughout the parser:
//! rule severities, comparison operators, and field value kinds.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of a registered rule
///
/// The severity token is matched exactly and case-sensitively: only
/// `"error"` and `"warning"` are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    /// Parses a raw severity token
    ///
    /// Returns `None` for anything but the exact literals `error` and
    /// `warning`.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "error" => Some(Severity::Error),
            "warning" => Some(Severity::Warning),
            _ => None,
        }
    }

    /// Whether violations of a rule with this severity are warnings
    pub fn is_warning(&self) -> bool {
        matches!(self, Severity::Warning)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Canonical comparison operators permitted in rule specifications
///
/// Operators are written as mnemonics on the command line (`GT`, `LT`, `EQ`,
/// matched case-insensitively) and carried internally in canonical symbol
/// form. The serde representation is the canonical symbol, so registry files
/// list `operators = [">", "<", "="]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    #[serde(rename = ">")]
    Gt,
    #[serde(rename = "<")]
    Lt,
    #[serde(rename = "=")]
    Eq,
}

impl Operator {
    /// Canonicalizes an operator mnemonic
    ///
    /// Returns `None` for anything outside `GT`/`LT`/`EQ`. The unmatched
    /// form is never a member of a field's operator set, so it fails the
    /// membership check rather than raising an error.
    pub fn from_mnemonic(mnemonic: &str) -> Option<Self> {
        if mnemonic.eq_ignore_ascii_case("GT") {
            Some(Operator::Gt)
        } else if mnemonic.eq_ignore_ascii_case("LT") {
            Some(Operator::Lt)
        } else if mnemonic.eq_ignore_ascii_case("EQ") {
            Some(Operator::Eq)
        } else {
            None
        }
    }

    /// The canonical comparison symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Gt => ">",
            Operator::Lt => "<",
            Operator::Eq => "=",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Value kind of a checkable field
///
/// Governs free-form value validation when a field has no enumerated value
/// set. `Text` places no constraint on the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Integer,
    Boolean,
    Text,
}

impl FieldKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::Integer => "integer",
            FieldKind::Boolean => "boolean",
            FieldKind::Text => "text",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
