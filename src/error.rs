//! Error types for polcheck
//!
//! This module defines the error types used throughout polcheck, following
//! a hierarchical structure with specific error variants for different
//! error categories.

use crate::types::FieldKind;
use std::path::PathBuf;

/// Field-registry errors
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// Two descriptors share a name
    #[error("Duplicate field name: {0}")]
    DuplicateField(String),

    /// Registry file extension is neither `.toml` nor `.json`
    #[error("Unsupported registry format: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    /// Invalid TOML registry file
    #[error("Invalid TOML registry: {0}")]
    Toml(#[from] toml::de::Error),

    /// Invalid JSON registry file
    #[error("Invalid JSON registry: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Reasons a candidate rule specification is rejected
///
/// Variants follow the order the validator applies its checks; the first
/// failing check wins.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuleSpecError {
    /// Severity token is not exactly `error` or `warning`
    #[error("severity must be 'error' or 'warning', got '{0}'")]
    InvalidSeverity(String),

    /// Tag does not exist in the field registry
    #[error("unknown tag '{0}'")]
    UnknownTag(String),

    /// Operator mnemonic is unmatched or not permitted for the field
    #[error("operator '{operator}' is not allowed for tag '{tag}'")]
    OperatorNotAllowed { tag: String, operator: String },

    /// Value is outside the field's closed value set
    #[error("value '{value}' is not permitted for tag '{tag}'")]
    ValueNotPermitted { tag: String, value: String },

    /// Free-form value does not satisfy the field's declared kind
    #[error("value '{value}' is not a valid {kind} for tag '{tag}'")]
    ValueTypeMismatch {
        tag: String,
        kind: FieldKind,
        value: String,
    },
}

/// Top-level error type for polcheck
#[derive(Debug, thiserror::Error)]
pub enum PolcheckError {
    /// Registry error
    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),

    /// Rule specification error
    #[error("Rule error: {0}")]
    Rule(#[from] RuleSpecError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
