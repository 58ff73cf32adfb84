#![forbid(unsafe_code)]

//! Polcheck: rule specification parsing and validation for policy checking
//!
//! Polcheck validates command-line rule specifications of the form
//! `--rule <severity> <tag> <operator> <value>` against a registry of
//! checkable fields, and accumulates the accepted rules into a rule set for
//! downstream policy evaluation.

pub mod cli;
pub mod error;
pub mod fields;
pub mod output;
pub mod rules;
pub mod types;

// Re-export error types for convenient access
pub use error::{PolcheckError, RegistryError, RuleSpecError};

// Re-export core domain types for convenient access
pub use types::{FieldKind, Operator, Severity};
