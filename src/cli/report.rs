//! Parse reports and diagnostics
//!
//! The scanner accumulates diagnostics as data instead of printing; the CLI
//! layer renders them afterwards. Listing and help are tracked as separate
//! outcomes rather than being folded into the error state, so callers never
//! have to special-case a "successful error".

use crate::error::RuleSpecError;

/// A non-fatal problem surfaced while scanning one token sequence
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Diagnostic {
    /// No tokens were supplied
    #[error("No arguments given. See help for details ('-h').")]
    EmptyInput,

    /// `--rule` without four following tokens
    #[error("You must specify the rule after '--rule' option.")]
    MissingRuleArguments,

    /// A candidate rule failed validation
    #[error("Rule specification malformed ({0}). See help for details ('-h').")]
    MalformedRule(RuleSpecError),

    /// A second positional path token
    #[error("Only one file path allowed.")]
    DuplicatePath,

    /// A bare token that is neither a recognized flag nor an existing path
    #[error("Invalid param: {0}")]
    InvalidParam(String),
}

/// Outcome of scanning one token sequence
///
/// Diagnostics are append-only, so the error state is monotonic: once a
/// diagnostic is recorded, no later success can clear it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseReport {
    diagnostics: Vec<Diagnostic>,
    help_requested: bool,
    list_requested: bool,
}

impl ParseReport {
    pub(crate) fn emit(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub(crate) fn request_help(&mut self) {
        self.help_requested = true;
    }

    pub(crate) fn request_list(&mut self) {
        self.list_requested = true;
    }

    /// Diagnostics in the order they were surfaced
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Whether any diagnostic was surfaced
    pub fn has_error(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    /// Whether `-h`/`--help` was seen
    pub fn help_requested(&self) -> bool {
        self.help_requested
    }

    /// Whether `-l`/`--list` terminated the scan
    pub fn list_requested(&self) -> bool {
        self.list_requested
    }

    /// Overall result of the parse
    ///
    /// Listing is a terminal informational action and always succeeds. A
    /// help request suppresses success so the caller falls through to the
    /// help text.
    pub fn success(&self) -> bool {
        self.list_requested || (!self.has_error() && !self.help_requested)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_report_succeeds() {
        let report = ParseReport::default();
        assert!(report.success());
        assert!(!report.has_error());
        assert!(report.diagnostics().is_empty());
    }

    #[test]
    fn test_diagnostic_fails_report() {
        let mut report = ParseReport::default();
        report.emit(Diagnostic::EmptyInput);
        assert!(report.has_error());
        assert!(!report.success());
    }

    #[test]
    fn test_help_suppresses_success() {
        let mut report = ParseReport::default();
        report.request_help();
        assert!(!report.success());
        assert!(!report.has_error());
        assert!(report.help_requested());
    }

    #[test]
    fn test_list_succeeds_despite_errors() {
        let mut report = ParseReport::default();
        report.emit(Diagnostic::InvalidParam("bogus".to_string()));
        report.request_list();
        assert!(report.has_error());
        assert!(report.success());
    }

    #[test]
    fn test_error_state_is_monotonic() {
        let mut report = ParseReport::default();
        report.emit(Diagnostic::DuplicatePath);
        report.emit(Diagnostic::InvalidParam("x".to_string()));
        assert_eq!(report.diagnostics().len(), 2);
        assert!(report.has_error());
    }

    #[test]
    fn test_diagnostic_messages() {
        assert_eq!(
            Diagnostic::MissingRuleArguments.to_string(),
            "You must specify the rule after '--rule' option."
        );
        assert_eq!(
            Diagnostic::DuplicatePath.to_string(),
            "Only one file path allowed."
        );
        assert_eq!(
            Diagnostic::InvalidParam("x.pdf".to_string()).to_string(),
            "Invalid param: x.pdf"
        );
        assert_eq!(
            Diagnostic::MalformedRule(RuleSpecError::UnknownTag("foo".to_string())).to_string(),
            "Rule specification malformed (unknown tag 'foo'). See help for details ('-h')."
        );
    }
}
