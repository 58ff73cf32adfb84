//! Hand-rolled argument scanner
//!
//! The rule grammar (`--rule <severity> <tag> <operator> <value>`, repeated,
//! mixed with a positional input path) is scanned in a single index-driven
//! pass with no backtracking. A diagnostic never stops the scan, so every
//! malformed token is surfaced in one invocation; `--list` is the only
//! early exit.

use crate::cli::report::{Diagnostic, ParseReport};
use crate::fields::FieldRegistry;
use crate::rules::{RuleSet, validate_rule};
use std::path::{Path, PathBuf};

/// Recognized token forms
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token<'a> {
    Rule,
    List,
    Help,
    Positional(&'a str),
}

/// Classifies one raw token
fn classify(token: &str) -> Token<'_> {
    match token {
        "-r" | "--rule" => Token::Rule,
        "-l" | "--list" => Token::List,
        "-h" | "--help" => Token::Help,
        other => Token::Positional(other),
    }
}

/// One-shot parser for a command-line token sequence
///
/// Owns a registry snapshot (immutable for the parse) and the rule set the
/// accepted rules accumulate into. One instance processes one token
/// sequence start to finish.
pub struct ArgParser {
    registry: FieldRegistry,
    rules: RuleSet,
    path: Option<PathBuf>,
    report: ParseReport,
}

impl ArgParser {
    pub fn new(registry: FieldRegistry) -> Self {
        ArgParser {
            registry,
            rules: RuleSet::new(),
            path: None,
            report: ParseReport::default(),
        }
    }

    /// Scans a token sequence
    ///
    /// Returns `true` when no blocking error was recorded, or when `--list`
    /// terminated the scan. The full outcome is available via
    /// [`report`](ArgParser::report).
    pub fn parse<I>(&mut self, args: I) -> bool
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let tokens: Vec<String> = args.into_iter().map(Into::into).collect();
        self.report = self.scan(&tokens);
        self.report.success()
    }

    fn scan(&mut self, tokens: &[String]) -> ParseReport {
        let mut report = ParseReport::default();

        if tokens.is_empty() {
            report.emit(Diagnostic::EmptyInput);
            return report;
        }

        let mut idx = 0;
        while idx < tokens.len() {
            match classify(&tokens[idx]) {
                Token::Rule => {
                    // The four rule arguments are consumed unconditionally:
                    // flags inside the window are arguments, not flags.
                    if idx + 4 < tokens.len() {
                        let severity = &tokens[idx + 1];
                        let tag = &tokens[idx + 2];
                        let operator = &tokens[idx + 3];
                        let value = &tokens[idx + 4];
                        idx += 4;
                        match validate_rule(&self.registry, severity, tag, operator, value) {
                            Ok(rule) => {
                                self.rules
                                    .add_rule(rule.tag, rule.operator, rule.value, rule.is_warning);
                            }
                            Err(cause) => report.emit(Diagnostic::MalformedRule(cause)),
                        }
                    } else {
                        report.emit(Diagnostic::MissingRuleArguments);
                    }
                }
                Token::List => {
                    report.request_list();
                    return report;
                }
                Token::Help => report.request_help(),
                Token::Positional(token) => self.accept_positional(token, &mut report),
            }
            idx += 1;
        }

        report
    }

    fn accept_positional(&mut self, token: &str, report: &mut ParseReport) {
        if Path::new(token).exists() {
            if self.path.is_none() {
                self.path = Some(PathBuf::from(token));
            } else {
                report.emit(Diagnostic::DuplicatePath);
            }
        } else {
            report.emit(Diagnostic::InvalidParam(token.to_string()));
        }
    }

    /// Accumulated validated rules
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Consumes the parser, yielding the rule set
    pub fn into_rules(self) -> RuleSet {
        self.rules
    }

    /// Accepted input path, if one was seen
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// The registry snapshot this parser validates against
    pub fn registry(&self) -> &FieldRegistry {
        &self.registry
    }

    /// Outcome of the last scan
    pub fn report(&self) -> &ParseReport {
        &self.report
    }
}
