#![forbid(unsafe_code)]

//! Diagnostic rendering
//!
//! The scanner accumulates diagnostics as data; this formatter renders them
//! one per line, with a colored `error:` prefix when the stream supports
//! color.

use crate::cli::Diagnostic;
use std::io::Write;
use termcolor::{Color, ColorSpec, WriteColor};

/// Formatter for scan diagnostics
pub struct DiagnosticFormatter;

impl DiagnosticFormatter {
    /// Creates a new diagnostic formatter
    pub fn new() -> Self {
        DiagnosticFormatter
    }

    /// Formats diagnostics without color, one per line
    pub fn format(&self, diagnostics: &[Diagnostic]) -> String {
        let mut output = String::new();
        for diagnostic in diagnostics {
            output.push_str(&format!("error: {}\n", diagnostic));
        }
        output
    }

    /// Writes diagnostics to a color-capable stream
    pub fn write(
        &self,
        diagnostics: &[Diagnostic],
        w: &mut dyn WriteColor,
    ) -> std::io::Result<()> {
        for diagnostic in diagnostics {
            w.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
            write!(w, "error:")?;
            w.reset()?;
            writeln!(w, " {}", diagnostic)?;
        }
        Ok(())
    }
}

impl Default for DiagnosticFormatter {
    fn default() -> Self {
        Self::new()
    }
}
