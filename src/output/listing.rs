#![forbid(unsafe_code)]

//! Field listing formatter
//!
//! Renders the `--list` output: every registry field in registration order,
//! showing the permitted values for enumerated fields and the value kind
//! for free-form ones.

use crate::fields::FieldRegistry;

/// Human-readable formatter for the checkable field listing
pub struct FieldListFormatter;

impl FieldListFormatter {
    /// Creates a new listing formatter
    pub fn new() -> Self {
        FieldListFormatter
    }

    /// Formats every registry field in registration order
    pub fn format(&self, registry: &FieldRegistry) -> String {
        let mut output = String::new();
        output.push_str("Allowed rule tags (type) [valid values]:\n");

        for field in registry.iter() {
            match field.permitted_values() {
                Some(values) => {
                    output.push_str(&format!("  {} [{}]\n", field.name, values.join(", ")));
                }
                None => {
                    output.push_str(&format!("  {} ({})\n", field.name, field.kind));
                }
            }
        }

        output
    }

    /// Writes the formatted listing to stdout
    pub fn write_to_stdout(&self, registry: &FieldRegistry) {
        print!("{}", self.format(registry));
    }
}

impl Default for FieldListFormatter {
    fn default() -> Self {
        Self::new()
    }
}
