//! Top-level command runner
//!
//! Maps a scan outcome onto terminal output and process exit codes. The
//! parser core never prints; everything user-visible happens here.

use crate::cli::args::ArgParser;
use crate::cli::common::{EXIT_ERROR, EXIT_SUCCESS, EXIT_USAGE, load_registry};
use crate::cli::help::USAGE;
use crate::error::PolcheckError;
use crate::output::{DiagnosticFormatter, FieldListFormatter};
use termcolor::{ColorChoice, StandardStream};

/// Runs one invocation against the supplied tokens
///
/// Returns the process exit code: 0 on success (including `--list` and a
/// clean `--help`), 1 on usage errors, 2 when the registry cannot be
/// loaded.
pub fn run(args: &[String]) -> i32 {
    match run_inner(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            EXIT_ERROR
        }
    }
}

/// Internal implementation of the runner
fn run_inner(args: &[String]) -> Result<i32, PolcheckError> {
    let registry = load_registry()?;

    let mut parser = ArgParser::new(registry);
    parser.parse(args.iter().cloned());
    let report = parser.report();

    // Terminal informational action: list and stop, regardless of anything
    // else on the command line.
    if report.list_requested() {
        let formatter = FieldListFormatter::new();
        formatter.write_to_stdout(parser.registry());
        return Ok(EXIT_SUCCESS);
    }

    if report.has_error() {
        let formatter = DiagnosticFormatter::new();
        let mut stderr = StandardStream::stderr(ColorChoice::Auto);
        formatter.write(report.diagnostics(), &mut stderr)?;
        if report.help_requested() {
            eprint!("{}", USAGE);
        }
        return Ok(EXIT_USAGE);
    }

    if report.help_requested() {
        print!("{}", USAGE);
        return Ok(EXIT_SUCCESS);
    }

    println!("{} rule(s) registered.", parser.rules().len());
    if let Some(path) = parser.path() {
        println!("Input: {}", path.display());
    }
    Ok(EXIT_SUCCESS)
}
