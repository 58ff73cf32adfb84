//! Polcheck CLI entry point

use std::process;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    process::exit(polcheck::cli::run(&args));
}
