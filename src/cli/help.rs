//! Usage text

/// Command-line usage, shown for `-h`/`--help` and after blocking errors
pub const USAGE: &str = "\
polcheck - policy rule specification checker

Usage: polcheck [OPTIONS] [FILE]

Arguments:
  [FILE]  Input file to check (must exist)

Options:
  -r, --rule <error|warning> <tag> <GT|LT|EQ> <value>
          Validate and register a policy rule
  -l, --list
          List checkable tags with their types and allowed values
  -h, --help
          Show this help text
";
