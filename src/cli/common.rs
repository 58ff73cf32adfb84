//! Shared CLI constants and registry discovery

use crate::error::RegistryError;
use crate::fields::FieldRegistry;
use std::path::Path;

/// Exit codes
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_USAGE: i32 = 1;
pub const EXIT_ERROR: i32 = 2;

/// Registry file names probed in the working directory
pub const REGISTRY_TOML: &str = "policy-fields.toml";
pub const REGISTRY_JSON: &str = "policy-fields.json";

/// Loads the field registry for this invocation
///
/// Probes the working directory for `policy-fields.toml`, then
/// `policy-fields.json`; falls back to the built-in field set when neither
/// exists.
///
/// # Errors
///
/// Returns `RegistryError` if a registry file exists but cannot be read or
/// parsed.
pub fn load_registry() -> Result<FieldRegistry, RegistryError> {
    let toml_path = Path::new(REGISTRY_TOML);
    if toml_path.exists() {
        return FieldRegistry::load(toml_path);
    }

    let json_path = Path::new(REGISTRY_JSON);
    if json_path.exists() {
        return FieldRegistry::load(json_path);
    }

    Ok(FieldRegistry::builtin())
}
