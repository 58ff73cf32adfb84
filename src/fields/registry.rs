#![forbid(unsafe_code)]

//! Field registry: ordered descriptors with O(1) lookup by tag
//!
//! The registry is built once from an ordered descriptor sequence and is
//! immutable for the lifetime of a parse. Iteration preserves the supplied
//! order; lookups go through a name index.

use crate::error::RegistryError;
use crate::fields::FieldDescriptor;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Immutable, keyed snapshot of the checkable fields
#[derive(Debug, Clone)]
pub struct FieldRegistry {
    fields: Vec<FieldDescriptor>,
    index: HashMap<String, usize>,
}

/// On-disk registry schema for TOML files: a `[[field]]` array of tables
#[derive(Debug, Deserialize)]
struct RegistryFile {
    #[serde(default)]
    field: Vec<FieldDescriptor>,
}

impl FieldRegistry {
    /// Builds a registry from an ordered descriptor sequence
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::DuplicateField` if two descriptors share a
    /// name.
    pub fn from_descriptors(descriptors: Vec<FieldDescriptor>) -> Result<Self, RegistryError> {
        let mut index = HashMap::with_capacity(descriptors.len());
        for (pos, field) in descriptors.iter().enumerate() {
            if index.insert(field.name.clone(), pos).is_some() {
                return Err(RegistryError::DuplicateField(field.name.clone()));
            }
        }
        Ok(FieldRegistry {
            fields: descriptors,
            index,
        })
    }

    /// The built-in policy field set
    pub fn builtin() -> Self {
        // The builtin table carries no duplicate names (asserted in its tests)
        let fields = super::builtin_fields();
        let index = fields
            .iter()
            .enumerate()
            .map(|(pos, field)| (field.name.clone(), pos))
            .collect();
        FieldRegistry { fields, index }
    }

    /// Loads a registry file, dispatching on extension
    ///
    /// `.toml` files hold a `[[field]]` array of tables, `.json` files a
    /// top-level array of descriptors.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::UnsupportedFormat` for any other extension,
    /// and I/O or parse errors from reading the file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, RegistryError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::parse_toml(&content),
            Some("json") => Self::parse_json(&content),
            _ => Err(RegistryError::UnsupportedFormat(path.to_path_buf())),
        }
    }

    /// Parses a TOML registry
    pub fn parse_toml(s: &str) -> Result<Self, RegistryError> {
        let file: RegistryFile = toml::from_str(s)?;
        Self::from_descriptors(file.field)
    }

    /// Parses a JSON registry
    pub fn parse_json(s: &str) -> Result<Self, RegistryError> {
        let fields: Vec<FieldDescriptor> = serde_json::from_str(s)?;
        Self::from_descriptors(fields)
    }

    /// Looks up a descriptor by tag
    pub fn get(&self, tag: &str) -> Option<&FieldDescriptor> {
        self.index.get(tag).map(|&pos| &self.fields[pos])
    }

    /// Whether the tag exists in this registry
    pub fn contains(&self, tag: &str) -> bool {
        self.index.contains_key(tag)
    }

    /// Iterates descriptors in registration order
    pub fn iter(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields.iter()
    }

    /// The number of fields in the registry
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the registry holds no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn sample_fields() -> Vec<FieldDescriptor> {
        vec![
            FieldDescriptor::numeric("pages"),
            FieldDescriptor::enumerated("color", ["red", "green", "blue"]),
            FieldDescriptor::boolean("signed"),
        ]
    }

    #[test]
    fn test_from_descriptors_lookup() {
        let registry = FieldRegistry::from_descriptors(sample_fields()).unwrap();
        assert_eq!(registry.len(), 3);
        assert!(!registry.is_empty());
        assert!(registry.contains("pages"));
        assert!(registry.contains("color"));
        assert!(!registry.contains("Pages"));
        assert!(registry.get("nonexistent").is_none());

        let color = registry.get("color").unwrap();
        assert_eq!(color.permitted_values().map(<[String]>::len), Some(3));
    }

    #[test]
    fn test_from_descriptors_rejects_duplicates() {
        let fields = vec![
            FieldDescriptor::numeric("pages"),
            FieldDescriptor::boolean("pages"),
        ];
        let err = FieldRegistry::from_descriptors(fields).unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateField(name) if name == "pages"));
    }

    #[test]
    fn test_iteration_preserves_order() {
        let registry = FieldRegistry::from_descriptors(sample_fields()).unwrap();
        let names: Vec<&str> = registry.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["pages", "color", "signed"]);
    }

    #[test]
    fn test_empty_registry() {
        let registry = FieldRegistry::from_descriptors(Vec::new()).unwrap();
        assert!(registry.is_empty());
        assert_eq!(registry.iter().count(), 0);
    }

    #[test]
    fn test_parse_toml() {
        let registry = FieldRegistry::parse_toml(
            r#"
[[field]]
name = "pages"
type = "integer"
operators = [">", "<", "="]

[[field]]
name = "color"
type = "text"
operators = ["="]
values = ["red", "green", "blue"]
"#,
        )
        .unwrap();

        assert_eq!(registry.len(), 2);
        let pages = registry.get("pages").unwrap();
        assert_eq!(pages.kind, crate::types::FieldKind::Integer);
        assert!(pages.permitted_values().is_none());
        let color = registry.get("color").unwrap();
        assert_eq!(color.operators, vec![crate::types::Operator::Eq]);
    }

    #[test]
    fn test_parse_toml_empty_is_empty_registry() {
        let registry = FieldRegistry::parse_toml("").unwrap();
        assert!(registry.is_empty());
    }

    #[test]
    fn test_parse_toml_invalid() {
        assert!(matches!(
            FieldRegistry::parse_toml("[[field]]\nname = 3"),
            Err(RegistryError::Toml(_))
        ));
    }

    #[test]
    fn test_parse_json() {
        let registry = FieldRegistry::parse_json(
            r#"[
                {"name": "pages", "type": "integer", "operators": [">", "<", "="]},
                {"name": "signed", "type": "boolean", "operators": ["="]}
            ]"#,
        )
        .unwrap();
        assert_eq!(registry.len(), 2);
        assert!(registry.get("signed").is_some());
    }

    #[test]
    fn test_parse_json_rejects_duplicates() {
        let err = FieldRegistry::parse_json(
            r#"[
                {"name": "pages", "type": "integer", "operators": [">"]},
                {"name": "pages", "type": "text", "operators": ["="]}
            ]"#,
        )
        .unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateField(_)));
    }

    #[test]
    fn test_load_dispatches_on_extension() {
        let temp_dir = TempDir::new().unwrap();

        let toml_path = temp_dir.path().join("fields.toml");
        fs::write(
            &toml_path,
            "[[field]]\nname = \"pages\"\ntype = \"integer\"\noperators = [\">\"]\n",
        )
        .unwrap();
        let registry = FieldRegistry::load(&toml_path).unwrap();
        assert_eq!(registry.len(), 1);

        let json_path = temp_dir.path().join("fields.json");
        fs::write(
            &json_path,
            r#"[{"name": "color", "type": "text", "operators": ["="], "values": ["red"]}]"#,
        )
        .unwrap();
        let registry = FieldRegistry::load(&json_path).unwrap();
        assert!(registry.contains("color"));
    }

    #[test]
    fn test_load_unsupported_extension() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("fields.yaml");
        fs::write(&path, "irrelevant").unwrap();
        assert!(matches!(
            FieldRegistry::load(&path),
            Err(RegistryError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        assert!(matches!(
            FieldRegistry::load("/nonexistent/fields.toml"),
            Err(RegistryError::Io(_))
        ));
    }
}
