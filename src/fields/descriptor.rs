#![forbid(unsafe_code)]

//! Field descriptors: the contract a checkable tag exposes to rule authors

use crate::types::{FieldKind, Operator};
use serde::{Deserialize, Serialize};

/// Registry entry describing one checkable tag
///
/// A descriptor declares the value kind, the comparison operators the field
/// accepts, and optionally a closed set of permitted literal values. When
/// `values` is present it fully determines which values are admissible and
/// the declared kind is not consulted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Unique tag name
    pub name: String,

    /// Value kind governing free-form validation
    #[serde(rename = "type")]
    pub kind: FieldKind,

    /// Canonical operators this field accepts
    pub operators: Vec<Operator>,

    /// Optional closed set of permitted literal values
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<String>>,
}

impl FieldDescriptor {
    /// An integer field accepting all comparison operators
    pub fn numeric(name: impl Into<String>) -> Self {
        FieldDescriptor {
            name: name.into(),
            kind: FieldKind::Integer,
            operators: vec![Operator::Gt, Operator::Lt, Operator::Eq],
            values: None,
        }
    }

    /// A boolean field accepting equality only
    pub fn boolean(name: impl Into<String>) -> Self {
        FieldDescriptor {
            name: name.into(),
            kind: FieldKind::Boolean,
            operators: vec![Operator::Eq],
            values: None,
        }
    }

    /// A field restricted to a closed set of literal values
    ///
    /// Defaults to equality comparisons; use [`with_operators`] for ordered
    /// enumerations.
    ///
    /// [`with_operators`]: FieldDescriptor::with_operators
    pub fn enumerated<I, V>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        FieldDescriptor {
            name: name.into(),
            kind: FieldKind::Text,
            operators: vec![Operator::Eq],
            values: Some(values.into_iter().map(Into::into).collect()),
        }
    }

    /// Replaces the permitted operator set
    pub fn with_operators(mut self, operators: Vec<Operator>) -> Self {
        self.operators = operators;
        self
    }

    /// Whether the canonical operator is permitted for this field
    pub fn allows_operator(&self, op: Operator) -> bool {
        self.operators.contains(&op)
    }

    /// The closed value set, if this field has one
    pub fn permitted_values(&self) -> Option<&[String]> {
        self.values.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_descriptor() {
        let field = FieldDescriptor::numeric("pages");
        assert_eq!(field.name, "pages");
        assert_eq!(field.kind, FieldKind::Integer);
        assert!(field.allows_operator(Operator::Gt));
        assert!(field.allows_operator(Operator::Lt));
        assert!(field.allows_operator(Operator::Eq));
        assert!(field.permitted_values().is_none());
    }

    #[test]
    fn test_boolean_descriptor() {
        let field = FieldDescriptor::boolean("signed");
        assert_eq!(field.kind, FieldKind::Boolean);
        assert!(field.allows_operator(Operator::Eq));
        assert!(!field.allows_operator(Operator::Gt));
        assert!(!field.allows_operator(Operator::Lt));
    }

    #[test]
    fn test_enumerated_descriptor() {
        let field = FieldDescriptor::enumerated("color", ["red", "green", "blue"]);
        assert_eq!(
            field.permitted_values(),
            Some(&["red".to_string(), "green".to_string(), "blue".to_string()][..])
        );
        assert!(field.allows_operator(Operator::Eq));
        assert!(!field.allows_operator(Operator::Gt));
    }

    #[test]
    fn test_with_operators() {
        let field = FieldDescriptor::enumerated("depth", ["1", "8"])
            .with_operators(vec![Operator::Gt, Operator::Eq]);
        assert!(field.allows_operator(Operator::Gt));
        assert!(field.allows_operator(Operator::Eq));
        assert!(!field.allows_operator(Operator::Lt));
    }

    #[test]
    fn test_descriptor_serde_schema() {
        let field = FieldDescriptor::numeric("pages");
        let json = serde_json::to_string(&field).unwrap();
        // Kind serializes under the `type` key; absent values are omitted
        assert!(json.contains("\"type\":\"integer\""));
        assert!(!json.contains("values"));

        let parsed: FieldDescriptor = serde_json::from_str(
            r#"{"name":"color","type":"text","operators":["="],"values":["red","blue"]}"#,
        )
        .unwrap();
        assert_eq!(parsed.name, "color");
        assert_eq!(parsed.operators, vec![Operator::Eq]);
        assert_eq!(parsed.values.as_deref().map(<[String]>::len), Some(2));
    }
}
