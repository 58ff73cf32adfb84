//! Test utilities for polcheck integration tests

use polcheck::fields::{FieldDescriptor, FieldRegistry};

/// Result type alias for tests
pub type TestResult<T = ()> = Result<T, Box<dyn std::error::Error>>;

/// A small registry exercising every validation path: free integers, an
/// enumerated set, a boolean, and an operator-restricted field.
pub fn test_registry() -> FieldRegistry {
    FieldRegistry::from_descriptors(vec![
        FieldDescriptor::numeric("pages"),
        FieldDescriptor::enumerated("color", ["red", "green", "blue"]),
        FieldDescriptor::boolean("signed"),
        FieldDescriptor::numeric("score").with_operators(vec![polcheck::Operator::Gt]),
    ])
    .expect("test registry has no duplicate names")
}

/// Extract Ok value or panic with context
#[macro_export]
macro_rules! assert_ok {
    ($expr:expr) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("assertion failed: expected Ok, got Err({:?})", e),
        }
    };
}
