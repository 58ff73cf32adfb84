#![forbid(unsafe_code)]

//! Checkable field descriptors and the field registry

mod builtin;
mod descriptor;
mod registry;

// Re-export core types
pub use builtin::builtin_fields;
pub use descriptor::FieldDescriptor;
pub use registry::FieldRegistry;
