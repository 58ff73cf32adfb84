#![forbid(unsafe_code)]

//! Built-in policy fields
//!
//! The default registry for TIFF document policies. Image geometry and
//! density fields take free integer values; format fields are restricted to
//! closed value sets.

use crate::fields::FieldDescriptor;
use crate::types::Operator;

/// The default checkable field set, in listing order
pub fn builtin_fields() -> Vec<FieldDescriptor> {
    vec![
        FieldDescriptor::numeric("ImageWidth"),
        FieldDescriptor::numeric("ImageHeight"),
        FieldDescriptor::numeric("PixelDensity"),
        FieldDescriptor::numeric("NumberImages"),
        FieldDescriptor::numeric("ExtraChannels"),
        FieldDescriptor::boolean("EvenDiv"),
        FieldDescriptor::enumerated("BitDepth", ["1", "2", "4", "8", "16", "32", "64"])
            .with_operators(vec![Operator::Gt, Operator::Lt, Operator::Eq]),
        FieldDescriptor::enumerated("Compression", ["None", "CCITT", "LZW", "JPEG", "Deflate"]),
        FieldDescriptor::enumerated("Photometric", ["Bilevel", "Grayscale", "Palette", "RGB"]),
        FieldDescriptor::enumerated("Planar", ["Chunky", "Planar"]),
        FieldDescriptor::enumerated("ByteOrder", ["LittleEndian", "BigEndian"]),
    ]
}
