//! Field type discriminants

use std::fmt;

/// Primitive kind carried by a field value.
///
/// Used only as a label: the encoder protocol dispatches on method, not on
/// this enum, but stringification and diagnostics need to name the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FieldType {
    #[default]
    Unknown,
    Bool,
    Complex64,
    Complex128,
    Float32,
    Float64,
    Int8,
    Int16,
    Int32,
    Int64,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    String,
    Array,
    Object,
}

impl FieldType {
    pub fn to_str(&self) -> &'static str {
        match self {
            FieldType::Unknown => "unknown",
            FieldType::Bool => "bool",
            FieldType::Complex64 => "complex64",
            FieldType::Complex128 => "complex128",
            FieldType::Float32 => "float32",
            FieldType::Float64 => "float64",
            FieldType::Int8 => "int8",
            FieldType::Int16 => "int16",
            FieldType::Int32 => "int32",
            FieldType::Int64 => "int64",
            FieldType::Uint8 => "uint8",
            FieldType::Uint16 => "uint16",
            FieldType::Uint32 => "uint32",
            FieldType::Uint64 => "uint64",
            FieldType::String => "string",
            FieldType::Array => "array",
            FieldType::Object => "object",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}
