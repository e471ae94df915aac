//! Named, lazily encoded log data

use super::complex::{Complex128, Complex64};
use super::encoder::{ArrayPopulate, FieldEncoder, ObjectPopulate};
use super::field_type::FieldType;
use std::fmt;
use std::sync::Arc;

/// Encode closure stored in a [`Field`]
pub type EncodeFn = dyn Fn(&mut dyn FieldEncoder) + Send + Sync;

/// A named encode instruction.
///
/// The closure writes one named value into whatever encoder it is handed.
/// Fields are immutable and cheap to clone, so a field built once can be
/// passed to any number of log calls. Values are captured when the field is
/// built, except for postponed fields which compute them inside the closure.
///
/// # Example
///
/// ```
/// use rust_field_logger::Field;
///
/// let field = Field::new("answer", |enc| enc.int64("answer", 42));
/// assert_eq!(field.name(), "answer");
/// ```
#[derive(Clone)]
pub struct Field {
    name: Arc<str>,
    encode: Arc<EncodeFn>,
}

impl Field {
    /// Create a field from a name and an encode closure.
    ///
    /// No validation is done on the name; two fields with the same name in
    /// one call produce two members.
    pub fn new<N, F>(name: N, encode: F) -> Self
    where
        N: Into<Arc<str>>,
        F: Fn(&mut dyn FieldEncoder) + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            encode: Arc::new(encode),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Run the encode closure against `enc`
    pub fn encode(&self, enc: &mut dyn FieldEncoder) {
        (self.encode)(enc)
    }

    /// Report the kind this field emits, by encoding it into a probe.
    ///
    /// Returns `FieldType::Unknown` when the closure emits nothing or more
    /// than one member.
    pub fn field_type(&self) -> FieldType {
        let mut probe = TypeProbe::default();
        self.encode(&mut probe);
        match probe.members {
            1 => probe.last,
            _ => FieldType::Unknown,
        }
    }
}

impl fmt::Debug for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field").field("name", &self.name).finish_non_exhaustive()
    }
}

#[derive(Default)]
struct TypeProbe {
    members: usize,
    last: FieldType,
}

impl TypeProbe {
    fn seen(&mut self, kind: FieldType) {
        self.members += 1;
        self.last = kind;
    }
}

impl FieldEncoder for TypeProbe {
    fn bool(&mut self, _: &str, _: bool) {
        self.seen(FieldType::Bool)
    }
    fn complex128(&mut self, _: &str, _: Complex128) {
        self.seen(FieldType::Complex128)
    }
    fn complex64(&mut self, _: &str, _: Complex64) {
        self.seen(FieldType::Complex64)
    }
    fn float64(&mut self, _: &str, _: f64) {
        self.seen(FieldType::Float64)
    }
    fn float32(&mut self, _: &str, _: f32) {
        self.seen(FieldType::Float32)
    }
    fn int64(&mut self, _: &str, _: i64) {
        self.seen(FieldType::Int64)
    }
    fn int32(&mut self, _: &str, _: i32) {
        self.seen(FieldType::Int32)
    }
    fn int16(&mut self, _: &str, _: i16) {
        self.seen(FieldType::Int16)
    }
    fn int8(&mut self, _: &str, _: i8) {
        self.seen(FieldType::Int8)
    }
    fn uint64(&mut self, _: &str, _: u64) {
        self.seen(FieldType::Uint64)
    }
    fn uint32(&mut self, _: &str, _: u32) {
        self.seen(FieldType::Uint32)
    }
    fn uint16(&mut self, _: &str, _: u16) {
        self.seen(FieldType::Uint16)
    }
    fn uint8(&mut self, _: &str, _: u8) {
        self.seen(FieldType::Uint8)
    }
    fn string(&mut self, _: &str, _: &str) {
        self.seen(FieldType::String)
    }
    // Nested scopes are not entered; only the top-level kind matters here
    fn array(&mut self, _: &str, _: ArrayPopulate<'_>) {
        self.seen(FieldType::Array)
    }
    fn object(&mut self, _: &str, _: ObjectPopulate<'_>) {
        self.seen(FieldType::Object)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_type_probe() {
        let field = Field::new("flag", |enc| enc.bool("flag", true));
        assert_eq!(field.field_type(), FieldType::Bool);

        let field = Field::new("list", |enc| enc.array("list", &mut |arr| arr.int8(1)));
        assert_eq!(field.field_type(), FieldType::Array);
    }

    #[test]
    fn test_field_type_unknown_when_empty_or_multiple() {
        let empty = Field::new("nothing", |_| {});
        assert_eq!(empty.field_type(), FieldType::Unknown);

        let twice = Field::new("twice", |enc| {
            enc.int64("a", 1);
            enc.int64("b", 2);
        });
        assert_eq!(twice.field_type(), FieldType::Unknown);
    }

    #[test]
    fn test_clone_shares_closure() {
        let field = Field::new("name", |enc| enc.string("name", "value"));
        let copy = field.clone();
        assert_eq!(copy.name(), "name");
        assert_eq!(copy.field_type(), FieldType::String);
    }

    #[test]
    fn test_debug_shows_name() {
        let field = Field::new("user", |_| {});
        assert!(format!("{:?}", field).contains("user"));
    }
}
