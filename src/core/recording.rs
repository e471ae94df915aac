//! Encoder that records protocol calls
//!
//! Useful for asserting exactly which encoder methods a field invokes.

use super::complex::{Complex128, Complex64};
use super::encoder::{ArrayEncoder, ArrayPopulate, FieldEncoder, ObjectPopulate};
use super::field_type::FieldType;

/// One recorded encoder call
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub kind: FieldType,
    /// Member name; `None` for array elements
    pub name: Option<String>,
    /// `Display` rendering of a scalar; `None` for arrays and objects
    pub value: Option<String>,
    /// Calls made inside a nested array or object
    pub children: Vec<Event>,
}

impl Event {
    fn scalar(kind: FieldType, name: Option<&str>, value: String) -> Self {
        Self {
            kind,
            name: name.map(str::to_string),
            value: Some(value),
            children: Vec::new(),
        }
    }

    fn nested(kind: FieldType, name: Option<&str>, children: Vec<Event>) -> Self {
        Self {
            kind,
            name: name.map(str::to_string),
            value: None,
            children,
        }
    }
}

/// Records every call made through [`FieldEncoder`] or [`ArrayEncoder`]
///
/// # Example
///
/// ```
/// use rust_field_logger::{fields, FieldType, RecordingEncoder};
///
/// let mut rec = RecordingEncoder::new();
/// fields::string("k", "v").encode(&mut rec);
///
/// assert_eq!(rec.events().len(), 1);
/// assert_eq!(rec.events()[0].kind, FieldType::String);
/// ```
#[derive(Debug, Default)]
pub struct RecordingEncoder {
    events: Vec<Event>,
}

impl RecordingEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn into_events(self) -> Vec<Event> {
        self.events
    }

    fn push(&mut self, kind: FieldType, name: Option<&str>, value: String) {
        self.events.push(Event::scalar(kind, name, value));
    }
}

impl FieldEncoder for RecordingEncoder {
    fn bool(&mut self, name: &str, value: bool) {
        self.push(FieldType::Bool, Some(name), value.to_string())
    }
    fn complex128(&mut self, name: &str, value: Complex128) {
        self.push(FieldType::Complex128, Some(name), value.to_string())
    }
    fn complex64(&mut self, name: &str, value: Complex64) {
        self.push(FieldType::Complex64, Some(name), value.to_string())
    }
    fn float64(&mut self, name: &str, value: f64) {
        self.push(FieldType::Float64, Some(name), value.to_string())
    }
    fn float32(&mut self, name: &str, value: f32) {
        self.push(FieldType::Float32, Some(name), value.to_string())
    }
    fn int64(&mut self, name: &str, value: i64) {
        self.push(FieldType::Int64, Some(name), value.to_string())
    }
    fn int32(&mut self, name: &str, value: i32) {
        self.push(FieldType::Int32, Some(name), value.to_string())
    }
    fn int16(&mut self, name: &str, value: i16) {
        self.push(FieldType::Int16, Some(name), value.to_string())
    }
    fn int8(&mut self, name: &str, value: i8) {
        self.push(FieldType::Int8, Some(name), value.to_string())
    }
    fn uint64(&mut self, name: &str, value: u64) {
        self.push(FieldType::Uint64, Some(name), value.to_string())
    }
    fn uint32(&mut self, name: &str, value: u32) {
        self.push(FieldType::Uint32, Some(name), value.to_string())
    }
    fn uint16(&mut self, name: &str, value: u16) {
        self.push(FieldType::Uint16, Some(name), value.to_string())
    }
    fn uint8(&mut self, name: &str, value: u8) {
        self.push(FieldType::Uint8, Some(name), value.to_string())
    }
    fn string(&mut self, name: &str, value: &str) {
        self.push(FieldType::String, Some(name), value.to_string())
    }
    fn array(&mut self, name: &str, populate: ArrayPopulate<'_>) {
        let mut nested = RecordingEncoder::new();
        populate(&mut nested);
        self.events
            .push(Event::nested(FieldType::Array, Some(name), nested.events));
    }
    fn object(&mut self, name: &str, populate: ObjectPopulate<'_>) {
        let mut nested = RecordingEncoder::new();
        populate(&mut nested);
        self.events
            .push(Event::nested(FieldType::Object, Some(name), nested.events));
    }
}

impl ArrayEncoder for RecordingEncoder {
    fn bool(&mut self, value: bool) {
        self.push(FieldType::Bool, None, value.to_string())
    }
    fn complex128(&mut self, value: Complex128) {
        self.push(FieldType::Complex128, None, value.to_string())
    }
    fn complex64(&mut self, value: Complex64) {
        self.push(FieldType::Complex64, None, value.to_string())
    }
    fn float64(&mut self, value: f64) {
        self.push(FieldType::Float64, None, value.to_string())
    }
    fn float32(&mut self, value: f32) {
        self.push(FieldType::Float32, None, value.to_string())
    }
    fn int64(&mut self, value: i64) {
        self.push(FieldType::Int64, None, value.to_string())
    }
    fn int32(&mut self, value: i32) {
        self.push(FieldType::Int32, None, value.to_string())
    }
    fn int16(&mut self, value: i16) {
        self.push(FieldType::Int16, None, value.to_string())
    }
    fn int8(&mut self, value: i8) {
        self.push(FieldType::Int8, None, value.to_string())
    }
    fn uint64(&mut self, value: u64) {
        self.push(FieldType::Uint64, None, value.to_string())
    }
    fn uint32(&mut self, value: u32) {
        self.push(FieldType::Uint32, None, value.to_string())
    }
    fn uint16(&mut self, value: u16) {
        self.push(FieldType::Uint16, None, value.to_string())
    }
    fn uint8(&mut self, value: u8) {
        self.push(FieldType::Uint8, None, value.to_string())
    }
    fn string(&mut self, value: &str) {
        self.push(FieldType::String, None, value.to_string())
    }
    fn array(&mut self, populate: ArrayPopulate<'_>) {
        let mut nested = RecordingEncoder::new();
        populate(&mut nested);
        self.events
            .push(Event::nested(FieldType::Array, None, nested.events));
    }
    fn object(&mut self, populate: ObjectPopulate<'_>) {
        let mut nested = RecordingEncoder::new();
        populate(&mut nested);
        self.events
            .push(Event::nested(FieldType::Object, None, nested.events));
    }
}
