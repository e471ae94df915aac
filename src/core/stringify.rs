//! Plain-string rendering of field values
//!
//! Used by the console writer and by any sink that has no typed encoder.
//!
//! - integers: `<decimal> (0x<hex>)`, negatives as `-5 (0x-5)`
//! - floats: shortest round-trippable digits; exponent form `1.5e+07` when the
//!   decimal exponent is below -4 or at least 6; `+Inf`, `-Inf`, `NaN`
//! - booleans: `true` / `false`
//! - strings: verbatim
//! - arrays of strings: joined with `", "`
//! - arrays of `u8`: lowercase hex, no separator
//! - objects: `{name = value, ...}` with the same rules applied to members
//!
//! Any other array is an [`LoggerError::UnsupportedFieldType`].

use super::complex::{Complex128, Complex64};
use super::encoder::{ArrayEncoder, ArrayPopulate, FieldEncoder, ObjectPopulate};
use super::error::{LoggerError, Result};
use super::field::Field;
use super::field_type::FieldType;
use std::fmt::Write;

/// Render a signed integer
pub fn int(value: i64) -> String {
    if value < 0 {
        format!("{} (0x-{:x})", value, value.unsigned_abs())
    } else {
        format!("{} (0x{:x})", value, value)
    }
}

/// Render an unsigned integer
pub fn uint(value: u64) -> String {
    format!("{} (0x{:x})", value, value)
}

/// Render an `f64`
pub fn float64(value: f64) -> String {
    float(value, format!("{:e}", value), || value.to_string())
}

/// Render an `f32` with the shortest digits that round-trip as `f32`
pub fn float32(value: f32) -> String {
    float(f64::from(value), format!("{:e}", value), || value.to_string())
}

// `scientific` is the `{:e}` rendering, e.g. `1.5e7` or `2e-5`
fn float(value: f64, scientific: String, plain: impl FnOnce() -> String) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "+Inf" } else { "-Inf" }.to_string();
    }
    let Some((mantissa, exp)) = scientific.split_once('e') else {
        return plain();
    };
    let exp: i32 = exp.parse().unwrap_or(0);
    if (-4..6).contains(&exp) {
        return plain();
    }
    let sign = if exp < 0 { '-' } else { '+' };
    format!("{}e{}{:02}", mantissa, sign, exp.unsigned_abs())
}

/// Render bytes as lowercase hex
pub fn hex(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(out, "{:02x}", b);
    }
    out
}

/// Render every member a field emits as `(name, value)` pairs, in call order.
///
/// Most fields emit exactly one member; a location field whose caller is
/// unavailable emits none.
pub fn render(field: &Field) -> Result<Vec<(String, String)>> {
    let mut enc = PlainEncoder::new();
    field.encode(&mut enc);
    enc.finish()
}

/// [`FieldEncoder`] that renders members to plain strings
#[derive(Debug, Default)]
pub struct PlainEncoder {
    members: Vec<(String, String)>,
    error: Option<LoggerError>,
}

impl PlainEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rendered members, or the first unsupported value encountered
    pub fn finish(self) -> Result<Vec<(String, String)>> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.members),
        }
    }

    fn push(&mut self, name: &str, value: String) {
        self.members.push((name.to_string(), value));
    }

    fn fail(&mut self, err: LoggerError) {
        if self.error.is_none() {
            self.error = Some(err);
        }
    }
}

impl FieldEncoder for PlainEncoder {
    fn bool(&mut self, name: &str, value: bool) {
        self.push(name, value.to_string())
    }
    fn complex128(&mut self, name: &str, value: Complex128) {
        self.push(name, value.to_string())
    }
    fn complex64(&mut self, name: &str, value: Complex64) {
        self.push(name, value.to_string())
    }
    fn float64(&mut self, name: &str, value: f64) {
        self.push(name, float64(value))
    }
    fn float32(&mut self, name: &str, value: f32) {
        self.push(name, float32(value))
    }
    fn int64(&mut self, name: &str, value: i64) {
        self.push(name, int(value))
    }
    fn int32(&mut self, name: &str, value: i32) {
        self.push(name, int(value.into()))
    }
    fn int16(&mut self, name: &str, value: i16) {
        self.push(name, int(value.into()))
    }
    fn int8(&mut self, name: &str, value: i8) {
        self.push(name, int(value.into()))
    }
    fn uint64(&mut self, name: &str, value: u64) {
        self.push(name, uint(value))
    }
    fn uint32(&mut self, name: &str, value: u32) {
        self.push(name, uint(value.into()))
    }
    fn uint16(&mut self, name: &str, value: u16) {
        self.push(name, uint(value.into()))
    }
    fn uint8(&mut self, name: &str, value: u8) {
        self.push(name, uint(value.into()))
    }
    fn string(&mut self, name: &str, value: &str) {
        self.push(name, value.to_string())
    }

    fn array(&mut self, name: &str, populate: ArrayPopulate<'_>) {
        let mut elements = ElementCollector::default();
        populate(&mut elements);
        match elements.render() {
            Some(text) => self.push(name, text),
            None => self.fail(LoggerError::unsupported(name, FieldType::Array)),
        }
    }

    fn object(&mut self, name: &str, populate: ObjectPopulate<'_>) {
        let mut nested = PlainEncoder::new();
        populate(&mut nested);
        match nested.finish() {
            Ok(members) => {
                let body = members
                    .iter()
                    .map(|(k, v)| format!("{} = {}", k, v))
                    .collect::<Vec<_>>()
                    .join(", ");
                self.push(name, format!("{{{}}}", body));
            }
            Err(err) => self.fail(err),
        }
    }
}

#[derive(Debug)]
enum Element {
    Text(String),
    Byte(u8),
    Other,
}

#[derive(Debug, Default)]
struct ElementCollector {
    elements: Vec<Element>,
}

impl ElementCollector {
    fn other(&mut self) {
        self.elements.push(Element::Other);
    }

    // None when the array mixes kinds or holds anything but strings or bytes
    fn render(self) -> Option<String> {
        if self.elements.iter().all(|e| matches!(e, Element::Byte(_))) {
            let bytes: Vec<u8> = self
                .elements
                .iter()
                .filter_map(|e| match e {
                    Element::Byte(b) => Some(*b),
                    _ => None,
                })
                .collect();
            return Some(hex(&bytes));
        }

        let mut texts = Vec::with_capacity(self.elements.len());
        for element in self.elements {
            match element {
                Element::Text(s) => texts.push(s),
                Element::Byte(_) | Element::Other => return None,
            }
        }
        Some(texts.join(", "))
    }
}

impl ArrayEncoder for ElementCollector {
    fn bool(&mut self, _: bool) {
        self.other()
    }
    fn complex128(&mut self, _: Complex128) {
        self.other()
    }
    fn complex64(&mut self, _: Complex64) {
        self.other()
    }
    fn float64(&mut self, _: f64) {
        self.other()
    }
    fn float32(&mut self, _: f32) {
        self.other()
    }
    fn int64(&mut self, _: i64) {
        self.other()
    }
    fn int32(&mut self, _: i32) {
        self.other()
    }
    fn int16(&mut self, _: i16) {
        self.other()
    }
    fn int8(&mut self, _: i8) {
        self.other()
    }
    fn uint64(&mut self, _: u64) {
        self.other()
    }
    fn uint32(&mut self, _: u32) {
        self.other()
    }
    fn uint16(&mut self, _: u16) {
        self.other()
    }
    fn uint8(&mut self, value: u8) {
        self.elements.push(Element::Byte(value))
    }
    fn string(&mut self, value: &str) {
        self.elements.push(Element::Text(value.to_string()))
    }
    fn array(&mut self, _: ArrayPopulate<'_>) {
        self.other()
    }
    fn object(&mut self, _: ObjectPopulate<'_>) {
        self.other()
    }
}
