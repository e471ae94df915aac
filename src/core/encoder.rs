//! Encoder protocol
//!
//! Two mutually recursive capability traits that every output format
//! implements:
//!
//! - [`FieldEncoder`] receives named members of an object
//! - [`ArrayEncoder`] receives positional elements of a sequence
//!
//! A field knows the type of its value and calls exactly one matching method;
//! the encoder knows how to render that call. Neither side inspects types at
//! runtime. Nesting is unbounded: a populate callback passed to `array` or
//! `object` receives a fresh nested encoder and may open further scopes.
//!
//! The protocol itself makes no promise about sibling ordering. Encoders in
//! this crate preserve call order.

use super::complex::{Complex128, Complex64};

/// Callback that fills a nested array
pub type ArrayPopulate<'a> = &'a mut dyn FnMut(&mut dyn ArrayEncoder);

/// Callback that fills a nested object
pub type ObjectPopulate<'a> = &'a mut dyn FnMut(&mut dyn FieldEncoder);

/// Receives named values for the members of an object
pub trait FieldEncoder {
    fn bool(&mut self, name: &str, value: bool);

    fn complex128(&mut self, name: &str, value: Complex128);
    fn complex64(&mut self, name: &str, value: Complex64);
    fn float64(&mut self, name: &str, value: f64);
    fn float32(&mut self, name: &str, value: f32);

    fn int64(&mut self, name: &str, value: i64);
    fn int32(&mut self, name: &str, value: i32);
    fn int16(&mut self, name: &str, value: i16);
    fn int8(&mut self, name: &str, value: i8);

    fn uint64(&mut self, name: &str, value: u64);
    fn uint32(&mut self, name: &str, value: u32);
    fn uint16(&mut self, name: &str, value: u16);
    fn uint8(&mut self, name: &str, value: u8);

    fn string(&mut self, name: &str, value: &str);

    /// Open a nested array member named `name` and let `populate` fill it
    fn array(&mut self, name: &str, populate: ArrayPopulate<'_>);

    /// Open a nested object member named `name` and let `populate` fill it
    fn object(&mut self, name: &str, populate: ObjectPopulate<'_>);
}

/// Receives the positional elements of an array
pub trait ArrayEncoder {
    fn bool(&mut self, value: bool);

    fn complex128(&mut self, value: Complex128);
    fn complex64(&mut self, value: Complex64);
    fn float64(&mut self, value: f64);
    fn float32(&mut self, value: f32);

    fn int64(&mut self, value: i64);
    fn int32(&mut self, value: i32);
    fn int16(&mut self, value: i16);
    fn int8(&mut self, value: i8);

    fn uint64(&mut self, value: u64);
    fn uint32(&mut self, value: u32);
    fn uint16(&mut self, value: u16);
    fn uint8(&mut self, value: u8);

    fn string(&mut self, value: &str);

    fn array(&mut self, populate: ArrayPopulate<'_>);
    fn object(&mut self, populate: ObjectPopulate<'_>);
}

/// A value that can write its own members into an object encoder
pub trait Encodable {
    fn encode(&self, enc: &mut dyn FieldEncoder);
}

impl<F> Encodable for F
where
    F: Fn(&mut dyn FieldEncoder),
{
    fn encode(&self, enc: &mut dyn FieldEncoder) {
        self(enc)
    }
}

/// Accepts whole log entries, each populated as a top-level object
pub trait LogEncoder {
    fn add_entry(&mut self, populate: ObjectPopulate<'_>);
}
