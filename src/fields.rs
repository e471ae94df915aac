//! Typed field constructors
//!
//! Each constructor returns a [`Field`] whose closure calls exactly one
//! encoder method. Slice variants open an array and forward the elements in
//! their original order.
//!
//! ```
//! use rust_field_logger::fields;
//!
//! let request = [
//!     fields::string("method", "GET"),
//!     fields::uint16("status", 200),
//!     fields::strings("tags", &["api", "v2"]),
//! ];
//! assert_eq!(request[1].name(), "status");
//! ```

use crate::core::caller;
use crate::core::complex::{Complex128, Complex64};
use crate::core::encoder::{ArrayEncoder, Encodable, FieldEncoder};
use crate::core::field::Field;
use crate::core::logged_error::ErrorValue;
use std::panic::Location;
use std::sync::Arc;

macro_rules! scalar_field {
    ($(#[$doc:meta])* $fn_name:ident, $ty:ty, $method:ident) => {
        $(#[$doc])*
        pub fn $fn_name(name: impl Into<Arc<str>>, value: $ty) -> Field {
            let name: Arc<str> = name.into();
            Field::new(name.clone(), move |enc| enc.$method(&name, value))
        }
    };
}

macro_rules! slice_field {
    ($(#[$doc:meta])* $fn_name:ident, $ty:ty, $method:ident) => {
        $(#[$doc])*
        pub fn $fn_name(name: impl Into<Arc<str>>, values: &[$ty]) -> Field {
            let name: Arc<str> = name.into();
            let values = values.to_vec();
            Field::new(name.clone(), move |enc| {
                enc.array(&name, &mut |arr| {
                    for v in &values {
                        arr.$method(*v);
                    }
                })
            })
        }
    };
}

scalar_field!(bool, bool, bool);
scalar_field!(complex128, Complex128, complex128);
scalar_field!(complex64, Complex64, complex64);
scalar_field!(float64, f64, float64);
scalar_field!(float32, f32, float32);
scalar_field!(int64, i64, int64);
scalar_field!(int32, i32, int32);
scalar_field!(int16, i16, int16);
scalar_field!(int8, i8, int8);
scalar_field!(uint64, u64, uint64);
scalar_field!(uint32, u32, uint32);
scalar_field!(uint16, u16, uint16);
scalar_field!(uint8, u8, uint8);

slice_field!(bools, bool, bool);
slice_field!(complex128s, Complex128, complex128);
slice_field!(complex64s, Complex64, complex64);
slice_field!(float64s, f64, float64);
slice_field!(float32s, f32, float32);
slice_field!(int64s, i64, int64);
slice_field!(int32s, i32, int32);
slice_field!(int16s, i16, int16);
slice_field!(int8s, i8, int8);
slice_field!(uint64s, u64, uint64);
slice_field!(uint32s, u32, uint32);
slice_field!(uint16s, u16, uint16);
slice_field!(uint8s, u8, uint8);
slice_field!(
    /// Same encoding as [`uint8s`]; the console renders it as hex
    bytes,
    u8,
    uint8
);

/// `isize` value, encoded as `int64`
pub fn int(name: impl Into<Arc<str>>, value: isize) -> Field {
    int64(name, value as i64)
}

/// `usize` value, encoded as `uint64`
pub fn uint(name: impl Into<Arc<str>>, value: usize) -> Field {
    uint64(name, value as u64)
}

pub fn string(name: impl Into<Arc<str>>, value: impl Into<String>) -> Field {
    let name: Arc<str> = name.into();
    let value: String = value.into();
    Field::new(name.clone(), move |enc| enc.string(&name, &value))
}

pub fn strings<I>(name: impl Into<Arc<str>>, values: I) -> Field
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let name: Arc<str> = name.into();
    let values: Vec<String> = values.into_iter().map(|s| s.as_ref().to_string()).collect();
    Field::new(name.clone(), move |enc| {
        enc.array(&name, &mut |arr| {
            for v in &values {
                arr.string(v);
            }
        })
    })
}

/// Nested object filled by `populate` each time the field is encoded
pub fn object<F>(name: impl Into<Arc<str>>, populate: F) -> Field
where
    F: Fn(&mut dyn FieldEncoder) + Send + Sync + 'static,
{
    let name: Arc<str> = name.into();
    Field::new(name.clone(), move |enc| enc.object(&name, &mut |obj| populate(obj)))
}

/// Nested array filled by `populate` each time the field is encoded
pub fn array<F>(name: impl Into<Arc<str>>, populate: F) -> Field
where
    F: Fn(&mut dyn ArrayEncoder) + Send + Sync + 'static,
{
    let name: Arc<str> = name.into();
    Field::new(name.clone(), move |enc| enc.array(&name, &mut |arr| populate(arr)))
}

/// A value that encodes itself, nested as an object
pub fn encodable<T>(name: impl Into<Arc<str>>, value: T) -> Field
where
    T: Encodable + Send + Sync + 'static,
{
    let name: Arc<str> = name.into();
    Field::new(name.clone(), move |enc| {
        enc.object(&name, &mut |obj| value.encode(obj))
    })
}

/// An error field.
///
/// A [`LoggedError`](crate::LoggedError) encodes itself as a nested object
/// with `tag` and `error` members, and is marked as logged only if the entry
/// is actually written. Any other error is rendered through its `Display`
/// when the field is encoded. Wrap a custom error type with
/// [`ErrorValue::plain`].
pub fn error(name: impl Into<Arc<str>>, err: impl Into<ErrorValue>) -> Field {
    match err.into() {
        ErrorValue::Logged(err) => encodable(name, err),
        ErrorValue::Plain(err) => {
            let name: Arc<str> = name.into();
            Field::new(name.clone(), move |enc| enc.string(&name, &err.to_string()))
        }
    }
}

/// A field whose value is computed by `encode` at emission time
pub fn postpone<F>(name: impl Into<Arc<str>>, encode: F) -> Field
where
    F: Fn(&mut dyn FieldEncoder) + Send + Sync + 'static,
{
    Field::new(name, encode)
}

/// Line number of the place this field was constructed
#[track_caller]
pub fn line_number(name: impl Into<Arc<str>>) -> Field {
    let site = Location::caller();
    int64(name, i64::from(site.line()))
}

/// File name of the place this field was constructed
#[track_caller]
pub fn file_name(name: impl Into<Arc<str>>) -> Field {
    let site = Location::caller();
    string(name, site.file())
}

/// Line number of the log call that emits this field.
///
/// Emits nothing when encoded outside a log call.
pub fn postpone_line_number(name: impl Into<Arc<str>>) -> Field {
    let name: Arc<str> = name.into();
    Field::new(name.clone(), move |enc| {
        if let Some(site) = caller::current() {
            enc.int64(&name, i64::from(site.line()));
        }
    })
}

/// File name of the log call that emits this field.
///
/// Emits nothing when encoded outside a log call.
pub fn postpone_file_name(name: impl Into<Arc<str>>) -> Field {
    let name: Arc<str> = name.into();
    Field::new(name.clone(), move |enc| {
        if let Some(site) = caller::current() {
            enc.string(&name, site.file());
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::field_type::FieldType;
    use crate::core::recording::{Event, RecordingEncoder};
    use crate::core::LoggedError;

    fn record(field: &Field) -> Vec<Event> {
        let mut rec = RecordingEncoder::new();
        field.encode(&mut rec);
        rec.into_events()
    }

    #[test]
    fn test_string_field_emits_single_string_call() {
        let events = record(&string("k", "v"));
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].kind, FieldType::String);
        assert_eq!(events[0].name.as_deref(), Some("k"));
        assert_eq!(events[0].value.as_deref(), Some("v"));
    }

    #[test]
    fn test_scalar_kinds() {
        assert_eq!(bool("a", true).field_type(), FieldType::Bool);
        assert_eq!(int8("a", 1).field_type(), FieldType::Int8);
        assert_eq!(uint32("a", 1).field_type(), FieldType::Uint32);
        assert_eq!(float32("a", 1.0).field_type(), FieldType::Float32);
        assert_eq!(
            complex64("a", Complex64::new(1.0, 1.0)).field_type(),
            FieldType::Complex64
        );
        assert_eq!(int("a", -3).field_type(), FieldType::Int64);
        assert_eq!(uint("a", 3).field_type(), FieldType::Uint64);
    }

    #[test]
    fn test_slice_preserves_order() {
        let events = record(&int32s("ids", &[3, 1, 2]));
        let values: Vec<_> = events[0]
            .children
            .iter()
            .map(|e| e.value.clone().unwrap())
            .collect();
        assert_eq!(values, vec!["3", "1", "2"]);
        assert!(events[0].children.iter().all(|e| e.kind == FieldType::Int32));
    }

    #[test]
    fn test_strings_accepts_owned_and_borrowed() {
        let owned = vec!["x".to_string(), "y".to_string()];
        assert_eq!(record(&strings("s", &owned))[0].children.len(), 2);
        assert_eq!(record(&strings("s", ["a"]))[0].children.len(), 1);
    }

    #[test]
    fn test_field_reused_across_encodes() {
        let field = uint8s("bytes", &[1, 2]);
        assert_eq!(record(&field), record(&field));
    }

    #[test]
    fn test_error_field_uses_display() {
        let io_err = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
        let events = record(&error("err", io_err));
        assert_eq!(events[0].kind, FieldType::String);
        assert_eq!(events[0].value.as_deref(), Some("disk full"));
    }

    #[test]
    fn test_error_field_marks_logged_error_only_when_encoded() {
        let err = LoggedError::new("db", "timeout");
        let field = error("err", err.clone());
        assert!(!err.logged());
        record(&field);
        assert!(err.logged());
    }

    #[test]
    fn test_logged_error_field_nests_object() {
        let err = LoggedError::new("db", "timeout");
        let events = record(&error("err", err));
        assert_eq!(events[0].kind, FieldType::Object);
        let members: Vec<_> = events[0]
            .children
            .iter()
            .map(|e| (e.name.as_deref().unwrap(), e.value.as_deref().unwrap()))
            .collect();
        assert_eq!(members, vec![("tag", "db"), ("error", "timeout")]);
    }

    #[test]
    fn test_custom_error_field_uses_display() {
        #[derive(Debug)]
        struct Timeout(u32);

        impl std::fmt::Display for Timeout {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "timed out after {}ms", self.0)
            }
        }

        impl std::error::Error for Timeout {}

        let events = record(&error("err", ErrorValue::plain(Timeout(250))));
        assert_eq!(events[0].kind, FieldType::String);
        assert_eq!(events[0].value.as_deref(), Some("timed out after 250ms"));
    }

    #[test]
    fn test_line_number_captures_construction_site() {
        let expected = line!() + 1;
        let field = line_number("line");
        let events = record(&field);
        assert_eq!(events[0].value, Some(expected.to_string()));
    }

    #[test]
    fn test_file_name_captures_construction_site() {
        let events = record(&file_name("file"));
        assert!(events[0].value.as_deref().unwrap().ends_with("fields.rs"));
    }

    #[test]
    fn test_postponed_fields_empty_outside_log_call() {
        assert!(record(&postpone_line_number("line")).is_empty());
        assert!(record(&postpone_file_name("file")).is_empty());
    }

    #[test]
    fn test_postponed_line_uses_emission_site() {
        let field = postpone_line_number("line");
        let site = Location::caller();
        let events = caller::with_site(site, || record(&field));
        assert_eq!(events[0].value, Some(site.line().to_string()));
    }

    #[test]
    fn test_object_and_array_nesting() {
        let field = object("req", |enc| {
            enc.string("path", "/");
            enc.array("hdrs", &mut |arr| {
                arr.object(&mut |h| h.string("k", "v"));
            });
        });
        let events = record(&field);
        assert_eq!(events[0].children[1].children[0].kind, FieldType::Object);

        let field = array("matrix", |arr| {
            arr.array(&mut |row| row.float64(1.0));
        });
        assert_eq!(record(&field)[0].children[0].kind, FieldType::Array);
    }
}
