//! JSON encoder and JSON-lines writer
//!
//! Members keep the order they were encoded in. JSON objects cannot hold a
//! name twice, so a repeated member name keeps its last value.

use crate::core::complex::{Complex, Complex128, Complex64};
use crate::core::encoder::{ArrayEncoder, ArrayPopulate, FieldEncoder, LogEncoder, ObjectPopulate};
use crate::core::{Config, Record, Result, Sink, Writer};
use serde_json::{Map, Number, Value};

fn float(value: f64) -> Value {
    Number::from_f64(value)
        .map(Value::Number)
        .unwrap_or(Value::Null)
}

// Parse the shortest f32 rendering so 0.1f32 becomes 0.1, not 0.10000000149011612
fn float32(value: f32) -> Value {
    value
        .to_string()
        .parse::<f64>()
        .map(float)
        .unwrap_or(Value::Null)
}

fn complex<T: Copy>(value: Complex<T>, convert: fn(T) -> Value) -> Value {
    let mut map = Map::new();
    map.insert("re".to_string(), convert(value.re));
    map.insert("im".to_string(), convert(value.im));
    Value::Object(map)
}

/// [`FieldEncoder`] building a JSON object
#[derive(Debug, Default)]
pub struct JsonEncoder {
    map: Map<String, Value>,
}

impl JsonEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.map)
    }

    fn insert(&mut self, name: &str, value: Value) {
        self.map.insert(name.to_string(), value);
    }
}

impl FieldEncoder for JsonEncoder {
    fn bool(&mut self, name: &str, value: bool) {
        self.insert(name, Value::Bool(value))
    }
    fn complex128(&mut self, name: &str, value: Complex128) {
        self.insert(name, complex(value, float))
    }
    fn complex64(&mut self, name: &str, value: Complex64) {
        self.insert(name, complex(value, float32))
    }
    fn float64(&mut self, name: &str, value: f64) {
        self.insert(name, float(value))
    }
    fn float32(&mut self, name: &str, value: f32) {
        self.insert(name, float32(value))
    }
    fn int64(&mut self, name: &str, value: i64) {
        self.insert(name, Value::from(value))
    }
    fn int32(&mut self, name: &str, value: i32) {
        self.insert(name, Value::from(value))
    }
    fn int16(&mut self, name: &str, value: i16) {
        self.insert(name, Value::from(value))
    }
    fn int8(&mut self, name: &str, value: i8) {
        self.insert(name, Value::from(value))
    }
    fn uint64(&mut self, name: &str, value: u64) {
        self.insert(name, Value::from(value))
    }
    fn uint32(&mut self, name: &str, value: u32) {
        self.insert(name, Value::from(value))
    }
    fn uint16(&mut self, name: &str, value: u16) {
        self.insert(name, Value::from(value))
    }
    fn uint8(&mut self, name: &str, value: u8) {
        self.insert(name, Value::from(value))
    }
    fn string(&mut self, name: &str, value: &str) {
        self.insert(name, Value::from(value))
    }
    fn array(&mut self, name: &str, populate: ArrayPopulate<'_>) {
        let mut nested = JsonArrayEncoder::new();
        populate(&mut nested);
        self.insert(name, nested.into_value())
    }
    fn object(&mut self, name: &str, populate: ObjectPopulate<'_>) {
        let mut nested = JsonEncoder::new();
        populate(&mut nested);
        self.insert(name, nested.into_value())
    }
}

/// [`ArrayEncoder`] building a JSON array
#[derive(Debug, Default)]
pub struct JsonArrayEncoder {
    items: Vec<Value>,
}

impl JsonArrayEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_value(self) -> Value {
        Value::Array(self.items)
    }
}

impl ArrayEncoder for JsonArrayEncoder {
    fn bool(&mut self, value: bool) {
        self.items.push(Value::Bool(value))
    }
    fn complex128(&mut self, value: Complex128) {
        self.items.push(complex(value, float))
    }
    fn complex64(&mut self, value: Complex64) {
        self.items.push(complex(value, float32))
    }
    fn float64(&mut self, value: f64) {
        self.items.push(float(value))
    }
    fn float32(&mut self, value: f32) {
        self.items.push(float32(value))
    }
    fn int64(&mut self, value: i64) {
        self.items.push(Value::from(value))
    }
    fn int32(&mut self, value: i32) {
        self.items.push(Value::from(value))
    }
    fn int16(&mut self, value: i16) {
        self.items.push(Value::from(value))
    }
    fn int8(&mut self, value: i8) {
        self.items.push(Value::from(value))
    }
    fn uint64(&mut self, value: u64) {
        self.items.push(Value::from(value))
    }
    fn uint32(&mut self, value: u32) {
        self.items.push(Value::from(value))
    }
    fn uint16(&mut self, value: u16) {
        self.items.push(Value::from(value))
    }
    fn uint8(&mut self, value: u8) {
        self.items.push(Value::from(value))
    }
    fn string(&mut self, value: &str) {
        self.items.push(Value::from(value))
    }
    fn array(&mut self, populate: ArrayPopulate<'_>) {
        let mut nested = JsonArrayEncoder::new();
        populate(&mut nested);
        self.items.push(nested.into_value())
    }
    fn object(&mut self, populate: ObjectPopulate<'_>) {
        let mut nested = JsonEncoder::new();
        populate(&mut nested);
        self.items.push(nested.into_value())
    }
}

/// [`LogEncoder`] collecting one JSON object per entry
#[derive(Debug, Default)]
pub struct JsonEntries {
    entries: Vec<Value>,
}

impl JsonEntries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[Value] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<Value> {
        self.entries
    }
}

impl LogEncoder for JsonEntries {
    fn add_entry(&mut self, populate: ObjectPopulate<'_>) {
        let mut entry = JsonEncoder::new();
        populate(&mut entry);
        self.entries.push(entry.into_value());
    }
}

/// Writes each entry as a single-line JSON object (JSONL)
///
/// ```text
/// {"tag":"api","level":"INFO","message":"ok","file":"src/main.rs","line":12,"fields":{"status":200}}
/// ```
pub struct JsonWriter {
    sink: Sink,
    pretty: bool,
}

impl JsonWriter {
    pub fn new(sink: Sink) -> Self {
        Self {
            sink,
            pretty: false,
        }
    }

    /// Multi-line, indented output
    pub fn new_pretty(sink: Sink) -> Self {
        Self { sink, pretty: true }
    }

    /// Encode a record into a JSON value
    pub fn to_value(&self, record: &Record<'_>) -> Value {
        let mut entries = JsonEntries::new();
        entries.add_entry(&mut |enc| {
            enc.string("tag", record.tag);
            enc.string("level", record.level.name());
            enc.string("message", record.message);
            if let Some(site) = record.location {
                enc.string("file", site.file());
                enc.uint32("line", site.line());
            }
            enc.object("fields", &mut |obj| {
                for field in record.all_fields() {
                    field.encode(obj);
                }
            });
        });
        entries.into_entries().pop().unwrap_or(Value::Null)
    }
}

impl Writer for JsonWriter {
    fn write(&self, config: &Config, record: &Record<'_>) -> Result<()> {
        if !config.enabled(record.level) {
            return Ok(());
        }
        let value = self.to_value(record);
        let mut line = if self.pretty {
            serde_json::to_string_pretty(&value)?
        } else {
            serde_json::to_string(&value)?
        };
        line.push('\n');
        self.sink.write_entry(line.as_bytes())
    }

    fn name(&self) -> &str {
        "json"
    }
}
